//! Wire types for the onepay sales-platform API.
//!
//! This crate contains the serde-serializable types used for communication
//! with the remote sales service over JSON. These types represent the
//! "protocol layer" - the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with the service: Match the remote API's JSON schema
//! * Stable: Changes only when the wire contract changes
//!
//! Timestamps are carried as the RFC 3339 strings the service emits; the
//! client never computes with them. Higher-level operations are built on top
//! of these types in `onepay`.

pub mod auth;
pub mod catalog;
pub mod purchase;
pub mod status;

pub use auth::*;
pub use catalog::*;
pub use purchase::*;
pub use status::*;
