//! Status enums shared across catalog and purchase types.

use serde::{Deserialize, Serialize};

/// Sales lifecycle of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    PreSale,
    Active,
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::PreSale => write!(f, "pre_sale"),
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Availability of a single unit. Owned by the remote catalog; the client
/// only mirrors it transiently in lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Available,
    Reserved,
    Sold,
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitStatus::Available => write!(f, "available"),
            UnitStatus::Reserved => write!(f, "reserved"),
            UnitStatus::Sold => write!(f, "sold"),
        }
    }
}

/// Lifecycle of a purchase request. The service is the only writer; clients
/// advance it exclusively through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Draft,
    Submitted,
    PendingPayment,
    Paid,
    Rejected,
    Cancelled,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Draft => write!(f, "draft"),
            RequestStatus::Submitted => write!(f, "submitted"),
            RequestStatus::PendingPayment => write!(f, "pending_payment"),
            RequestStatus::Paid => write!(f, "paid"),
            RequestStatus::Rejected => write!(f, "rejected"),
            RequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
