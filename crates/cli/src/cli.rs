use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use onepay_protocol::UnitStatus;

#[derive(Parser, Debug)]
#[command(name = "onepay")]
#[command(about = "onepay - browse, reserve and pay for residential units")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// API base URL (defaults to $ONEPAY_API_BASE, then the local service)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Session descriptor file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects with availability and starting price
    #[command(alias = "ls")]
    Projects,

    /// Show one project: floor plans and the unit table
    Project { project_id: i64 },

    /// List a project's units, optionally filtered by status
    Units {
        project_id: i64,
        /// Only show units with this status
        #[arg(long, value_enum)]
        status: Option<UnitStatusArg>,
    },

    /// Authentication and session management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Reserve a unit and obtain the payment-gateway URL
    Reserve {
        unit_id: i64,
        /// Note attached to the purchase request
        #[arg(long)]
        note: Option<String>,
        /// Payment gateway identifier (service default when omitted)
        #[arg(long)]
        gateway: Option<String>,
    },

    /// List my purchase requests with their tracking codes
    #[command(alias = "my")]
    Requests,
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Log in with a mobile number; password from $ONEPAY_PASSWORD or prompt
    Login { mobile: String },

    /// Create an account and log in
    Register {
        full_name: String,
        mobile: String,
        /// Optional email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Clear the local session (purely local, no server-side revocation)
    Logout,

    /// Validate the stored session against the identity service
    Status,
}

/// Unit status filter as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UnitStatusArg {
    Available,
    Reserved,
    Sold,
}

impl From<UnitStatusArg> for UnitStatus {
    fn from(value: UnitStatusArg) -> Self {
        match value {
            UnitStatusArg::Available => UnitStatus::Available,
            UnitStatusArg::Reserved => UnitStatus::Reserved,
            UnitStatusArg::Sold => UnitStatus::Sold,
        }
    }
}
