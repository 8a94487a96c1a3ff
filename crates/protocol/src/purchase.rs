//! Purchase request and payment exchange types.

use serde::{Deserialize, Serialize};

use crate::catalog::Unit;
use crate::status::RequestStatus;

/// A server-tracked reservation attempt linking a user to a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub id: i64,
    pub unit_id: i64,
    pub user_id: i64,
    pub status: RequestStatus,
    pub tracking_code: String,
    #[serde(default)]
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
    /// Snapshot of the unit at response time.
    pub unit: Unit,
}

/// Body for `POST /requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestPayload {
    pub unit_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A payment record created by `POST /payments/initiate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub request_id: i64,
    /// Amount due in tomans.
    pub amount: i64,
    pub gateway: String,
    pub authority: String,
    pub status: String,
    #[serde(default)]
    pub ref_id: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub verified_at: Option<String>,
}

/// Body for `POST /payments/initiate`. When `gateway` is omitted the service
/// falls back to its default gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInitPayload {
    pub request_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// Response of `POST /payments/initiate`: the payment record plus the
/// external gateway URL the browsing context must be handed to. Consumed
/// immediately, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInitResponse {
    pub payment: Payment,
    pub payment_url: String,
}
