//! Reservation orchestrator: unit selection to payment-gateway hand-off.
//!
//! One reservation is a fixed sequence of dependent remote calls:
//! create request, submit it unless the service already did, initiate
//! payment. The position in that sequence is held as an explicit
//! [`ReserveStage`] value rather than derived from control flow, so the
//! step order lives in one place and resumption can be added later without
//! re-deriving it.
//!
//! The orchestrator recovers nothing: a failure at any step aborts the rest,
//! leaves the request/payment wherever the server committed them
//! (compensation is a server-side concern), and surfaces the raw error for
//! classification.

use tracing::{debug, info};

use onepay_protocol::{
    CreateRequestPayload, PaymentInitPayload, PaymentInitResponse, Payment, PurchaseRequest,
    RequestStatus,
};

use crate::error::Result;
use crate::gateway::ApiClient;
use crate::session::Session;

/// Payment gateway identifier used when the caller does not override it.
pub const DEFAULT_GATEWAY: &str = "mock";

/// Fully resolved request for one reservation workflow.
#[derive(Debug, Clone)]
pub struct ReserveRequest<'a> {
    /// The unit to reserve. The service is the sole authority on whether it
    /// is actually reservable.
    pub unit_id: i64,
    /// Optional note attached to the purchase request.
    pub note: Option<&'a str>,
    /// Payment gateway override; [`DEFAULT_GATEWAY`] when absent.
    pub gateway: Option<&'a str>,
}

impl<'a> ReserveRequest<'a> {
    pub fn new(unit_id: i64) -> Self {
        Self {
            unit_id,
            note: None,
            gateway: None,
        }
    }

    pub fn with_note(mut self, note: Option<&'a str>) -> Self {
        self.note = note;
        self
    }

    pub fn with_gateway(mut self, gateway: Option<&'a str>) -> Self {
        self.gateway = gateway;
        self
    }
}

/// Position of an in-flight reservation. Each variant owns the server state
/// reached so far.
#[derive(Debug)]
enum ReserveStage {
    /// Request exists but the service returned it unsubmitted.
    Created(PurchaseRequest),
    /// Request is submitted; payment not yet initiated.
    Submitted(PurchaseRequest),
    /// Payment initiated; the redirect target is ready.
    PaymentInitiated {
        request: PurchaseRequest,
        response: PaymentInitResponse,
    },
}

/// Result of a reservation workflow.
#[derive(Debug)]
pub enum ReserveOutcome {
    /// No authenticated session: the workflow never reached the network and
    /// the caller should route to the login entry point. A short-circuit,
    /// not an error.
    LoginRequired,
    /// All steps committed; the caller must hand the browsing context to
    /// `payment_url`. That redirect is single-shot and irreversible.
    PaymentReady {
        request: PurchaseRequest,
        payment: Payment,
        payment_url: String,
    },
}

/// Drives one reservation workflow to its payment redirect.
///
/// Steps run strictly in order, each awaiting the prior response. The
/// submit step is skipped exactly when the create response already reports
/// `submitted` - the service may create requests in either state, and the
/// orchestrator branches on nothing but the returned status field.
pub async fn reserve(
    api: &ApiClient,
    session: &Session,
    request: ReserveRequest<'_>,
) -> Result<ReserveOutcome> {
    let Some(token) = session.token() else {
        debug!(target = "onepay", unit = request.unit_id, "reserve without session");
        return Ok(ReserveOutcome::LoginRequired);
    };

    let created = api
        .create_request(
            token,
            &CreateRequestPayload {
                unit_id: request.unit_id,
                note: request.note.map(str::to_string),
            },
        )
        .await?;
    info!(
        target = "onepay",
        request = created.id,
        tracking = %created.tracking_code,
        status = %created.status,
        "purchase request created"
    );

    let mut stage = if created.status == RequestStatus::Submitted {
        ReserveStage::Submitted(created)
    } else {
        ReserveStage::Created(created)
    };

    loop {
        stage = match stage {
            ReserveStage::Created(pending) => {
                let submitted = api.submit_request(token, pending.id).await?;
                debug!(target = "onepay", request = submitted.id, "request submitted");
                ReserveStage::Submitted(submitted)
            }
            ReserveStage::Submitted(submitted) => {
                let response = api
                    .initiate_payment(
                        token,
                        &PaymentInitPayload {
                            request_id: submitted.id,
                            gateway: Some(request.gateway.unwrap_or(DEFAULT_GATEWAY).to_string()),
                        },
                    )
                    .await?;
                info!(
                    target = "onepay",
                    request = submitted.id,
                    authority = %response.payment.authority,
                    "payment initiated"
                );
                ReserveStage::PaymentInitiated {
                    request: submitted,
                    response,
                }
            }
            ReserveStage::PaymentInitiated { request, response } => {
                return Ok(ReserveOutcome::PaymentReady {
                    request,
                    payment: response.payment,
                    payment_url: response.payment_url,
                });
            }
        };
    }
}
