//! The reserve command: unit selection to payment-gateway hand-off.

use tracing::info;

use onepay::{ReserveOutcome, ReserveRequest, reserve};

use crate::context::CommandContext;
use crate::error::Result;
use crate::format::format_price;

/// Drives the reservation workflow and hands the payment URL to the user.
///
/// The core returns the redirect target as a value; printing it is this
/// command's equivalent of transitioning the browsing context.
pub async fn run(
    unit_id: i64,
    note: Option<&str>,
    gateway: Option<&str>,
    ctx: &CommandContext,
) -> Result<()> {
    let api = ctx.client()?;
    let mut sessions = ctx.session_manager();
    let session = sessions.load_cached();

    info!(target = "onepay", unit = unit_id, "starting reservation");
    let outcome = reserve(
        &api,
        session,
        ReserveRequest::new(unit_id)
            .with_note(note)
            .with_gateway(gateway),
    )
    .await?;

    match outcome {
        ReserveOutcome::LoginRequired => {
            println!("You are not logged in. Run `onepay auth login <mobile>` first.");
        }
        ReserveOutcome::PaymentReady {
            request,
            payment,
            payment_url,
        } => {
            println!("درخواست شما ثبت شد. در حال انتقال به درگاه پرداخت...");
            println!();
            println!("Tracking code: {}", request.tracking_code);
            println!("Unit:          {}", request.unit.unit_code);
            println!("Amount due:    {}", format_price(Some(payment.amount)));
            println!();
            println!("Complete the payment at:");
            println!("  {payment_url}");
        }
    }
    Ok(())
}
