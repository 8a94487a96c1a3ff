//! The dashboard view: my purchase requests and their statuses.

use crate::context::CommandContext;
use crate::error::Result;
use crate::format::{format_price, request_status_label};

/// Lists the caller's purchase requests, newest first as the service
/// returns them.
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let api = ctx.client()?;
    let mut sessions = ctx.session_manager();

    let Some(token) = sessions.load_cached().token().map(str::to_string) else {
        println!("You are not logged in. Run `onepay auth login <mobile>` first.");
        return Ok(());
    };

    let requests = api.my_requests(&token).await?;
    if requests.is_empty() {
        println!("No purchase requests yet.");
        return Ok(());
    }

    println!(
        "{:<16} {:<10} {:<22} {:<22} {}",
        "TRACKING", "UNIT", "STATUS", "PRICE", "CREATED"
    );
    println!("{}", "-".repeat(90));
    for request in &requests {
        println!(
            "{:<16} {:<10} {:<22} {:<22} {}",
            request.tracking_code,
            request.unit.unit_code,
            request_status_label(request.status),
            format_price(Some(request.unit.price)),
            request.created_at,
        );
    }
    println!();
    println!("Total: {} requests", requests.len());
    Ok(())
}
