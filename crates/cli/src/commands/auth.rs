//! Authentication and session management commands.
//!
//! - [`login`] / [`register`] - establish a session and persist it
//! - [`logout`] - clear the local session
//! - [`status`] - fail-closed validation of the stored session

use std::io::Write;

use tracing::info;

use onepay_protocol::RegisterPayload;

use crate::cli::AuthAction;
use crate::context::CommandContext;
use crate::error::{CliError, Result};

pub async fn dispatch(action: AuthAction, ctx: &CommandContext) -> Result<()> {
    match action {
        AuthAction::Login { mobile } => login(&mobile, ctx).await,
        AuthAction::Register {
            full_name,
            mobile,
            email,
        } => register(full_name, mobile, email, ctx).await,
        AuthAction::Logout => logout(ctx),
        AuthAction::Status => status(ctx).await,
    }
}

/// Logs in and persists the session descriptor.
pub async fn login(mobile: &str, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client()?;
    let password = resolve_password()?;

    info!(target = "onepay", %mobile, "logging in");
    let mut sessions = ctx.session_manager();
    let user = sessions.login(&api, mobile, &password).await?;

    println!("Logged in as {} ({})", user.full_name, user.mobile);
    if let Some(path) = ctx.session_file() {
        println!("Session saved to {}", path.display());
    }
    Ok(())
}

/// Creates an account; the service logs the new user in directly.
pub async fn register(
    full_name: String,
    mobile: String,
    email: Option<String>,
    ctx: &CommandContext,
) -> Result<()> {
    let api = ctx.client()?;
    let password = resolve_password()?;

    info!(target = "onepay", %mobile, "registering");
    let mut sessions = ctx.session_manager();
    let user = sessions
        .register(
            &api,
            &RegisterPayload {
                full_name,
                mobile,
                password,
                email,
            },
        )
        .await?;

    println!("Account created for {} ({})", user.full_name, user.mobile);
    if let Some(path) = ctx.session_file() {
        println!("Session saved to {}", path.display());
    }
    Ok(())
}

/// Clears the local session. Never contacts the service.
pub fn logout(ctx: &CommandContext) -> Result<()> {
    let mut sessions = ctx.session_manager();
    sessions.logout()?;
    println!("Logged out.");
    Ok(())
}

/// Restores and validates the stored session, reporting the result.
///
/// This is the explicit startup validation: an invalid or revoked token is
/// cleared here rather than surfacing as an error.
pub async fn status(ctx: &CommandContext) -> Result<()> {
    let api = ctx.client()?;
    let mut sessions = ctx.session_manager();
    let session = sessions.restore(&api).await?;

    match session.user() {
        Some(user) => {
            println!("Session: active");
            println!("  Name:   {}", user.full_name);
            println!("  Mobile: {}", user.mobile);
            if let Some(email) = &user.email {
                println!("  Email:  {email}");
            }
            if let Some(path) = ctx.session_file() {
                println!("  File:   {}", path.display());
            }
        }
        None => {
            println!("Session: none");
            println!("Run `onepay auth login <mobile>` to log in.");
        }
    }
    Ok(())
}

/// Password from `ONEPAY_PASSWORD`, falling back to an interactive prompt.
/// Never taken from argv, where it would leak into shell history.
fn resolve_password() -> Result<String> {
    if let Ok(password) = std::env::var("ONEPAY_PASSWORD") {
        if !password.is_empty() {
            return Ok(password);
        }
    }

    print!("Password: ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let password = input.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(CliError::Context("Password is required".into()));
    }
    Ok(password)
}
