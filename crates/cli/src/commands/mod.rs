mod auth;
mod projects;
mod requests;
mod reserve;

use crate::cli::Commands;
use crate::context::CommandContext;
use crate::error::Result;

pub async fn dispatch(command: Commands, ctx: &CommandContext) -> Result<()> {
    match command {
        Commands::Projects => projects::list(ctx).await,
        Commands::Project { project_id } => projects::show(project_id, ctx).await,
        Commands::Units { project_id, status } => projects::units(project_id, status, ctx).await,
        Commands::Auth { action } => auth::dispatch(action, ctx).await,
        Commands::Reserve {
            unit_id,
            note,
            gateway,
        } => reserve::run(unit_id, note.as_deref(), gateway.as_deref(), ctx).await,
        Commands::Requests => requests::list(ctx).await,
    }
}
