mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassCommands;
use crate::context::AppContext;

/// Handle `updahd class <subcommand>`.
pub async fn handle(
    action: &ClassCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClassCommands::List => list::handle(ctx, flags).await,
        ClassCommands::Get { id } => get::handle(*id, ctx, flags).await,
    }
}
