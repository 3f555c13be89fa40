use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Employee { action } => commands::employee::handle(&action, ctx, flags).await,
        Commands::Class { action } => commands::class::handle(&action, ctx, flags).await,
        Commands::Open { path } => commands::open::handle(&path, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is pre-dispatched in main"),
    }
}
