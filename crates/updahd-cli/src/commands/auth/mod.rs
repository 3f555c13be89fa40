mod login;
mod logout;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `updahd auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &updahd_config::UpdahdConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config).await,
        AuthCommands::Status => status::handle(flags, config).await,
    }
}
