mod create;
mod delete;
mod get;
mod history;
mod list;
mod progress;
mod update;

use updahd_core::enums::ActionType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmployeeCommands;
use crate::context::AppContext;

/// Handle `updahd employee <subcommand>`.
pub async fn handle(
    action: &EmployeeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmployeeCommands::List => list::handle(ctx, flags).await,
        EmployeeCommands::Get { id } => get::handle(id, ctx, flags).await,
        EmployeeCommands::Create { name, email, class } => {
            create::handle(name, email, *class, ctx, flags).await
        }
        EmployeeCommands::Update {
            id,
            name,
            email,
            class,
        } => update::handle(id, name.as_deref(), email.as_deref(), *class, ctx, flags).await,
        EmployeeCommands::Delete { id } => delete::handle(id, ctx, flags).await,
        EmployeeCommands::Promote { id } => {
            progress::handle(id, ActionType::Promoted, ctx, flags).await
        }
        EmployeeCommands::Downgrade { id } => {
            progress::handle(id, ActionType::Downgraded, ctx, flags).await
        }
        EmployeeCommands::History { id } => history::handle(id, ctx, flags).await,
    }
}
