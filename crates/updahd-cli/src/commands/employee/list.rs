use updahd_auth::Route;
use updahd_db::EmployeeRoster;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(&Route::Dashboard)?;

    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let mut roster = EmployeeRoster::new();
    let feedback = roster.load(&ctx.service, limit).await;
    if !feedback.is_success() {
        anyhow::bail!("{}", feedback.text);
    }
    tracing::debug!(count = roster.employees().len(), limit, "employees loaded");

    output(&roster.employees(), flags.format)
}
