use updahd_auth::Route;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(&Route::Classes)?;
    let classes = ctx.service.list_classes().await?;
    output(&classes, flags.format)
}
