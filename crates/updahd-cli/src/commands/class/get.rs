use updahd_auth::Route;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(&Route::Classes)?;
    let class = match ctx.service.get_class(id).await {
        Ok(class) => class,
        Err(error) if error.is_not_found() => anyhow::bail!("Class {id} not found."),
        Err(error) => anyhow::bail!("Failed to fetch class {id}: {error}"),
    };
    output(&class, flags.format)
}
