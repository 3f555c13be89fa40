use serde::Serialize;
use updahd_auth::Route;
use updahd_core::Feedback;
use updahd_db::EmployeeRoster;

use crate::cli::GlobalFlags;
use crate::commands::shared::feedback::finish;
use crate::context::AppContext;

#[derive(Serialize)]
struct EmployeeDeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
    feedback: &'a Feedback,
}

pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(&Route::Dashboard)?;

    let mut roster = EmployeeRoster::new();
    let feedback = roster.remove(&ctx.service, id).await;

    finish(
        &EmployeeDeleteResponse {
            id,
            deleted: feedback.is_success(),
            feedback: &feedback,
        },
        &feedback,
        flags,
    )
}
