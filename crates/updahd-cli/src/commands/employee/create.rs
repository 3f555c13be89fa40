use serde::Serialize;
use updahd_auth::Route;
use updahd_core::Feedback;
use updahd_core::entities::Employee;
use updahd_db::EmployeeRoster;

use crate::cli::GlobalFlags;
use crate::commands::shared::feedback::finish;
use crate::context::AppContext;

#[derive(Serialize)]
struct EmployeeCreateResponse<'a> {
    employee: Option<&'a Employee>,
    feedback: &'a Feedback,
}

pub async fn handle(
    name: &str,
    email: &str,
    class_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(&Route::Dashboard)?;

    let mut roster = EmployeeRoster::new();
    let feedback = roster.add(&ctx.service, name, email, class_id).await;

    finish(
        &EmployeeCreateResponse {
            employee: roster.employees().last(),
            feedback: &feedback,
        },
        &feedback,
        flags,
    )
}
