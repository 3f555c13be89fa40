use serde::Serialize;
use updahd_auth::Route;
use updahd_core::Feedback;
use updahd_core::entities::{Employee, ProgressLogEntry};
use updahd_core::enums::ActionType;
use updahd_db::ProgressionEngine;

use crate::cli::GlobalFlags;
use crate::commands::shared::feedback::finish;
use crate::context::AppContext;

#[derive(Serialize)]
struct ProgressResponse<'a> {
    action: ActionType,
    employee: &'a Employee,
    history: Option<&'a [ProgressLogEntry]>,
    feedback: &'a Feedback,
}

/// Promote or downgrade one employee from their detail route.
pub async fn handle(
    id: &str,
    action: ActionType,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(&Route::Employee(id.to_string()))?;

    let employee = match ctx.service.get_employee(id).await {
        Ok(employee) => employee,
        Err(error) if error.is_not_found() => anyhow::bail!("Employee not found."),
        Err(error) => anyhow::bail!("Failed to fetch employee details: {error}"),
    };

    let engine = ProgressionEngine::new(&ctx.service);
    let outcome = match action {
        ActionType::Promoted => engine.promote(&employee).await,
        ActionType::Downgraded => engine.downgrade(&employee).await,
    };

    finish(
        &ProgressResponse {
            action,
            employee: &outcome.employee,
            history: outcome.history.as_deref(),
            feedback: &outcome.feedback,
        },
        &outcome.feedback,
        flags,
    )
}
