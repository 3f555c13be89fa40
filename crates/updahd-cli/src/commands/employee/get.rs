use serde::Serialize;
use updahd_auth::Route;
use updahd_core::entities::{Employee, ProgressLogEntry};
use updahd_core::enums::ActionType;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct EmployeeDetailResponse {
    employee: Employee,
    history: Vec<ProgressLogEntry>,
    actions: Vec<ActionType>,
}

pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(&Route::Employee(id.to_string()))?;

    let employee = match ctx.service.get_employee(id).await {
        Ok(employee) => employee,
        Err(error) if error.is_not_found() => anyhow::bail!("Employee not found."),
        Err(error) => anyhow::bail!("Failed to fetch employee details: {error}"),
    };

    // A missing history is not fatal for the detail view.
    let history = match ctx.service.list_progress_log(id).await {
        Ok(history) => history,
        Err(error) => {
            tracing::warn!(%error, employee_id = id, "failed to fetch progress history");
            Vec::new()
        }
    };

    let actions = employee.offered_actions();
    output(
        &EmployeeDetailResponse {
            employee,
            history,
            actions,
        },
        flags.format,
    )
}
