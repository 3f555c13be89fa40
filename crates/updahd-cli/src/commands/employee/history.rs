use serde::Serialize;
use updahd_auth::Route;
use updahd_core::entities::ProgressLogEntry;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct HistoryRow {
    completed_at: String,
    description: String,
    action: String,
    class_id: i64,
    recorded_by: Option<String>,
}

impl From<&ProgressLogEntry> for HistoryRow {
    fn from(entry: &ProgressLogEntry) -> Self {
        Self {
            completed_at: entry.completed_at.to_rfc3339(),
            description: entry.describe(),
            action: entry.action_type.as_str().to_string(),
            class_id: entry.class_id,
            recorded_by: entry.recorded_by.clone(),
        }
    }
}

pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(&Route::Employee(id.to_string()))?;

    // Distinguish an unknown employee from one with no history yet.
    if let Err(error) = ctx.service.get_employee(id).await {
        if error.is_not_found() {
            anyhow::bail!("Employee not found.");
        }
        return Err(error.into());
    }

    let rows: Vec<HistoryRow> = ctx
        .service
        .list_progress_log(id)
        .await?
        .iter()
        .map(HistoryRow::from)
        .collect();

    output(&rows, flags.format)
}
