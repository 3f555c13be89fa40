//! Progress log repository.
//!
//! Append-only: one entry per successful class transition, never updated.
//! Reads are always the full history for one employee, newest first.

use chrono::Utc;

use updahd_core::entities::ProgressLogEntry;
use updahd_core::enums::ActionType;
use updahd_core::ids::PREFIX_PROGRESS_LOG;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime, parse_enum};
use crate::service::UpService;

const RETURNING_COLS: &str = "id, employee_id, class_id, action_type, completed_at, recorded_by";

fn row_to_entry(row: &libsql::Row) -> Result<ProgressLogEntry, DatabaseError> {
    Ok(ProgressLogEntry {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        class_id: row.get(2)?,
        action_type: parse_enum(&row.get::<String>(3)?)?,
        completed_at: parse_datetime(&row.get::<String>(4)?)?,
        recorded_by: get_opt_string(row, 5)?,
        class_display_name: None,
    })
}

impl UpService {
    /// Record a transition into `class_id`, stamped now and returning the stored row.
    pub async fn append_progress_log(
        &self,
        employee_id: &str,
        class_id: i64,
        action: ActionType,
    ) -> Result<ProgressLogEntry, DatabaseError> {
        let id = self.db().generate_id(PREFIX_PROGRESS_LOG).await?;
        let completed_at = format_timestamp(Utc::now());
        let recorded_by = self.identity().map(|identity| identity.user_id.as_str());

        let mut rows = self
            .db()
            .query_with(
                &format!(
                    "INSERT INTO progress_logs ({RETURNING_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     RETURNING {RETURNING_COLS}"
                ),
                || {
                    libsql::params![
                        id.as_str(),
                        employee_id,
                        class_id,
                        action.as_str(),
                        completed_at.as_str(),
                        recorded_by
                    ]
                },
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_entry(&row)
    }

    /// Full history for `employee_id`, newest first. Empty is a valid result.
    pub async fn list_progress_log(
        &self,
        employee_id: &str,
    ) -> Result<Vec<ProgressLogEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT p.id, p.employee_id, p.class_id, p.action_type, p.completed_at,
                        p.recorded_by, c.name
                 FROM progress_logs p LEFT JOIN classes c ON c.id = p.class_id
                 WHERE p.employee_id = ?1
                 ORDER BY p.completed_at DESC, p.rowid DESC",
                || [employee_id],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut entry = row_to_entry(&row)?;
            entry.class_display_name = get_opt_string(&row, 6)?;
            entries.push(entry);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_employee, test_service, test_service_as};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn append_returns_stored_row() {
        let svc = test_service_as("user_admin").await;
        let emp = seed_employee(&svc, "Ada", 3).await;
        let before = Utc::now();

        let entry = svc
            .append_progress_log(&emp.id, 4, ActionType::Promoted)
            .await
            .unwrap();
        assert!(entry.id.starts_with("prg-"));
        assert_eq!(entry.employee_id, emp.id);
        assert_eq!(entry.class_id, 4);
        assert_eq!(entry.action_type, ActionType::Promoted);
        assert_eq!(entry.recorded_by.as_deref(), Some("user_admin"));
        assert!(entry.completed_at >= before - chrono::TimeDelta::milliseconds(1));
    }

    #[tokio::test]
    async fn history_is_newest_first_with_class_names() {
        let svc = test_service().await;
        let emp = seed_employee(&svc, "Ada", 2).await;
        svc.append_progress_log(&emp.id, 3, ActionType::Promoted)
            .await
            .unwrap();
        svc.append_progress_log(&emp.id, 2, ActionType::Downgraded)
            .await
            .unwrap();

        let history = svc.list_progress_log(&emp.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].action_type, ActionType::Downgraded);
        assert_eq!(history[0].class_display_name.as_deref(), Some("Class 2"));
        assert_eq!(history[1].action_type, ActionType::Promoted);
        assert!(history[0].completed_at >= history[1].completed_at);
        assert_eq!(history[1].recorded_by, None);
    }

    #[tokio::test]
    async fn empty_history_is_ok() {
        let svc = test_service().await;
        let emp = seed_employee(&svc, "Ada", 1).await;
        assert!(svc.list_progress_log(&emp.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_cannot_be_edited() {
        let svc = test_service().await;
        let emp = seed_employee(&svc, "Ada", 1).await;
        let entry = svc
            .append_progress_log(&emp.id, 2, ActionType::Promoted)
            .await
            .unwrap();
        let result = svc
            .db()
            .conn()
            .execute(
                "UPDATE progress_logs SET class_id = 5 WHERE id = ?1",
                [entry.id.as_str()],
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn append_for_unknown_employee_fails() {
        let svc = test_service().await;
        let result = svc
            .append_progress_log("emp-missing", 2, ActionType::Promoted)
            .await;
        assert!(result.is_err());
    }
}
