use serde::Serialize;
use updahd_auth::Route;
use updahd_core::Feedback;
use updahd_core::entities::Employee;
use updahd_db::EmployeeRoster;
use updahd_db::updates::employee::{EmployeeUpdate, EmployeeUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::feedback::finish;
use crate::context::AppContext;

#[derive(Serialize)]
struct EmployeeUpdateResponse<'a> {
    employee: Option<&'a Employee>,
    feedback: &'a Feedback,
}

pub async fn handle(
    id: &str,
    name: Option<&str>,
    email: Option<&str>,
    class_id: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(&Route::Employee(id.to_string()))?;

    let update = build_update(name, email, class_id);
    if update.is_empty() {
        anyhow::bail!("employee update: nothing to change (pass --name, --email or --class)");
    }

    let mut roster = EmployeeRoster::new();
    let feedback = roster.edit(&ctx.service, id, &update).await;

    finish(
        &EmployeeUpdateResponse {
            employee: roster.find(id),
            feedback: &feedback,
        },
        &feedback,
        flags,
    )
}

fn build_update(name: Option<&str>, email: Option<&str>, class_id: Option<i64>) -> EmployeeUpdate {
    let mut builder = EmployeeUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(email) = email {
        builder = builder.email(email);
    }
    if let Some(class_id) = class_id {
        builder = builder.current_class_id(class_id);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_empty_update() {
        assert!(build_update(None, None, None).is_empty());
    }

    #[test]
    fn only_given_fields_are_set() {
        let update = build_update(None, Some("ada@example.com"), Some(3));
        assert_eq!(update.name, None);
        assert_eq!(update.email.as_deref(), Some("ada@example.com"));
        assert_eq!(update.current_class_id, Some(3));
    }
}
