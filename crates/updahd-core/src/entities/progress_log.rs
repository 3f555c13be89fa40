use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActionType;

/// An append-only record of one class transition.
///
/// `class_id` is the class the employee moved into. Entries are written once
/// per successful transition and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgressLogEntry {
    pub id: String,
    pub employee_id: String,
    pub class_id: i64,
    pub action_type: ActionType,
    pub completed_at: DateTime<Utc>,
    pub recorded_by: Option<String>,
    pub class_display_name: Option<String>,
}

impl ProgressLogEntry {
    /// One-line history description, e.g. `Got promoted to Class 4`.
    #[must_use]
    pub fn describe(&self) -> String {
        let target = self
            .class_display_name
            .clone()
            .unwrap_or_else(|| format!("Class ID: {}", self.class_id));
        format!("Got {} to {target}", self.action_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(class_display_name: Option<&str>) -> ProgressLogEntry {
        ProgressLogEntry {
            id: "prg-00000001".into(),
            employee_id: "emp-00000001".into(),
            class_id: 4,
            action_type: ActionType::Promoted,
            completed_at: Utc::now(),
            recorded_by: None,
            class_display_name: class_display_name.map(String::from),
        }
    }

    #[test]
    fn describe_uses_class_name() {
        assert_eq!(entry(Some("Class 4")).describe(), "Got promoted to Class 4");
    }

    #[test]
    fn describe_falls_back_to_class_id() {
        assert_eq!(entry(None).describe(), "Got promoted to Class ID: 4");
    }
}
