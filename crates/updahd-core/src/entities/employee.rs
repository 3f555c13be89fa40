use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActionType;
use crate::progression;

/// An employee enrolled in the class ladder.
///
/// `class_display_name` is the joined `classes.name` for `current_class_id`,
/// filled in by the fetch that produced this record. It is `None` when the
/// record came from a write that did not join.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub current_class_id: i64,
    pub class_display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Class label for display: the joined name, or `Class ID: n`.
    #[must_use]
    pub fn class_label(&self) -> String {
        self.class_display_name
            .clone()
            .unwrap_or_else(|| format!("Class ID: {}", self.current_class_id))
    }

    /// Actions that may be offered for this employee.
    #[must_use]
    pub fn offered_actions(&self) -> Vec<ActionType> {
        progression::offered_actions(self.current_class_id)
    }
}
