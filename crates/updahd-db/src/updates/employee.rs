//! Employee update builder.

use serde::Serialize;

/// Changed fields of an employee edit. `current_class_id` here is a direct
/// edit and writes no progress log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_class_id: Option<i64>,
}

impl EmployeeUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.current_class_id.is_none()
    }
}

#[derive(Default)]
pub struct EmployeeUpdateBuilder(EmployeeUpdate);

impl EmployeeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub const fn current_class_id(mut self, class_id: i64) -> Self {
        self.0.current_class_id = Some(class_id);
        self
    }

    #[must_use]
    pub fn build(self) -> EmployeeUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_changed_fields_only() {
        let update = EmployeeUpdateBuilder::new().email("new@example.com").build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"email": "new@example.com"})
        );
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(EmployeeUpdateBuilder::new().build().is_empty());
        assert!(!EmployeeUpdateBuilder::new().current_class_id(2).build().is_empty());
    }
}
