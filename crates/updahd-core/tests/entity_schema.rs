//! JsonSchema validation of the entity JSON the CLI emits.

use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use updahd_core::entities::{Class, Employee, ProgressLogEntry};
use updahd_core::enums::ActionType;
use updahd_core::Feedback;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! validates_against_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

validates_against_schema!(
    employee_schema,
    Employee,
    Employee {
        id: "emp-a3f8b2c1".into(),
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        current_class_id: 3,
        class_display_name: Some("Class 3".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

validates_against_schema!(
    progress_log_schema,
    ProgressLogEntry,
    ProgressLogEntry {
        id: "prg-b7a3f9e2".into(),
        employee_id: "emp-a3f8b2c1".into(),
        class_id: 4,
        action_type: ActionType::Promoted,
        completed_at: Utc::now(),
        recorded_by: Some("user_2abc".into()),
        class_display_name: None,
    }
);

validates_against_schema!(
    class_schema,
    Class,
    Class {
        id: 1,
        name: "Class 1".into(),
        description: None,
    }
);

validates_against_schema!(feedback_schema, Feedback, Feedback::error("Employee not found."));

#[test]
fn progress_log_wire_shape_uses_action_type_strings() {
    let entry = ProgressLogEntry {
        id: "prg-b7a3f9e2".into(),
        employee_id: "emp-a3f8b2c1".into(),
        class_id: 2,
        action_type: ActionType::Downgraded,
        completed_at: Utc::now(),
        recorded_by: None,
        class_display_name: Some("Class 2".into()),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["action_type"], "downgraded");
    assert_eq!(json["class_id"], 2);
    assert_eq!(json["class_display_name"], "Class 2");
}

#[test]
fn schema_rejects_unknown_action_type() {
    let schema = serde_json::to_value(schema_for!(ProgressLogEntry)).unwrap();
    let instance = serde_json::json!({
        "id": "prg-1",
        "employee_id": "emp-1",
        "class_id": 2,
        "action_type": "demoted",
        "completed_at": "2026-02-09T14:30:00Z",
        "recorded_by": null,
        "class_display_name": null
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
