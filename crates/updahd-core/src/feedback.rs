//! User-visible feedback produced at operation boundaries.
//!
//! Every remote failure is converted into a `Feedback` value instead of
//! propagating to the rendering layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FeedbackKind;

/// A classified message for the screen that issued the operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Feedback {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type() {
        let value = serde_json::to_value(Feedback::error("Employee not found.")).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["text"], "Employee not found.");
    }

    #[test]
    fn constructors_classify() {
        assert!(Feedback::success("ok").is_success());
        assert!(!Feedback::error("nope").is_success());
    }
}
