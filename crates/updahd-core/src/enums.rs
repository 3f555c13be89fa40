//! Action and feedback enums for UpDAHD.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the representation stored in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

/// Direction of a class transition recorded in the progress log.
///
/// ```text
/// class k ──promoted──▶ class k + 1
/// class k ──downgraded──▶ class k - 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Promoted,
    Downgraded,
}

impl ActionType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Promoted => "promoted",
            Self::Downgraded => "downgraded",
        }
    }

    /// Imperative form used in failure messages ("Failed to promote employee").
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Promoted => "promote",
            Self::Downgraded => "downgrade",
        }
    }

    /// Step applied to `current_class_id`.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Promoted => 1,
            Self::Downgraded => -1,
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedbackKind
// ---------------------------------------------------------------------------

/// Classification of the message shown after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
