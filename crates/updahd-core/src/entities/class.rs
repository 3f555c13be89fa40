use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named stage in the class ladder. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
