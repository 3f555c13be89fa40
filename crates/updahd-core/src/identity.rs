use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `updahd-auth` once a session resolves, consumed by the session
/// gate, the CLI context, and `updahd-db` (as the `recorded_by` of progress
/// log entries). Contains only data fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Clerk user ID (from JWT `sub` claim).
    pub user_id: String,
    /// Clerk session ID (from JWT `sid` claim). Needed to revoke on sign-out.
    pub session_id: Option<String>,
    /// Primary email, when the token template carries it.
    pub email: Option<String>,
}
