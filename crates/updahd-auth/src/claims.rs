//! Session claims carried by tokens minted from the `updahd_cli` JWT template.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use updahd_core::identity::AuthIdentity;

use crate::error::AuthError;

/// A token this close to `exp` is no longer handed out.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// The payload fields UpDAHD reads. Other claims are ignored.
#[derive(Debug, Deserialize)]
struct SessionPayload {
    sub: String,
    exp: i64,
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// A verified Clerk session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdahdClaims {
    pub raw_jwt: String,
    /// `sub`
    pub user_id: String,
    /// `sid`; needed to revoke the session on sign-out.
    pub session_id: Option<String>,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl UpdahdClaims {
    /// Read claims out of a token payload whose signature was already checked.
    ///
    /// Empty `sid` / `email` strings are treated as absent; the Clerk template
    /// renders unset shortcodes as `""`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::JwksValidation` if `sub` or `exp` is missing or
    /// `exp` is out of range.
    pub fn from_payload(raw_jwt: &str, payload: serde_json::Value) -> Result<Self, AuthError> {
        let SessionPayload {
            sub,
            exp,
            sid,
            email,
        } = serde_json::from_value(payload)
            .map_err(|e| AuthError::JwksValidation(format!("unexpected session claims: {e}")))?;

        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::JwksValidation(format!("exp out of range: {exp}")))?;

        Ok(Self {
            raw_jwt: raw_jwt.to_string(),
            user_id: sub,
            session_id: sid.filter(|s| !s.is_empty()),
            email: email.filter(|s| !s.is_empty()),
            expires_at,
        })
    }

    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            session_id: self.session_id.clone(),
            email: self.email.clone(),
        }
    }

    /// Whether the session outlives `now` by more than [`EXPIRY_MARGIN_SECS`].
    #[must_use]
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > TimeDelta::seconds(EXPIRY_MARGIN_SECS)
    }
}
