use base64::Engine as _;

use crate::claims::{EXPIRY_MARGIN_SECS, UpdahdClaims};
use crate::error::AuthError;

/// Validate the stored token, if any.
///
/// Returns `None` when nothing is stored or the token is inside the expiry
/// margin.
///
/// # Errors
///
/// Returns `AuthError` if JWKS validation encounters a network or parsing error
/// (distinct from an expiring token, which returns `Ok(None)`).
pub async fn check_stored_token(secret_key: &str) -> Result<Option<UpdahdClaims>, AuthError> {
    let Some(jwt) = crate::token_store::load() else {
        return Ok(None);
    };

    let claims = crate::jwks::validate(&jwt, secret_key).await?;
    if !claims.is_usable_at(chrono::Utc::now()) {
        tracing::warn!(
            expires_at = %claims.expires_at,
            "auth token expires within {EXPIRY_MARGIN_SECS}s — re-authenticate with `updahd auth login`",
        );
        return Ok(None);
    }

    Ok(Some(claims))
}

/// Decode the JWT payload without verifying the signature.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT is not three segments, or the payload
/// is not base64url-encoded JSON.
pub fn decode_payload(jwt: &str) -> Result<serde_json::Value, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    serde_json::from_slice(&payload).map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))
}

/// Decode the Clerk session ID (`sid`) without validation.
///
/// Used on sign-out, where the token may already be expired but the session
/// should still be revoked.
#[must_use]
pub fn decode_session_id(jwt: &str) -> Option<String> {
    decode_payload(jwt)
        .ok()
        .and_then(|value| value["sid"].as_str().map(String::from))
}
