use serde::Deserialize;

use crate::CLERK_API_BASE;
use crate::claims::UpdahdClaims;
use crate::error::AuthError;

#[derive(Deserialize)]
struct CreatedSession {
    id: String,
}

#[derive(Deserialize)]
struct MintedToken {
    jwt: String,
}

/// JWT template configured in the Clerk dashboard for UpDAHD.
pub const JWT_TEMPLATE: &str = "updahd_cli";

/// Headless login via the Clerk Backend API.
///
/// Creates a Clerk session for `user_id` and mints a JWT from the
/// `updahd_cli` template. The `secret_key` is used transiently and never stored.
///
/// # Errors
///
/// Returns `AuthError::ApiKeyFailed` if session creation or JWT minting fails,
/// or `AuthError::JwksValidation` if the minted token does not validate.
pub async fn login_with_api_key(
    secret_key: &str,
    user_id: &str,
) -> Result<UpdahdClaims, AuthError> {
    let client = reqwest::Client::new();

    let session = client
        .post(format!("{CLERK_API_BASE}/sessions"))
        .bearer_auth(secret_key)
        .json(&serde_json::json!({"user_id": user_id}))
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| AuthError::ApiKeyFailed(format!("create session: {e}")))?
        .json::<CreatedSession>()
        .await
        .map_err(|e| AuthError::ApiKeyFailed(format!("parse session: {e}")))?;
    let session_id = session.id;

    let token = client
        .post(format!(
            "{CLERK_API_BASE}/sessions/{session_id}/tokens/{JWT_TEMPLATE}"
        ))
        .bearer_auth(secret_key)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| AuthError::ApiKeyFailed(format!("get token: {e}")))?
        .json::<MintedToken>()
        .await
        .map_err(|e| AuthError::ApiKeyFailed(format!("parse token: {e}")))?;

    let claims = crate::jwks::validate(&token.jwt, secret_key).await?;
    crate::token_store::store(&token.jwt)?;
    Ok(claims)
}
