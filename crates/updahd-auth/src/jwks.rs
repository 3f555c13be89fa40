use std::sync::{Arc, OnceLock};

use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use crate::claims::UpdahdClaims;
use crate::error::AuthError;
use crate::refresh::decode_payload;

/// Key cache for the secret the process started with. A different secret
/// gets an uncached provider.
static VERIFIER: OnceLock<(String, Arc<MemoryCacheJwksProvider>)> = OnceLock::new();

fn verifier(secret_key: &str) -> Arc<MemoryCacheJwksProvider> {
    let build = || {
        let clerk = Clerk::new(ClerkConfiguration::new(
            None,
            None,
            Some(secret_key.to_string()),
            None,
        ));
        Arc::new(MemoryCacheJwksProvider::new(clerk))
    };

    let (cached_for, provider) = VERIFIER.get_or_init(|| (secret_key.to_string(), build()));
    if cached_for == secret_key {
        Arc::clone(provider)
    } else {
        build()
    }
}

/// Check a session token's signature and expiry against the instance JWKS,
/// then read its claims.
///
/// # Errors
///
/// Returns `AuthError::JwksValidation` if the signature or `exp` check fails,
/// the JWKS endpoint is unreachable, or the payload lacks `sub` / `exp`.
pub async fn validate(jwt: &str, secret_key: &str) -> Result<UpdahdClaims, AuthError> {
    let verified = validate_jwt(jwt, verifier(secret_key))
        .await
        .map_err(|e| AuthError::JwksValidation(e.to_string()))?;

    let claims = UpdahdClaims::from_payload(jwt, decode_payload(jwt)?)?;
    if claims.user_id != verified.sub {
        return Err(AuthError::JwksValidation("subject mismatch".into()));
    }
    Ok(claims)
}
