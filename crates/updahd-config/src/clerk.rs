//! Clerk identity configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Backend secret. Verifies session tokens, mints API-key sessions, and
    /// revokes sessions on logout. Empty means every session fails closed.
    #[serde(default)]
    pub secret_key: String,

    /// Host of the hosted sign-in page, with or without a scheme.
    #[serde(default)]
    pub frontend_url: String,

    /// Instance JWKS URL; its host stands in for `frontend_url` when that is unset.
    #[serde(default)]
    pub jwks_url: String,
}

impl ClerkConfig {
    /// The bare sign-in host browser login should open.
    ///
    /// Development instances publish JWKS under `*.clerk.accounts.dev` but
    /// serve sign-in from `*.accounts.dev`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoFrontendHost` if neither URL yields a host.
    pub fn frontend_api(&self) -> Result<String, ConfigError> {
        let source = if self.frontend_url.is_empty() {
            &self.jwks_url
        } else {
            &self.frontend_url
        };
        if source.is_empty() {
            return Err(ConfigError::NoFrontendHost(
                "set UPDAHD_CLERK__FRONTEND_URL or UPDAHD_CLERK__JWKS_URL",
            ));
        }

        let host = source
            .split_once("://")
            .map_or(source.as_str(), |(_, rest)| rest)
            .split('/')
            .next()
            .unwrap_or_default()
            .trim();
        if host.is_empty() {
            return Err(ConfigError::NoFrontendHost("URL has no host"));
        }

        Ok(host.strip_suffix(".clerk.accounts.dev").map_or_else(
            || host.to_string(),
            |instance| format!("{instance}.accounts.dev"),
        ))
    }
}
