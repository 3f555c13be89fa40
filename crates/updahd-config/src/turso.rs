//! Hosted database (Turso/libSQL) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TursoConfig {
    /// Database URL (e.g., `libsql://updahd-acme.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database auth token.
    #[serde(default)]
    pub auth_token: String,

    /// Local replica path for embedded replica mode. Defaults to a file under
    /// `general.data_dir` when empty.
    #[serde(default)]
    pub local_replica_path: String,
}

impl TursoConfig {
    /// Check if the config has the minimum required fields for remote access.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check if an explicit embedded replica path is set.
    pub fn has_local_replica(&self) -> bool {
        !self.local_replica_path.is_empty()
    }

    /// A URL without a token (or the reverse) would quietly fall back to the
    /// local database; reject it instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HalfConfigured` naming the empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.url.is_empty(), self.auth_token.is_empty()) {
            (false, true) => Err(ConfigError::HalfConfigured {
                field: "turso.url",
                missing: "turso.auth_token",
            }),
            (true, false) => Err(ConfigError::HalfConfigured {
                field: "turso.auth_token",
                missing: "turso.url",
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = TursoConfig::default();
        assert!(!config.is_configured());
        assert!(!config.has_local_replica());
    }

    #[test]
    fn configured_when_url_and_token_set() {
        let config = TursoConfig {
            url: "libsql://updahd.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn url_alone_is_not_enough() {
        let config = TursoConfig {
            url: "libsql://updahd.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "turso.url is set but turso.auth_token is empty");
    }

    #[test]
    fn token_alone_is_rejected() {
        let config = TursoConfig {
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HalfConfigured { field: "turso.auth_token", .. })
        ));
    }

    #[test]
    fn empty_and_full_are_both_valid() {
        assert!(TursoConfig::default().validate().is_ok());
        let full = TursoConfig {
            url: "libsql://updahd.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(full.validate().is_ok());
    }
}
