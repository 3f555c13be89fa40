//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_data_dir() -> String {
    ".updahd".into()
}

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

const fn default_login_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding the local database and replica files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How long the browser login waits for its callback.
    #[serde(default = "default_login_timeout_secs")]
    pub login_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_limit: default_limit(),
            login_timeout_secs: default_login_timeout_secs(),
        }
    }
}

impl GeneralConfig {
    /// Reject values that would make list or login commands unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Zero` for a zero limit or zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Zero {
                field: "general.default_limit",
            });
        }
        if self.login_timeout_secs == 0 {
            return Err(ConfigError::Zero {
                field: "general.login_timeout_secs",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.data_dir, ".updahd");
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.login_timeout_secs, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_invalid() {
        let config = GeneralConfig {
            default_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
    }
}
