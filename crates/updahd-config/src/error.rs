use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or env var could not be read into the config.
    #[error("failed to read UpDAHD settings: {0}")]
    Load(#[from] figment::Error),

    /// A count or timeout of zero would make its command unusable.
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    /// One half of a connection pair is set without the other.
    #[error("{field} is set but {missing} is empty")]
    HalfConfigured {
        field: &'static str,
        missing: &'static str,
    },

    /// Browser login needs a Clerk sign-in host.
    #[error("cannot determine the Clerk sign-in host: {0}")]
    NoFrontendHost(&'static str),
}
