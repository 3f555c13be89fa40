use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `updahd auth login`")]
    NotAuthenticated,

    #[error("identity provider not configured: {0}")]
    NotConfigured(String),

    #[error("JWKS validation failed: {0}")]
    JwksValidation(String),

    #[error("browser login failed: {0}")]
    BrowserFlowFailed(String),

    #[error("API key auth failed: {0}")]
    ApiKeyFailed(String),

    #[error("sign-out failed: {0}")]
    SignOutFailed(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
