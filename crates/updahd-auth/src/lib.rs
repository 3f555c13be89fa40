//! # updahd-auth
//!
//! Session gate and Clerk-based identity for UpDAHD.
//!
//! The [`gate::SessionGate`] owns authentication state and decides which
//! routes may render. It talks to the hosted identity service through the
//! [`provider::IdentityProvider`] trait; [`provider::ClerkIdentity`] is the
//! production implementation, built on browser login (`tiny_http` + `open`),
//! JWKS JWT validation (`clerk-rs`), OS keychain token storage (`keyring`),
//! and an API key fallback for CI.

pub mod api_key;
pub mod browser_flow;
pub mod claims;
pub mod error;
pub mod gate;
pub mod jwks;
pub mod provider;
pub mod refresh;
pub mod route;
pub mod token_store;

pub use claims::UpdahdClaims;
pub use error::AuthError;
pub use gate::{GateHandle, GateState, SessionGate};
pub use provider::{ClerkIdentity, IdentityProvider, SessionEvent};
pub use route::{Navigation, Route};

/// Clerk Backend API base URL.
pub(crate) const CLERK_API_BASE: &str = "https://api.clerk.com/v1";

/// Resolve the best available auth token without validating it.
///
/// Priority: keyring → env var → file.
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}
