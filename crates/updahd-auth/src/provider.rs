//! Identity collaborator consumed by the session gate.
//!
//! `IdentityProvider` is the seam between the gate and the hosted identity
//! service: get-current-user, sign-out, and a stream of session events.
//! `ClerkIdentity` is the production implementation.

use std::future::Future;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use updahd_core::identity::AuthIdentity;

use crate::CLERK_API_BASE;
use crate::claims::UpdahdClaims;
use crate::error::AuthError;

/// Capacity of the session event channel. Events are rare; lagging
/// receivers only lose stale transitions.
const EVENT_CAPACITY: usize = 16;

/// A change in the identity service's view of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(AuthIdentity),
    SignedOut,
    /// The session token passed its `exp`.
    Expired,
}

/// Session resolution, sign-out, and session change notifications.
pub trait IdentityProvider: Send + Sync {
    /// Resolve the current session. `Ok(None)` means nobody is signed in.
    fn current_user(&self) -> impl Future<Output = Result<Option<AuthIdentity>, AuthError>> + Send;

    /// End the current session.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Subscribe to session changes observed after this call.
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;
}

/// Clerk-backed identity: JWKS-validated stored JWT plus session revoke.
pub struct ClerkIdentity {
    secret_key: String,
    events: broadcast::Sender<SessionEvent>,
    current: Mutex<Option<UpdahdClaims>>,
    expiry_watch: Mutex<Option<JoinHandle<()>>>,
}

impl ClerkIdentity {
    #[must_use]
    pub fn new(secret_key: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            secret_key: secret_key.into(),
            events,
            current: Mutex::new(None),
            expiry_watch: Mutex::new(None),
        }
    }

    /// Claims of the last successfully resolved session, if any.
    #[must_use]
    pub fn claims(&self) -> Option<UpdahdClaims> {
        self.current.lock().ok().and_then(|guard| guard.clone())
    }

    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.secret_key.is_empty() {
            return Err(AuthError::NotConfigured(
                "clerk.secret_key is not set (UPDAHD_CLERK__SECRET_KEY)".into(),
            ));
        }
        Ok(())
    }

    /// Browser login; emits `SignedIn` on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the provider is not configured or the flow fails.
    pub async fn login_browser(
        &self,
        frontend_api: &str,
        timeout: std::time::Duration,
    ) -> Result<UpdahdClaims, AuthError> {
        self.ensure_configured()?;
        let claims = crate::browser_flow::login(frontend_api, &self.secret_key, timeout).await?;
        self.signed_in(&claims);
        Ok(claims)
    }

    /// Headless login via the Clerk Backend API; emits `SignedIn` on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the provider is not configured or minting fails.
    pub async fn login_api_key(&self, user_id: &str) -> Result<UpdahdClaims, AuthError> {
        self.ensure_configured()?;
        let claims = crate::api_key::login_with_api_key(&self.secret_key, user_id).await?;
        self.signed_in(&claims);
        Ok(claims)
    }

    fn signed_in(&self, claims: &UpdahdClaims) {
        self.remember(Some(claims.clone()));
        let _ = self.events.send(SessionEvent::SignedIn(claims.to_identity()));
    }

    fn remember(&self, claims: Option<UpdahdClaims>) {
        let watch = claims
            .as_ref()
            .map(|c| spawn_expiry_watch(c.expires_at, self.events.clone()));
        if let Ok(mut slot) = self.expiry_watch.lock() {
            if let Some(previous) = std::mem::replace(&mut *slot, watch) {
                previous.abort();
            }
        }
        if let Ok(mut current) = self.current.lock() {
            *current = claims;
        }
    }

    async fn revoke_session(&self, session_id: &str) -> Result<(), AuthError> {
        reqwest::Client::new()
            .post(format!("{CLERK_API_BASE}/sessions/{session_id}/revoke"))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::SignOutFailed(format!("revoke session {session_id}: {e}")))?;
        Ok(())
    }
}

impl IdentityProvider for ClerkIdentity {
    async fn current_user(&self) -> Result<Option<AuthIdentity>, AuthError> {
        self.ensure_configured()?;
        let claims = crate::refresh::check_stored_token(&self.secret_key).await?;
        let identity = claims.as_ref().map(UpdahdClaims::to_identity);
        self.remember(claims);
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // Read the sid before the token is gone; an expired token still names its session.
        let session_id = self
            .claims()
            .and_then(|c| c.session_id)
            .or_else(|| {
                crate::token_store::load().and_then(|jwt| crate::refresh::decode_session_id(&jwt))
            });

        self.remember(None);
        let cleared = crate::token_store::delete();
        let _ = self.events.send(SessionEvent::SignedOut);
        cleared?;

        match session_id {
            Some(sid) if !self.secret_key.is_empty() => self.revoke_session(&sid).await,
            _ => Ok(()),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

impl Drop for ClerkIdentity {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.expiry_watch.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

/// Sleep until `expires_at`, then emit `Expired`.
///
/// Must be called inside a tokio runtime.
pub fn spawn_expiry_watch(
    expires_at: DateTime<Utc>,
    events: broadcast::Sender<SessionEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let remaining = (expires_at - Utc::now()).to_std().unwrap_or_default();
        tokio::time::sleep(remaining).await;
        tracing::debug!(%expires_at, "session token expired");
        let _ = events.send(SessionEvent::Expired);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn expiry_watch_emits_expired() {
        let (tx, mut rx) = broadcast::channel(4);
        let expires_at = Utc::now() + chrono::TimeDelta::milliseconds(50);
        let _handle = spawn_expiry_watch(expires_at, tx);

        let event = tokio::time::timeout(std::time::Duration::from_secs(2), rx.recv())
            .await
            .expect("expiry watch did not fire")
            .unwrap();
        assert_eq!(event, SessionEvent::Expired);
    }

    #[tokio::test]
    async fn expiry_watch_in_the_past_fires_immediately() {
        let (tx, mut rx) = broadcast::channel(4);
        let _handle = spawn_expiry_watch(Utc::now() - chrono::TimeDelta::seconds(5), tx);
        let event = tokio::time::timeout(std::time::Duration::from_millis(500), rx.recv())
            .await
            .expect("expiry watch did not fire")
            .unwrap();
        assert_eq!(event, SessionEvent::Expired);
    }

    #[tokio::test]
    async fn unconfigured_provider_fails_resolution() {
        let provider = ClerkIdentity::new("");
        let result = provider.current_user().await;
        assert!(matches!(result, Err(AuthError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn unconfigured_login_is_rejected() {
        let provider = ClerkIdentity::new("");
        let result = provider.login_api_key("user_123").await;
        assert!(matches!(result, Err(AuthError::NotConfigured(_))));
    }
}
