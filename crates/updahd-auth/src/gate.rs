//! Session gate: the single owner of authentication state.
//!
//! ```text
//! Unresolved ──session──▶ Authenticated
//!     │                      │  sign-out / expiry
//!     └──no session──▶ Unauthenticated ◀─┘
//! ```
//!
//! `SessionGate` is the only writer. Every screen holds a `GateHandle`
//! and asks it whether a route may render.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use updahd_core::identity::AuthIdentity;

use crate::provider::{IdentityProvider, SessionEvent};
use crate::route::{Navigation, Route};

/// Authentication state as seen by the gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Unresolved,
    Unauthenticated,
    Authenticated(AuthIdentity),
}

impl GateState {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Decide what to do with a navigation request in `state`.
///
/// Authenticated visitors asking for `/login` or an unknown path land on
/// the dashboard. Unauthenticated visitors are sent to `/login` without
/// remembering where they were going.
#[must_use]
pub fn decide(state: &GateState, route: &Route) -> Navigation {
    match state {
        GateState::Unresolved => Navigation::Wait,
        GateState::Unauthenticated if route.is_protected() => Navigation::Redirect(Route::Login),
        GateState::Unauthenticated => Navigation::Render(route.clone()),
        GateState::Authenticated(_) => match route {
            Route::Login | Route::Unknown(_) => Navigation::Redirect(Route::Dashboard),
            _ => Navigation::Render(route.clone()),
        },
    }
}

/// Owner and single writer of the gate state.
pub struct SessionGate {
    state: watch::Sender<GateState>,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(GateState::Unresolved);
        Self { state }
    }

    /// A read-only view for screens.
    #[must_use]
    pub fn handle(&self) -> GateHandle {
        GateHandle {
            state: self.state.subscribe(),
        }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn decide(&self, route: &Route) -> Navigation {
        decide(&self.state.borrow(), route)
    }

    /// Resolve the session and then follow `provider`'s events on a
    /// background task.
    ///
    /// The subscription is taken before resolution so an expiry armed by
    /// `current_user` is not missed. The handle reads `Unresolved` until
    /// resolution finishes; the task ends when the event stream closes.
    pub fn spawn<P>(provider: Arc<P>) -> (GateHandle, JoinHandle<()>)
    where
        P: IdentityProvider + 'static,
    {
        let gate = Self::new();
        let handle = gate.handle();
        let events = provider.subscribe();
        let task = tokio::spawn(async move {
            gate.resolve(provider.as_ref()).await;
            drop(provider);
            gate.follow(events).await;
        });
        (handle, task)
    }

    /// Resolve the initial session. Resolution failures fail closed.
    pub async fn resolve<P: IdentityProvider>(&self, provider: &P) -> GateState {
        let next = match provider.current_user().await {
            Ok(Some(identity)) => GateState::Authenticated(identity),
            Ok(None) => GateState::Unauthenticated,
            Err(error) => {
                tracing::warn!(%error, "session resolution failed; treating as unauthenticated");
                GateState::Unauthenticated
            }
        };
        self.set(next.clone());
        next
    }

    /// Apply a session event reported by the identity collaborator.
    pub fn apply(&self, event: SessionEvent) {
        let next = match event {
            SessionEvent::SignedIn(identity) => GateState::Authenticated(identity),
            SessionEvent::SignedOut | SessionEvent::Expired => GateState::Unauthenticated,
        };
        self.set(next);
    }

    /// Apply events from `events` until the sender side closes.
    pub async fn follow(&self, mut events: broadcast::Receiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.apply(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "session event stream lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// Sign out and send the visitor to the login page.
    ///
    /// A failed sign-out request is logged; navigation happens regardless.
    pub async fn logout<P: IdentityProvider>(&self, provider: &P) -> Navigation {
        if let Err(error) = provider.sign_out().await {
            tracing::warn!(%error, "sign-out request failed");
        }
        self.set(GateState::Unauthenticated);
        Navigation::Redirect(Route::Login)
    }

    fn set(&self, next: GateState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            tracing::debug!(from = ?current, to = ?next, "session gate transition");
            *current = next;
            true
        });
    }
}

/// Cloneable reader of the gate state.
#[derive(Clone)]
pub struct GateHandle {
    state: watch::Receiver<GateState>,
}

impl GateHandle {
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn decide(&self, route: &Route) -> Navigation {
        decide(&self.state.borrow(), route)
    }

    /// Wait until the gate leaves `Unresolved`.
    ///
    /// Returns `Unauthenticated` if the gate is dropped first.
    pub async fn wait_resolved(&mut self) -> GateState {
        match self.state.wait_for(GateState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => GateState::Unauthenticated,
        }
    }
}
