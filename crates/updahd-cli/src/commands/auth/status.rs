use serde::Serialize;
use updahd_auth::token_store::{self, TokenSource};
use updahd_auth::{ClerkIdentity, GateState, SessionGate};

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    session_id: Option<String>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

pub async fn handle(
    flags: &GlobalFlags,
    config: &updahd_config::UpdahdConfig,
) -> anyhow::Result<()> {
    let provider = ClerkIdentity::new(config.clerk.secret_key.clone());
    let gate = SessionGate::new();
    let state = gate.resolve(&provider).await;
    let source = token_store::load_with_source().map(|(_, source)| source);

    let response = match state {
        GateState::Authenticated(identity) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(identity.user_id),
            email: identity.email,
            session_id: identity.session_id,
            expires_at: provider.claims().map(|claims| claims.expires_at.to_rfc3339()),
            token_source: source.map(TokenSource::as_str),
            note: None,
        },
        GateState::Unauthenticated | GateState::Unresolved => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            email: None,
            session_id: None,
            expires_at: None,
            token_source: source.map(TokenSource::as_str),
            note: Some(unauthenticated_note(config, source)),
        },
    };

    output(&response, flags.format)
}

fn unauthenticated_note(
    config: &updahd_config::UpdahdConfig,
    source: Option<TokenSource>,
) -> String {
    if config.clerk.secret_key.is_empty() {
        "UPDAHD_CLERK__SECRET_KEY not configured; sessions cannot be verified".to_string()
    } else if source.is_some() {
        "stored token is invalid or expired; run `updahd auth login`".to_string()
    } else {
        "not logged in; run `updahd auth login`".to_string()
    }
}
