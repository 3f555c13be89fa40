use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;
use updahd_auth::{ClerkIdentity, IdentityProvider, Navigation, Route, SessionEvent, SessionGate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: String,
    redirect: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &updahd_config::UpdahdConfig,
) -> anyhow::Result<()> {
    if config.clerk.secret_key.is_empty() {
        anyhow::bail!("auth login: UPDAHD_CLERK__SECRET_KEY is not configured");
    }

    let provider = ClerkIdentity::new(config.clerk.secret_key.clone());
    let gate = SessionGate::new();
    let events = provider.subscribe();

    let claims = if args.api_key {
        let user_id = args
            .user_id
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("auth login --api-key requires --user-id"))?;
        provider.login_api_key(user_id).await?
    } else {
        let frontend_api = config.clerk.frontend_api()?;
        let timeout = Duration::from_secs(config.general.login_timeout_secs);
        provider.login_browser(&frontend_api, timeout).await?
    };

    // Apply the SignedIn event the provider just emitted.
    drain(&gate, events);
    let redirect = match gate.decide(&Route::Login) {
        Navigation::Redirect(route) | Navigation::Render(route) => route.path(),
        Navigation::Wait => Route::Login.path(),
    };

    output(
        &AuthLoginResponse {
            authenticated: gate.state().identity().is_some(),
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.expires_at.to_rfc3339(),
            redirect,
        },
        flags.format,
    )
}

fn drain(gate: &SessionGate, mut events: broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        gate.apply(event);
    }
}
