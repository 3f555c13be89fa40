use serde::Serialize;
use updahd_auth::{ClerkIdentity, Navigation, SessionGate};

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    redirect: String,
}

pub async fn handle(
    flags: &GlobalFlags,
    config: &updahd_config::UpdahdConfig,
) -> anyhow::Result<()> {
    let provider = ClerkIdentity::new(config.clerk.secret_key.clone());
    let gate = SessionGate::new();
    gate.resolve(&provider).await;

    let navigation = gate.logout(&provider).await;
    let redirect = match navigation {
        Navigation::Redirect(route) | Navigation::Render(route) => route.path(),
        Navigation::Wait => String::new(),
    };

    output(
        &AuthLogoutResponse {
            cleared: updahd_auth::resolve_token().is_none(),
            redirect,
        },
        flags.format,
    )
}
