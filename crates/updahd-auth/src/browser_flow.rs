use std::time::{Duration, Instant};

use crate::claims::UpdahdClaims;
use crate::error::AuthError;

/// Query parameter names Clerk may use to carry the JWT on redirect.
const TOKEN_PARAM_NAMES: [&str; 3] = ["token", "__clerk_db_jwt", "session_token"];

/// Execute the browser-based Clerk login flow.
///
/// 1. Start `tiny_http` on `127.0.0.1:0` (random port)
/// 2. Open browser to the Clerk sign-in page with a redirect to localhost
/// 3. Wait for the callback carrying the JWT (blocking, on `spawn_blocking`)
/// 4. Validate the JWT via JWKS and store it
///
/// # Errors
///
/// Returns `AuthError::BrowserFlowFailed` if the server cannot bind, the
/// callback times out, or the state nonce does not match.
pub async fn login(
    clerk_frontend_api: &str,
    secret_key: &str,
    timeout: Duration,
) -> Result<UpdahdClaims, AuthError> {
    let server = tiny_http::Server::http("127.0.0.1:0")
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;

    let state = state_nonce()?;
    let redirect_url = format!("http://127.0.0.1:{port}/callback?state={state}");
    let sign_in_url = format!(
        "https://{clerk_frontend_api}/sign-in?redirect_url={redirect}",
        redirect = urlencoding::encode(&redirect_url)
    );

    eprintln!("Opening browser to: {sign_in_url}");
    if let Err(error) = open::that(&sign_in_url) {
        eprintln!("Failed to open browser: {error}");
        eprintln!("Open the URL above manually, then return here.");
    }

    let jwt = tokio::task::spawn_blocking(move || wait_for_callback(&server, timeout, &state))
        .await
        .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))??;

    let claims = crate::jwks::validate(&jwt, secret_key).await?;
    crate::token_store::store(&jwt)?;
    Ok(claims)
}

/// 16 random bytes as hex, used as the CSRF state parameter.
fn state_nonce() -> Result<String, AuthError> {
    let mut nonce_bytes = [0u8; 16];
    getrandom::fill(&mut nonce_bytes)
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to generate CSRF nonce: {e}")))?;
    Ok(nonce_bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// What a callback request carried.
#[derive(Debug, PartialEq, Eq)]
enum Callback {
    /// Not the callback path (favicon, preflight); ignore.
    Ignored,
    /// Callback without a token (intermediate Clerk redirect); keep waiting.
    Pending,
    /// Callback with a token and a state value (possibly absent).
    Token { jwt: String, state: Option<String> },
}

fn parse_callback(url: &str) -> Result<Callback, AuthError> {
    let Some(query) = url.strip_prefix("/callback?") else {
        return Ok(Callback::Ignored);
    };

    let mut jwt = None;
    let mut state = None;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(value)
            .map_err(|e| AuthError::BrowserFlowFailed(format!("URL decode: {e}")))?
            .into_owned();
        if TOKEN_PARAM_NAMES.contains(&key) {
            jwt = Some(decoded);
        } else if key == "state" {
            state = Some(decoded);
        }
    }

    Ok(match jwt {
        Some(jwt) => Callback::Token { jwt, state },
        None => Callback::Pending,
    })
}

fn html(body: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let response = tiny_http::Response::from_string(format!("<html><body>{body}</body></html>"));
    match tiny_http::Header::from_bytes("Content-Type", "text/html") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

/// Block until the callback server receives a request with a JWT.
fn wait_for_callback(
    server: &tiny_http::Server,
    timeout: Duration,
    expected_state: &str,
) -> Result<String, AuthError> {
    let deadline = Instant::now() + timeout;
    let timed_out = || {
        AuthError::BrowserFlowFailed(format!(
            "browser callback timed out after {}s",
            timeout.as_secs()
        ))
    };

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(req)) => req,
            Ok(None) => return Err(timed_out()),
            Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
        };

        match parse_callback(request.url())? {
            Callback::Ignored => {
                let _ = request.respond(tiny_http::Response::empty(204));
            }
            Callback::Pending => {
                let _ = request.respond(html(
                    "<h1>Waiting for authentication…</h1><p>Redirecting — please wait.</p>",
                ));
            }
            Callback::Token { jwt, state } => {
                if state.as_deref() != Some(expected_state) {
                    let _ = request.respond(html(
                        "<h1>Auth failed</h1><p>State mismatch. Check CLI output.</p>",
                    ));
                    return Err(AuthError::BrowserFlowFailed(
                        "state mismatch — possible CSRF".into(),
                    ));
                }
                let _ = request.respond(html(
                    "<h1>Authenticated!</h1><p>You can close this tab.</p>",
                ));
                return Ok(jwt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_callback_paths_are_ignored() {
        assert_eq!(parse_callback("/favicon.ico").unwrap(), Callback::Ignored);
        assert_eq!(parse_callback("/callback").unwrap(), Callback::Ignored);
    }

    #[test]
    fn callback_without_token_is_pending() {
        assert_eq!(
            parse_callback("/callback?state=abc").unwrap(),
            Callback::Pending
        );
    }

    #[test]
    fn callback_extracts_token_and_state() {
        let parsed = parse_callback("/callback?state=abc&__clerk_db_jwt=a.b%2Ec").unwrap();
        assert_eq!(
            parsed,
            Callback::Token {
                jwt: "a.b.c".into(),
                state: Some("abc".into()),
            }
        );
    }

    #[test]
    fn state_nonce_is_32_hex_chars() {
        let nonce = state_nonce().unwrap();
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
