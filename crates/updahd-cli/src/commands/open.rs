use serde::Serialize;
use updahd_auth::{Navigation, Route};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct OpenResponse {
    requested: String,
    outcome: &'static str,
    path: String,
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_expires_at: Option<String>,
}

/// Handle `updahd open <path>`: report whether the page renders or where
/// the gate sends the visitor instead.
pub async fn handle(path: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(path);
    let mut response = resolve(path, &ctx.session.decide(&route))?;
    response.session_expires_at = ctx
        .provider
        .claims()
        .map(|claims| claims.expires_at.to_rfc3339());
    output(&response, flags.format)
}

fn resolve(requested: &str, navigation: &Navigation) -> anyhow::Result<OpenResponse> {
    let (outcome, target) = match navigation {
        Navigation::Render(route) => ("render", route),
        Navigation::Redirect(route) => ("redirect", route),
        Navigation::Wait => anyhow::bail!("session is still resolving"),
    };
    Ok(OpenResponse {
        requested: requested.to_string(),
        outcome,
        path: target.path(),
        title: target.title(),
        session_expires_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use updahd_auth::GateState;
    use updahd_auth::gate::decide;
    use updahd_core::identity::AuthIdentity;

    fn signed_in() -> GateState {
        GateState::Authenticated(AuthIdentity {
            user_id: "user_hr1".into(),
            session_id: None,
            email: None,
        })
    }

    #[test]
    fn employee_page_renders_with_its_title() {
        let navigation = decide(&signed_in(), &Route::parse("/employee/emp-1a2b3c4d/"));
        assert_eq!(
            resolve("/employee/emp-1a2b3c4d/", &navigation).unwrap(),
            OpenResponse {
                requested: "/employee/emp-1a2b3c4d/".into(),
                outcome: "render",
                path: "/employee/emp-1a2b3c4d".into(),
                title: "Employee Details",
                session_expires_at: None,
            }
        );
    }

    #[test]
    fn unknown_page_sends_signed_in_visitor_to_dashboard() {
        let navigation = decide(&signed_in(), &Route::parse("/reports"));
        let response = resolve("/reports", &navigation).unwrap();
        assert_eq!(response.outcome, "redirect");
        assert_eq!(response.path, "/dashboard");
        assert_eq!(response.title, "Employee Dashboard");
    }

    #[test]
    fn signed_out_visitor_is_sent_to_login() {
        let navigation = decide(&GateState::Unauthenticated, &Route::parse("/classes"));
        let response = resolve("/classes", &navigation).unwrap();
        assert_eq!(response.outcome, "redirect");
        assert_eq!(response.path, "/login");
    }

    #[test]
    fn unresolved_session_is_an_error() {
        assert!(resolve("/dashboard", &Navigation::Wait).is_err());
    }
}
