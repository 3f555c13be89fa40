use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::task::JoinHandle;
use updahd_auth::{AuthError, ClerkIdentity, GateHandle, Navigation, Route, SessionGate};
use updahd_config::UpdahdConfig;
use updahd_db::UpService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: UpService,
    pub config: UpdahdConfig,
    pub session: GateHandle,
    pub provider: Arc<ClerkIdentity>,
    session_task: JoinHandle<()>,
}

impl AppContext {
    /// Resolve the session, then open the store as the resolved caller.
    pub async fn init(config: UpdahdConfig) -> anyhow::Result<Self> {
        let provider = Arc::new(ClerkIdentity::new(config.clerk.secret_key.clone()));
        let (mut session, session_task) = SessionGate::spawn(Arc::clone(&provider));
        let identity = session.wait_resolved().await.identity().cloned();

        let data_dir = PathBuf::from(&config.general.data_dir);
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
        let db_path = data_dir.join("updahd.db");

        let service = UpService::from_config(&config.turso, &db_path.to_string_lossy(), identity)
            .await
            .context("failed to initialize updahd-db service")?;

        Ok(Self {
            service,
            config,
            session,
            provider,
            session_task,
        })
    }

    /// Ask the gate whether `route` may render; anything else is an error.
    ///
    /// Reads the live gate state, so a session that expired since startup
    /// is refused.
    pub fn require(&self, route: &Route) -> anyhow::Result<()> {
        require_navigation(&self.session.decide(route), route)
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.session_task.abort();
    }
}

fn require_navigation(navigation: &Navigation, route: &Route) -> anyhow::Result<()> {
    match navigation {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(Route::Login) => Err(AuthError::NotAuthenticated.into()),
        Navigation::Redirect(target) => anyhow::bail!("{route} is not available, go to {target}"),
        Navigation::Wait => anyhow::bail!("session is still resolving"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_allowed() {
        let route = Route::Dashboard;
        assert!(require_navigation(&Navigation::Render(route.clone()), &route).is_ok());
    }

    #[test]
    fn login_redirect_reports_not_authenticated() {
        let err = require_navigation(&Navigation::Redirect(Route::Login), &Route::Classes)
            .unwrap_err();
        assert!(err.to_string().contains("updahd auth login"));
    }

    #[test]
    fn wait_is_an_error() {
        assert!(require_navigation(&Navigation::Wait, &Route::Dashboard).is_err());
    }
}
