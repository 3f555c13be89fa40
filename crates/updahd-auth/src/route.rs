//! Navigation targets known to the session gate.

use std::fmt;

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Employee(String),
    Classes,
    /// Any path the router does not know.
    Unknown(String),
}

impl Route {
    /// Parse a path such as `/employee/emp-1a2b3c4d`.
    ///
    /// Trailing slashes and a leading `#` are ignored; `/` maps to the dashboard.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_start_matches('#').trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["dashboard"] => Self::Dashboard,
            ["login"] => Self::Login,
            ["classes"] => Self::Classes,
            ["employee", id] => Self::Employee((*id).to_string()),
            _ => Self::Unknown(path.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::Employee(id) => format!("/employee/{id}"),
            Self::Classes => "/classes".into(),
            Self::Unknown(path) => path.clone(),
        }
    }

    /// Whether the route requires an authenticated session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Header title for the page.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Employee Dashboard",
            Self::Classes => "Formation Classes",
            Self::Employee(_) => "Employee Details",
            Self::Login | Self::Unknown(_) => "UpDAHD",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of asking the gate about a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Session not yet resolved; show a neutral waiting indicator.
    Wait,
    Render(Route),
    Redirect(Route),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/classes/"), Route::Classes);
        assert_eq!(
            Route::parse("/employee/emp-0001"),
            Route::Employee("emp-0001".into())
        );
    }

    #[test]
    fn unknown_paths_keep_original_text() {
        assert_eq!(Route::parse("/reports"), Route::Unknown("/reports".into()));
        assert_eq!(
            Route::parse("/employee/a/b"),
            Route::Unknown("/employee/a/b".into())
        );
    }

    #[test]
    fn path_round_trips_for_known_routes() {
        for route in [
            Route::Login,
            Route::Dashboard,
            Route::Classes,
            Route::Employee("emp-1".into()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn only_login_is_public() {
        assert!(!Route::Login.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Classes.is_protected());
        assert!(Route::Employee("x".into()).is_protected());
        assert!(Route::Unknown("/x".into()).is_protected());
    }

    #[test]
    fn titles() {
        assert_eq!(Route::Dashboard.title(), "Employee Dashboard");
        assert_eq!(Route::Classes.title(), "Formation Classes");
        assert_eq!(Route::Employee("x".into()).title(), "Employee Details");
        assert_eq!(Route::Unknown("/x".into()).title(), "UpDAHD");
    }
}
