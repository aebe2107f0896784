//! Route guarding.
//!
//! The core never navigates. It looks at the session and tells the external
//! router what it *should* do via a [`NavigationIntent`].

use std::fmt;

use cardportal_session::AuthSession;

/// Every page the portal knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Marketing landing page.
    Index,
    Login,
    ForgotPassword,
    Dashboard,
    CardDetails,
    TransactionHistory,
    /// Anything that doesn't match a known path.
    NotFound,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Login => "/login",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/dashboard",
            Self::CardDetails => "/card-details",
            Self::TransactionHistory => "/transaction-history",
            Self::NotFound => "*",
        }
    }

    /// Maps a path to its route. Unknown paths map to [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => Self::Index,
            "/login" => Self::Login,
            "/forgot-password" => Self::ForgotPassword,
            "/dashboard" => Self::Dashboard,
            "/card-details" => Self::CardDetails,
            "/transaction-history" => Self::TransactionHistory,
            _ => Self::NotFound,
        }
    }

    /// Pages that only make sense with a logged-in user.
    pub const fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::CardDetails | Self::TransactionHistory
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the router should do after a guard check or a page action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Render the current page.
    Stay,
    /// Replace the current page with another.
    Redirect(Route),
}

/// Decides whether `route` may be shown in the current session state.
///
/// - protected pages bounce anonymous visitors to `/login`;
/// - the landing page sends logged-in users to `/dashboard`;
/// - while a login is pending nothing moves, since the outcome is about to
///   change anyway.
pub fn guard(route: Route, session: &impl AuthSession) -> NavigationIntent {
    if session.is_pending() {
        return NavigationIntent::Stay;
    }

    let authenticated = session.is_authenticated();
    let intent = match route {
        r if r.requires_auth() && !authenticated => {
            NavigationIntent::Redirect(Route::Login)
        }
        Route::Index if authenticated => {
            NavigationIntent::Redirect(Route::Dashboard)
        }
        _ => NavigationIntent::Stay,
    };

    if let NavigationIntent::Redirect(to) = intent {
        tracing::debug!(from = %route, %to, "route guard redirect");
    }
    intent
}
