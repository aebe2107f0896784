//! # cardportal
//!
//! Session and localization core for the member card portal.
//!
//! Every page of the portal depends on two pieces of process-wide state:
//! who is logged in ([`session::SessionManager`]) and which language the
//! UI speaks ([`i18n::LocalizationResolver`]). This crate builds both into
//! one [`PortalContext`], decides where the router should go
//! ([`routing::guard`]) and runs the form flows of the login and
//! forgot-password pages ([`flows`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cardportal::prelude::*;
//!
//! # async fn run() -> Result<(), PortalError> {
//! let ctx = PortalContext::builder().build();
//!
//! let outcome = flows::submit_login(ctx.session(), "demo", "123456").await?;
//! let toast = outcome.notice.render(ctx.localization());
//! println!("{}: {}", toast.title, toast.description);
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod error;
pub mod flows;
pub mod routing;

pub use cardportal_i18n as i18n;
pub use cardportal_session as session;

pub use config::PortalConfig;
pub use context::{PortalContext, PortalContextBuilder, Scope};
pub use error::PortalError;

/// Everything a page typically needs, in one import.
pub mod prelude {
    pub use crate::flows;
    pub use crate::routing::{NavigationIntent, Route, guard};
    pub use crate::{PortalConfig, PortalContext, PortalError, Scope};
    pub use cardportal_i18n::{Language, LocalizationResolver, Localizer};
    pub use cardportal_session::{
        AuthSession, Authenticator, SessionError, SessionManager, SessionState,
        UserIdentity,
    };
}
