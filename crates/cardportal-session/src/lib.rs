//! Session management for the card portal.
//!
//! This crate owns the login lifecycle of the single portal visitor:
//!
//! 1. **Authentication**: checking a username/password pair ([`Authenticator`] trait)
//! 2. **Session state**: `Anonymous`, `Pending` or `Authenticated` ([`SessionManager`])
//! 3. **Capability**: what pages may call ([`AuthSession`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Pages / router (external)  ← read is_authenticated / is_pending, call login
//!     ↕
//! cardportal (above)         ← context, route guard, page flows
//!     ↕
//! Session layer (this crate) ← the only writer of SessionState
//! ```

#![allow(async_fn_in_trait)]

mod access;
mod auth;
mod error;
mod manager;
mod session;

pub use access::AuthSession;
pub use auth::{Authenticator, DemoAuthenticator};
pub use error::SessionError;
pub use manager::SessionManager;
pub use session::{DemoCredentials, SessionConfig, SessionState, UserIdentity};
