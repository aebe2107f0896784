//! Session types: who is logged in and where the login lifecycle stands.
//!
//! The portal only ever has one visitor, so there is exactly one
//! [`SessionState`] at a time. It tracks:
//! - WHETHER anyone is logged in (`Anonymous` vs `Authenticated`)
//! - WHO they are (the [`UserIdentity`] inside `Authenticated`)
//! - WHEN a credential check is still running (`Pending`)

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserIdentity
// ---------------------------------------------------------------------------

/// The identity of the logged-in user.
///
/// Created by the session manager when a login succeeds and dropped again on
/// logout or on a failed attempt. Consumers only ever see clones of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Case-sensitive login name. Never empty.
    pub username: String,

    /// Contact address. Display-only; the session layer does not validate it.
    pub email: String,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The current state of the portal session.
///
/// ```text
///              login()                 credentials match
///   Anonymous ─────────→ Pending ───────────────────────→ Authenticated
///       ↑                   │                                   │
///       └── no match ───────┘                                   │
///       └─────────────────────────── logout() ──────────────────┘
/// ```
///
/// - **Anonymous**: nobody is logged in.
/// - **Pending**: a credential check is in flight. Transient: it is always
///   followed by `Anonymous` or `Authenticated`. The login button must be
///   disabled while in this state.
/// - **Authenticated**: the identity is available to every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Pending,
    Authenticated { identity: UserIdentity },
}

impl SessionState {
    /// Returns `true` only in the `Authenticated` state.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns `true` while a login attempt is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` for states the machine can sit in indefinitely.
    pub fn is_resting(&self) -> bool {
        !self.is_pending()
    }

    /// The logged-in identity, if any.
    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated { identity } => Some(identity),
            _ => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "Anonymous"),
            Self::Pending => write!(f, "Pending"),
            Self::Authenticated { identity } => {
                write!(f, "Authenticated({})", identity.username)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// The one identity the demo authenticator accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            username: "demo".to_string(),
            password: "123456".to_string(),
            email: "demo@example.com".to_string(),
        }
    }
}

/// Configuration for session behavior.
///
/// Every field has a default, so a partial config document only needs to
/// name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated round-trip of the credential check, in milliseconds.
    ///
    /// Default: 1000. Set to 0 to resolve logins on the next poll.
    pub login_latency_ms: u64,

    /// Credentials accepted by [`DemoAuthenticator`](crate::DemoAuthenticator).
    pub demo: DemoCredentials,
}

impl SessionConfig {
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: 1000,
            demo: DemoCredentials::default(),
        }
    }
}
