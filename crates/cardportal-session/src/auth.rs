//! Authentication hook for checking a username/password pair.
//!
//! The session manager doesn't know where credentials live. It calls an
//! [`Authenticator`] and turns the answer into a state transition. The
//! portal ships [`DemoAuthenticator`], which accepts a single configured
//! identity after a simulated round-trip; tests plug in their own.

use std::future::Future;
use std::time::Duration;

use crate::{DemoCredentials, SessionConfig, SessionError, UserIdentity};

/// Checks credentials and returns the matching identity.
///
/// # Trait bounds
///
/// - `Send + Sync` → the authenticator lives inside a shared context and
///   may be called from any task.
/// - `'static` → it lives as long as the portal does.
///
/// # Example
///
/// ```rust
/// use cardportal_session::{Authenticator, SessionError, UserIdentity};
///
/// /// Lets anyone in whose password equals their username.
/// struct MirrorAuthenticator;
///
/// impl Authenticator for MirrorAuthenticator {
///     async fn authenticate(
///         &self,
///         username: &str,
///         password: &str,
///     ) -> Result<UserIdentity, SessionError> {
///         if !username.is_empty() && username == password {
///             Ok(UserIdentity::new(username, format!("{username}@example.com")))
///         } else {
///             Err(SessionError::AuthFailed("password mismatch".into()))
///         }
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Validates the pair and returns who it belongs to.
    ///
    /// # Returns
    /// - `Ok(UserIdentity)` → the credentials match
    /// - `Err(SessionError::AuthFailed)` → they don't
    /// - any other `Err` → the check itself could not run
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserIdentity, SessionError>> + Send;
}

/// Accepts exactly one configured identity (`demo` / `123456` by default).
///
/// Sleeps for the configured latency before answering so the UI gets to
/// show its "logging in…" state, the same way a real backend would.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    credentials: DemoCredentials,
    latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            credentials: config.demo.clone(),
            latency: config.login_latency(),
        }
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl Authenticator for DemoAuthenticator {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserIdentity, SessionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if username == self.credentials.username
            && password == self.credentials.password
        {
            Ok(UserIdentity::new(
                self.credentials.username.clone(),
                self.credentials.email.clone(),
            ))
        } else {
            Err(SessionError::AuthFailed(
                "invalid username or password".into(),
            ))
        }
    }
}
