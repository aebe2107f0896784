//! Error types for the session layer.

/// Errors that can occur during session management.
///
/// A wrong password is NOT one of these: the manager reports it as a plain
/// `Ok(false)` from `login`. Only misuse and authenticator faults end up here.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The credentials were rejected by the
    /// [`Authenticator`](crate::Authenticator).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// A login was issued while another one was still pending.
    /// Overlapping logins are rejected rather than queued.
    #[error("a login attempt is already in progress")]
    LoginInProgress,

    /// The authenticator could not reach whatever backs it.
    #[error("authenticator unavailable: {0}")]
    Unavailable(String),
}
