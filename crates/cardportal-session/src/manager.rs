//! The session manager: single source of truth for "who is logged in".
//!
//! It is the only component allowed to change [`SessionState`]. Pages read
//! from it and call `login`/`logout`; they never hold auth state themselves.
//!
//! # Concurrency note
//!
//! The state sits in a `tokio::sync::watch` sender. Every mutation is one
//! `send_*` call, reads are a cheap borrow, and nothing blocks. The only
//! suspension point is the credential check inside [`SessionManager::login`];
//! during it the state is `Pending` and any render pass that reads it will
//! see exactly that.
//!
//! # Overlapping logins
//!
//! A `login` issued while another is pending is rejected with
//! [`SessionError::LoginInProgress`]. The in-flight attempt is untouched and
//! runs to completion. `logout` doesn't cancel it either.

use tokio::sync::watch;

use crate::{AuthSession, Authenticator, SessionError, SessionState, UserIdentity};

/// Owns the session state and drives it through the login lifecycle.
///
/// ## Lifecycle
///
/// ```text
/// login() ──→ [Pending] ──→ authenticator answers ──→ [Authenticated]
///                               │                            │
///                               └── rejected ──→ [Anonymous] ←── logout()
/// ```
pub struct SessionManager<A: Authenticator> {
    /// Checks credentials. Swappable so tests can script the answer.
    authenticator: A,

    /// Current state plus a change feed for whoever wants to re-render.
    state: watch::Sender<SessionState>,
}

impl<A: Authenticator> SessionManager<A> {
    /// Creates a manager in the `Anonymous` state.
    pub fn new(authenticator: A) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            authenticator,
            state,
        }
    }

    /// Attempts to log in with the given pair.
    ///
    /// The state flips to `Pending` before the first `.await`, so a caller
    /// that polls this future once can already observe it. Empty strings
    /// are passed straight to the authenticator; form validation happens
    /// before this is called.
    ///
    /// Returns `Ok(true)` if the attempt ended in `Authenticated` and
    /// `Ok(false)` if the credentials were rejected. A rejected attempt
    /// also discards any identity from an earlier session.
    ///
    /// # Errors
    /// Returns [`SessionError::LoginInProgress`] if another login is still
    /// pending. That attempt is left running.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, SessionError> {
        let started = self.state.send_if_modified(|state| {
            if state.is_pending() {
                return false;
            }
            *state = SessionState::Pending;
            true
        });
        if !started {
            tracing::debug!(%username, "login rejected, another attempt is pending");
            return Err(SessionError::LoginInProgress);
        }

        let pending = PendingGuard::new(&self.state);
        tracing::debug!(%username, "login pending");

        let next = match self.authenticator.authenticate(username, password).await {
            Ok(identity) => {
                tracing::info!(username = %identity.username, "login succeeded");
                SessionState::Authenticated { identity }
            }
            Err(SessionError::AuthFailed(reason)) => {
                tracing::info!(%username, %reason, "login rejected");
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::warn!(%username, error = %e, "authenticator failed, treating as rejected login");
                SessionState::Anonymous
            }
        };

        let authenticated = next.is_authenticated();
        pending.settle(next);
        Ok(authenticated)
    }

    /// Ends the session and forgets the identity.
    ///
    /// Calling this while already `Anonymous` changes nothing. Calling it
    /// while a login is pending is also a no-op: in-flight logins are never
    /// cancelled, so the pending attempt decides the next state.
    pub fn logout(&self) {
        let mut was_pending = false;
        let changed = self.state.send_if_modified(|state| match state {
            SessionState::Authenticated { .. } => {
                *state = SessionState::Anonymous;
                true
            }
            SessionState::Pending => {
                was_pending = true;
                false
            }
            SessionState::Anonymous => false,
        });

        if changed {
            tracing::info!("logged out");
        } else if was_pending {
            tracing::debug!("logout ignored, a login attempt is still pending");
        }
    }

    /// The logged-in identity, or `None` unless `Authenticated`.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Drives the "logging in…" indicator.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// A snapshot of the full state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts with the current state marked as seen; use
    /// `changed().await` to wait for the next transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// The authenticator this manager checks credentials with.
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }
}

impl<A: Authenticator> AuthSession for SessionManager<A> {
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, SessionError> {
        SessionManager::login(self, username, password).await
    }

    fn logout(&self) {
        SessionManager::logout(self)
    }

    fn current_user(&self) -> Option<UserIdentity> {
        SessionManager::current_user(self)
    }

    fn is_authenticated(&self) -> bool {
        SessionManager::is_authenticated(self)
    }

    fn is_pending(&self) -> bool {
        SessionManager::is_pending(self)
    }
}

/// Keeps `Pending` from becoming a resting state.
///
/// If the login future is dropped mid-check (the caller gave up on it),
/// nothing else would ever resolve the pending state. The guard resets it
/// to `Anonymous` on drop unless the login settled normally.
struct PendingGuard<'a> {
    state: &'a watch::Sender<SessionState>,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a watch::Sender<SessionState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, next: SessionState) {
        self.state.send_replace(next);
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let reset = self.state.send_if_modified(|state| {
            if state.is_pending() {
                *state = SessionState::Anonymous;
                true
            } else {
                false
            }
        });
        if reset {
            tracing::debug!("login abandoned before completion, session reset");
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
