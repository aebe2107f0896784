//! The capability pages receive instead of the concrete manager.

use crate::{SessionError, UserIdentity};

/// Everything a page may do with the session, and nothing more.
///
/// [`SessionManager`](crate::SessionManager) implements this. Page flows are
/// written against the trait so tests can hand them a scripted fake.
pub trait AuthSession {
    /// See [`SessionManager::login`](crate::SessionManager::login).
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, SessionError>;

    fn logout(&self);

    fn current_user(&self) -> Option<UserIdentity>;

    fn is_authenticated(&self) -> bool;

    fn is_pending(&self) -> bool;
}
