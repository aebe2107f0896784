//! Unified error type for the portal core.

use cardportal_i18n::I18nError;
use cardportal_session::SessionError;

/// Top-level error that wraps the per-crate errors.
///
/// The `#[from]` attributes generate `From` impls, so `?` converts session
/// and localization errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// A session-level error (overlapping login, authenticator fault).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A localization error (unknown language tag, bad catalog).
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// The configuration document could not be parsed.
    #[error("invalid portal config: {0}")]
    Config(#[from] serde_json::Error),

    /// A page asked for a manager before the context was provided.
    /// This is a startup-ordering bug, never a user-facing condition.
    #[error("{0} accessed before the portal context was initialized")]
    NotInitialized(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_session_error() {
        let err: PortalError = SessionError::LoginInProgress.into();
        assert!(matches!(err, PortalError::Session(_)));
        assert!(err.to_string().contains("already in progress"));
    }

    #[test]
    fn test_from_i18n_error() {
        let err: PortalError = I18nError::InvalidLanguage("fr".into()).into();
        assert!(matches!(err, PortalError::I18n(_)));
        assert!(err.to_string().contains("\"fr\""));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: PortalError = json_err.into();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_not_initialized_message() {
        let err = PortalError::NotInitialized("session");
        assert_eq!(
            err.to_string(),
            "session accessed before the portal context was initialized"
        );
    }
}
