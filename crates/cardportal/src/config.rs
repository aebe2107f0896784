//! Portal configuration.

use std::time::Duration;

use cardportal_i18n::Language;
use cardportal_session::SessionConfig;
use serde::{Deserialize, Serialize};

use crate::PortalError;

/// Startup settings for the portal core.
///
/// Every field has a default, so `{}` is a valid document and a partial one
/// only needs to name what it overrides:
///
/// ```rust
/// use cardportal::PortalConfig;
/// use cardportal::i18n::Language;
///
/// let config = PortalConfig::from_json(r#"{"default_language": "en"}"#).unwrap();
/// assert_eq!(config.default_language, Language::En);
/// assert_eq!(config.session.login_latency_ms, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Language active at startup.
    pub default_language: Language,

    /// Login latency and the demo identity.
    pub session: SessionConfig,

    /// Simulated time to "send" a password-reset email, in milliseconds.
    pub password_reset_latency_ms: u64,
}

impl PortalConfig {
    /// Parses a JSON config document.
    ///
    /// # Errors
    /// Returns [`PortalError::Config`] if the document is malformed or
    /// names an unsupported language.
    pub fn from_json(document: &str) -> Result<Self, PortalError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn password_reset_latency(&self) -> Duration {
        Duration::from_millis(self.password_reset_latency_ms)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Zh,
            session: SessionConfig::default(),
            password_reset_latency_ms: 2000,
        }
    }
}
