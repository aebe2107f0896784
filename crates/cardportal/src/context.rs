//! The portal context: both state managers, built once and shared.
//!
//! Instead of ambient globals, the application builds one
//! [`PortalContext`] at startup and hands clones of it (cheap, `Arc`
//! inside) to every page. Pages that may run before startup finished get
//! a [`Scope`], whose accessors fail with
//! [`PortalError::NotInitialized`] until a context is provided.

use std::sync::Arc;

use cardportal_i18n::{LocalizationResolver, TranslationTable};
use cardportal_session::{Authenticator, DemoAuthenticator, SessionManager};

use crate::{PortalConfig, PortalError};

/// Shared handle to the session manager and the localization resolver.
///
/// Build it once with [`PortalContext::builder`]; clone the handle, never
/// the managers. Both managers live as long as the last clone.
pub struct PortalContext<A: Authenticator = DemoAuthenticator> {
    session: Arc<SessionManager<A>>,
    localization: Arc<LocalizationResolver>,
    config: Arc<PortalConfig>,
}

impl PortalContext {
    /// Creates a new builder.
    pub fn builder() -> PortalContextBuilder {
        PortalContextBuilder::new()
    }
}

impl<A: Authenticator> PortalContext<A> {
    pub fn session(&self) -> &SessionManager<A> {
        &self.session
    }

    pub fn localization(&self) -> &LocalizationResolver {
        &self.localization
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}

// Derived `Clone` would require `A: Clone`; the authenticator sits behind
// the `Arc` and never needs to be cloned.
impl<A: Authenticator> Clone for PortalContext<A> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            localization: Arc::clone(&self.localization),
            config: Arc::clone(&self.config),
        }
    }
}

/// Builder for the portal context.
///
/// # Example
///
/// ```rust
/// use cardportal::prelude::*;
///
/// let ctx = PortalContext::builder()
///     .config(PortalConfig::default())
///     .build();
/// assert_eq!(ctx.localization().translate("login.button"), "登錄");
/// assert!(!ctx.session().is_authenticated());
/// ```
pub struct PortalContextBuilder {
    config: PortalConfig,
    translations: Option<TranslationTable>,
}

impl PortalContextBuilder {
    /// Creates a builder with default settings and the built-in dictionary.
    pub fn new() -> Self {
        Self {
            config: PortalConfig::default(),
            translations: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses and sets a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`PortalError::Config`] if the document doesn't parse.
    pub fn config_json(self, document: &str) -> Result<Self, PortalError> {
        Ok(self.config(PortalConfig::from_json(document)?))
    }

    /// Replaces the built-in dictionary.
    pub fn translations(mut self, table: TranslationTable) -> Self {
        self.translations = Some(table);
        self
    }

    /// Builds the context with the demo authenticator from the config.
    pub fn build(self) -> PortalContext<DemoAuthenticator> {
        let auth = DemoAuthenticator::new(&self.config.session);
        self.build_with(auth)
    }

    /// Builds the context with a custom authenticator.
    pub fn build_with<A: Authenticator>(self, auth: A) -> PortalContext<A> {
        let table = self.translations.unwrap_or_else(TranslationTable::builtin);
        let localization =
            LocalizationResolver::new(table, self.config.default_language);

        tracing::info!(
            language = %self.config.default_language,
            login_latency_ms = self.config.session.login_latency_ms,
            "portal context initialized"
        );

        PortalContext {
            session: Arc::new(SessionManager::new(auth)),
            localization: Arc::new(localization),
            config: Arc::new(self.config),
        }
    }
}

impl Default for PortalContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Where pages get the context from.
///
/// A scope starts empty and becomes usable once a context is provided.
/// Reaching for a manager through an empty scope is a startup-ordering
/// bug and is reported as [`PortalError::NotInitialized`].
pub struct Scope<A: Authenticator = DemoAuthenticator> {
    context: Option<PortalContext<A>>,
}

impl<A: Authenticator> Scope<A> {
    /// A scope with nothing provided yet.
    pub fn empty() -> Self {
        Self { context: None }
    }

    /// A scope that hands out `context`.
    pub fn provide(context: PortalContext<A>) -> Self {
        Self {
            context: Some(context),
        }
    }

    /// Provides the context after the fact. A second call replaces the
    /// first; startup is expected to call it exactly once.
    pub fn set(&mut self, context: PortalContext<A>) {
        if self.context.is_some() {
            tracing::warn!("portal context provided twice, replacing");
        }
        self.context = Some(context);
    }

    pub fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// # Errors
    /// [`PortalError::NotInitialized`] until a context is provided.
    pub fn context(&self) -> Result<&PortalContext<A>, PortalError> {
        self.context
            .as_ref()
            .ok_or(PortalError::NotInitialized("portal context"))
    }

    /// # Errors
    /// [`PortalError::NotInitialized`] until a context is provided.
    pub fn session(&self) -> Result<&SessionManager<A>, PortalError> {
        self.context
            .as_ref()
            .map(PortalContext::session)
            .ok_or(PortalError::NotInitialized("session"))
    }

    /// # Errors
    /// [`PortalError::NotInitialized`] until a context is provided.
    pub fn localization(&self) -> Result<&LocalizationResolver, PortalError> {
        self.context
            .as_ref()
            .map(PortalContext::localization)
            .ok_or(PortalError::NotInitialized("localization"))
    }
}

impl<A: Authenticator> Default for Scope<A> {
    fn default() -> Self {
        Self::empty()
    }
}
