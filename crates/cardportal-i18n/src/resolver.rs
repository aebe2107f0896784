//! The localization resolver: active language plus key lookup.
//!
//! Owns the one piece of mutable localization state (which language is
//! active) and answers `translate(key)` against an immutable
//! [`TranslationTable`]. Switching language takes effect for the next
//! lookup; text that was already rendered stays as it is until the page
//! asks again.

use tokio::sync::watch;

use crate::template::substitute;
use crate::{I18nError, Language, TranslationTable};

/// What a page may do with localization.
///
/// [`LocalizationResolver`] implements this; tests can pass anything else
/// that does.
pub trait Localizer {
    /// Resolves `key` in the active language, falling back to `zh` and
    /// then to the key itself. Never fails.
    fn translate<'a>(&'a self, key: &'a str) -> &'a str;

    fn active_language(&self) -> Language;

    fn set_language(&self, language: Language);

    /// [`translate`](Self::translate) followed by `{placeholder}`
    /// substitution.
    fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        substitute(self.translate(key), args)
    }
}

/// Resolves translation keys for the portal.
pub struct LocalizationResolver {
    table: TranslationTable,
    language: watch::Sender<Language>,
}

impl LocalizationResolver {
    pub fn new(table: TranslationTable, initial: Language) -> Self {
        let (language, _) = watch::channel(initial);
        Self { table, language }
    }

    /// The built-in dictionary, starting in `zh`.
    pub fn builtin() -> Self {
        Self::new(TranslationTable::builtin(), Language::default())
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.resolve(self.active_language(), key)
    }

    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        substitute(self.translate(key), args)
    }

    pub fn active_language(&self) -> Language {
        *self.language.borrow()
    }

    /// Makes `language` active for every subsequent lookup.
    pub fn set_language(&self, language: Language) {
        let changed = self.language.send_if_modified(|current| {
            if *current == language {
                return false;
            }
            *current = language;
            true
        });
        if changed {
            tracing::info!(%language, "language changed");
        }
    }

    /// Like [`set_language`](Self::set_language) but takes a raw tag.
    ///
    /// # Errors
    /// Returns [`I18nError::InvalidLanguage`] for anything but `"zh"` or
    /// `"en"`. The active language is left unchanged.
    pub fn set_language_tag(&self, tag: &str) -> Result<(), I18nError> {
        let language = tag.parse::<Language>().inspect_err(|e| {
            tracing::debug!(error = %e, "rejected language tag");
        })?;
        self.set_language(language);
        Ok(())
    }

    /// Switches to the other language and returns it.
    pub fn toggle(&self) -> Language {
        let next = self.active_language().toggled();
        self.set_language(next);
        next
    }

    /// Subscribes to language changes, so a view can re-render.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.language.subscribe()
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}

impl Default for LocalizationResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Localizer for LocalizationResolver {
    fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        LocalizationResolver::translate(self, key)
    }

    fn active_language(&self) -> Language {
        LocalizationResolver::active_language(self)
    }

    fn set_language(&self, language: Language) {
        LocalizationResolver::set_language(self, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolver_starts_in_zh() {
        let resolver = LocalizationResolver::builtin();
        assert_eq!(resolver.active_language(), Language::Zh);
    }

    #[test]
    fn test_translate_login_button_follows_language() {
        let resolver = LocalizationResolver::builtin();
        assert_eq!(resolver.translate("login.button"), "登錄");

        resolver.set_language(Language::En);

        assert_eq!(resolver.translate("login.button"), "Login");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        let resolver = LocalizationResolver::builtin();
        resolver.set_language(Language::En);
        assert_eq!(resolver.translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_translate_en_missing_key_uses_zh_text() {
        let table = TranslationTable::empty()
            .with_entries(Language::Zh, [("only.zh", "中文")]);
        let resolver = LocalizationResolver::new(table, Language::En);

        assert_eq!(resolver.translate("only.zh"), "中文");
    }

    #[test]
    fn test_translate_with_substitutes_username() {
        let resolver = LocalizationResolver::builtin();
        assert_eq!(
            resolver.translate_with("dashboard.welcome", &[("username", "demo")]),
            "歡迎回來，demo！"
        );
        resolver.set_language(Language::En);
        assert_eq!(
            resolver.translate_with("dashboard.welcome", &[("username", "demo")]),
            "Welcome back, demo!"
        );
    }

    #[test]
    fn test_set_language_tag_rejects_unknown_tag() {
        let resolver = LocalizationResolver::builtin();

        let result = resolver.set_language_tag("fr");

        assert!(matches!(result, Err(I18nError::InvalidLanguage(t)) if t == "fr"));
        assert_eq!(resolver.active_language(), Language::Zh);
    }

    #[test]
    fn test_set_language_tag_accepts_known_tag() {
        let resolver = LocalizationResolver::builtin();
        resolver.set_language_tag("en").unwrap();
        assert_eq!(resolver.active_language(), Language::En);
    }

    #[test]
    fn test_toggle_switches_and_returns_new_language() {
        let resolver = LocalizationResolver::builtin();
        assert_eq!(resolver.toggle(), Language::En);
        assert_eq!(resolver.active_language(), Language::En);
        assert_eq!(resolver.toggle(), Language::Zh);
    }

    #[test]
    fn test_subscribe_notified_only_on_real_change() {
        let resolver = LocalizationResolver::builtin();
        let mut rx = resolver.subscribe();

        resolver.set_language(Language::Zh);
        assert!(!rx.has_changed().unwrap());

        resolver.set_language(Language::En);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::En);
    }

    #[test]
    fn test_localizer_generic_consumer() {
        fn title(l10n: &impl Localizer) -> String {
            l10n.translate("dashboard.title").to_string()
        }
        let resolver = LocalizationResolver::builtin();
        assert_eq!(title(&resolver), "會員中心");
        Localizer::set_language(&resolver, Language::En);
        assert_eq!(title(&resolver), "Member Center");
    }
}
