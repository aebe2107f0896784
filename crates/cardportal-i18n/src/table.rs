//! Two-level translation table: language → key → text.

use std::collections::HashMap;

use crate::catalog::{CATALOG_EN, CATALOG_ZH};
use crate::{I18nError, Language};

/// The language every lookup falls back to before giving up.
pub const FALLBACK_LANGUAGE: Language = Language::Zh;

/// Immutable bilingual dictionary.
///
/// Built once at startup and never modified afterwards; switching the
/// active language is a matter of which inner map gets consulted, not of
/// rebuilding anything.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// An empty table. Every lookup resolves to the key itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The portal's built-in dictionary.
    pub fn builtin() -> Self {
        Self::empty()
            .with_entries(Language::Zh, CATALOG_ZH.iter().copied())
            .with_entries(Language::En, CATALOG_EN.iter().copied())
    }

    /// Adds entries for one language. Later entries win on duplicate keys.
    pub fn with_entries<I, K, V>(mut self, language: Language, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.tables.entry(language).or_default();
        for (key, text) in entries {
            table.insert(key.into(), text.into());
        }
        self
    }

    /// Parses a document shaped like `{"zh": {"key": "text"}, "en": {...}}`.
    ///
    /// A language missing from the document simply has no entries.
    ///
    /// # Errors
    /// Returns [`I18nError::Catalog`] if the document is not valid JSON of
    /// that shape or names an unsupported language.
    pub fn from_json(document: &str) -> Result<Self, I18nError> {
        let tables: HashMap<Language, HashMap<String, String>> =
            serde_json::from_str(document)?;
        Ok(Self { tables })
    }

    /// Direct lookup in one language, no fallback.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// The languages consulted, in order, when resolving a key.
    ///
    /// `active` first, then [`FALLBACK_LANGUAGE`] unless they coincide.
    pub fn fallback_chain(active: Language) -> impl Iterator<Item = Language> {
        std::iter::once(active)
            .chain((active != FALLBACK_LANGUAGE).then_some(FALLBACK_LANGUAGE))
    }

    /// Resolves `key` along the fallback chain; returns the key unchanged
    /// if no table has it.
    pub fn resolve<'a>(&'a self, active: Language, key: &'a str) -> &'a str {
        Self::fallback_chain(active)
            .find_map(|language| self.get(language, key))
            .unwrap_or(key)
    }

    /// Every key defined for one language, in no particular order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.tables
            .get(&language)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Number of entries for one language.
    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }

    /// Keys present in the fallback table but absent from `language`,
    /// sorted. These render in the fallback language instead.
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let Some(fallback) = self.tables.get(&FALLBACK_LANGUAGE) else {
            return Vec::new();
        };
        let mut missing: Vec<&str> = fallback
            .keys()
            .map(String::as_str)
            .filter(|key| self.get(language, key).is_none())
            .collect();
        missing.sort_unstable();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTable {
        TranslationTable::empty()
            .with_entries(
                Language::Zh,
                [("both", "兩者"), ("zh.only", "只有中文")],
            )
            .with_entries(Language::En, [("both", "Both"), ("en.only", "English only")])
    }

    #[test]
    fn test_fallback_chain_en_tries_zh_second() {
        let chain: Vec<_> = TranslationTable::fallback_chain(Language::En).collect();
        assert_eq!(chain, vec![Language::En, Language::Zh]);
    }

    #[test]
    fn test_fallback_chain_zh_has_no_duplicate() {
        let chain: Vec<_> = TranslationTable::fallback_chain(Language::Zh).collect();
        assert_eq!(chain, vec![Language::Zh]);
    }

    #[test]
    fn test_resolve_prefers_active_language() {
        let table = sample();
        assert_eq!(table.resolve(Language::Zh, "both"), "兩者");
        assert_eq!(table.resolve(Language::En, "both"), "Both");
    }

    #[test]
    fn test_resolve_missing_in_en_falls_back_to_zh() {
        let table = sample();
        assert_eq!(table.resolve(Language::En, "zh.only"), "只有中文");
    }

    #[test]
    fn test_resolve_missing_everywhere_returns_key() {
        let table = sample();
        assert_eq!(table.resolve(Language::En, "nowhere"), "nowhere");
        assert_eq!(table.resolve(Language::Zh, "nowhere"), "nowhere");
        assert_eq!(TranslationTable::empty().resolve(Language::Zh, ""), "");
    }

    #[test]
    fn test_resolve_en_only_key_is_not_visible_from_zh() {
        // Fallback only ever runs toward zh, never away from it.
        let table = sample();
        assert_eq!(table.resolve(Language::Zh, "en.only"), "en.only");
    }

    #[test]
    fn test_with_entries_later_entry_wins() {
        let table = TranslationTable::empty()
            .with_entries(Language::En, [("k", "first")])
            .with_entries(Language::En, [("k", "second")]);
        assert_eq!(table.get(Language::En, "k"), Some("second"));
        assert_eq!(table.len(Language::En), 1);
    }

    #[test]
    fn test_from_json_parses_both_languages() {
        let table = TranslationTable::from_json(
            r#"{"zh": {"hi": "你好"}, "en": {"hi": "Hello"}}"#,
        )
        .unwrap();
        assert_eq!(table.get(Language::Zh, "hi"), Some("你好"));
        assert_eq!(table.get(Language::En, "hi"), Some("Hello"));
    }

    #[test]
    fn test_from_json_unknown_language_is_catalog_error() {
        let result = TranslationTable::from_json(r#"{"fr": {"hi": "Salut"}}"#);
        assert!(matches!(result, Err(I18nError::Catalog(_))));
    }

    #[test]
    fn test_from_json_malformed_is_catalog_error() {
        assert!(matches!(
            TranslationTable::from_json("{not json"),
            Err(I18nError::Catalog(_))
        ));
    }

    #[test]
    fn test_missing_keys_lists_fallback_only_entries() {
        let table = sample();
        assert_eq!(table.missing_keys(Language::En), vec!["zh.only"]);
        assert!(table.missing_keys(Language::Zh).is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(TranslationTable::empty().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_builtin_languages_carry_the_same_keys() {
        let table = TranslationTable::builtin();
        assert!(table.missing_keys(Language::En).is_empty());
        assert_eq!(table.len(Language::Zh), table.len(Language::En));
    }

    #[test]
    fn test_builtin_known_entries() {
        let table = TranslationTable::builtin();
        assert_eq!(table.get(Language::Zh, "login.button"), Some("登錄"));
        assert_eq!(table.get(Language::En, "login.button"), Some("Login"));
        assert_eq!(
            table.get(Language::Zh, "dashboard.welcome"),
            Some("歡迎回來，{username}！")
        );
    }
}
