//! The languages the portal can be shown in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::I18nError;

/// A supported UI language.
///
/// `Zh` (Traditional Chinese) is both the startup default and the fallback
/// table for keys missing in another language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    /// Every supported language, in a stable order.
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    /// The tag as it appears in config files and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// The other language. The portal only ever switches between two.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// What the language switch shows: the name of the language it would
    /// switch TO, written in that language.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Zh => "EN",
            Self::En => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an exact tag (`"zh"` or `"en"`).
///
/// Anything else is a programming error on the caller's side, so it is
/// rejected rather than mapped to the default.
impl FromStr for Language {
    type Err = I18nError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(I18nError::InvalidLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_default_is_zh() {
        assert_eq!(Language::default(), Language::Zh);
    }

    #[test]
    fn test_from_str_known_tags() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_from_str_unknown_tag_returns_invalid_language() {
        for tag in ["fr", "", "EN", "zh-TW", " en"] {
            let result = tag.parse::<Language>();
            assert!(
                matches!(&result, Err(I18nError::InvalidLanguage(t)) if t == tag),
                "{tag:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_toggled_flips_between_two_languages() {
        assert_eq!(Language::Zh.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Zh);
        assert_eq!(Language::Zh.toggled().toggled(), Language::Zh);
    }

    #[test]
    fn test_toggle_label_names_the_target_language() {
        assert_eq!(Language::Zh.toggle_label(), "EN");
        assert_eq!(Language::En.toggle_label(), "中文");
    }

    #[test]
    fn test_display_matches_tag() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string(), lang.as_str());
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(lang, Language::Zh);
        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
    }
}
