//! Error types for the localization layer.
//!
//! A missing translation is never an error: lookups fall back and, at
//! worst, return the key itself. These variants only cover misuse.

/// Errors that can occur while configuring localization.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The tag is not one of the supported languages.
    #[error("unsupported language tag {0:?}")]
    InvalidLanguage(String),

    /// A translation document could not be parsed.
    #[error("invalid translation catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
