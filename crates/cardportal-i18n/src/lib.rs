//! Localization for the card portal.
//!
//! Two pieces:
//!
//! - [`TranslationTable`]: an immutable language → key → text map, loaded
//!   once from the built-in bilingual dictionary (or a JSON document).
//! - [`LocalizationResolver`]: the active [`Language`] plus lookups against
//!   the table, exposed to pages through the [`Localizer`] trait.
//!
//! # Fallback chain
//!
//! ```text
//! active language ──missing──→ zh ──missing──→ the key itself
//! ```
//!
//! A lookup never fails. A typo in a key shows up on screen as the key,
//! which is easy to spot and never crashes a page.

mod catalog;
mod error;
mod language;
mod resolver;
mod table;
mod template;

pub use error::I18nError;
pub use language::Language;
pub use resolver::{LocalizationResolver, Localizer};
pub use table::{FALLBACK_LANGUAGE, TranslationTable};
pub use template::substitute;
