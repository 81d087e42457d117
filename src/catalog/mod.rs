//! Emoji catalogs
//!
//! A [`LanguageCatalog`] holds localized names and keywords for one language.
//! The [`GlobalCatalog`] holds language-agnostic metadata for every key seen in
//! any language, reconciled against the previous release.
//!
//! # Data flow
//!
//! ```text
//! labels.txt ──► CategoryIndex ──┬──────────────────────────────┐
//!                                │                              ▼
//! annotations/<lang>.xml ────────┼──► LanguageCatalog (per lang) ──► GlobalCatalog
//! annotationsDerived/<lang>.xml ─┘                              ▲
//!                                         previous global.json ─┘
//! ```

mod global;
mod language;
mod shortcode;

pub use global::{GlobalCatalog, GlobalRecord, PreviousCatalog, ShortcodePolicy};
pub use language::{AnnotationRecord, LanguageCatalog};
pub use shortcode::shortcode;
