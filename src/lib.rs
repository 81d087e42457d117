//! Emoji metadata catalogs from Unicode CLDR annotations.
//!
//! The pipeline reads `labels.txt` into a [`cldr::CategoryIndex`], merges each
//! language's annotation files into a [`catalog::LanguageCatalog`], and folds
//! every language into a [`catalog::GlobalCatalog`] that keeps the emoticons
//! curated in the previous release.

pub mod catalog;
pub mod cldr;
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod io;
pub mod pipeline;

pub use error::{EmojiCatalogError, Result};
