//! Per-language annotation records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Localized metadata for one emoji in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Localized display text (text-to-speech name)
    pub name: String,

    /// Search keywords in source order
    pub keywords: Vec<String>,

    /// Category copied from the category index when the record was created
    pub category: String,
}

/// All annotation records of one language, keyed by codepoint sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog {
    records: BTreeMap<String, AnnotationRecord>,
}

impl LanguageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the record for `key`, or reset an existing one.
    ///
    /// Keywords gathered so far for the key are discarded.
    pub fn create_or_reset(&mut self, key: &str, name: String, category: &str) {
        self.records.insert(
            key.to_string(),
            AnnotationRecord {
                name,
                keywords: Vec::new(),
                category: category.to_string(),
            },
        );
    }

    /// Replace the keywords of an existing record.
    ///
    /// Returns `false` and leaves the catalog untouched when no record exists
    /// for `key` yet.
    pub fn attach_keywords(&mut self, key: &str, keywords: Vec<String>) -> bool {
        match self.records.get_mut(key) {
            Some(record) => {
                record.keywords = keywords;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&AnnotationRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}
