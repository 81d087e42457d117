//! Category index built from CLDR `labels.txt`
//!
//! Data lines look like `[\u2648-\u2653] ; Symbols ; zodiac`. The first field is
//! either a list of escaped codepoints or a single literal emoji sequence, the
//! second field is the category, and the third field is ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::{EmojiCatalogError, Result};

/// Category reported for keys the index does not know
pub const UNKNOWN_CATEGORY: &str = "Unknown";

static FIELD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*;\s*").unwrap());
static ESCAPED_CODEPOINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\u([0-9a-fA-F]+)").unwrap());

/// Mapping from codepoint key to category name
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    /// Keys exactly as spelled in the label source
    categories: BTreeMap<String, String>,
    /// Literal character spelling of escaped keys, used for lookups only
    aliases: BTreeMap<String, String>,
}

impl CategoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a labels file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        let index = Self::parse(&contents)?;
        debug!(
            "Loaded {} category keys from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Parse label source text
    pub fn parse(source: &str) -> Result<Self> {
        let mut index = Self::new();

        for (idx, line) in source.lines().enumerate() {
            if !line.starts_with('[') {
                continue;
            }

            let fields: Vec<&str> = FIELD_SEPARATOR.split(line.trim()).collect();
            let [specifier, category, _] = fields.as_slice() else {
                return Err(EmojiCatalogError::LabelFormat {
                    line: idx + 1,
                    fields: fields.len(),
                });
            };

            for key in Self::expand_specifier(specifier) {
                index.insert(key, category);
            }
        }

        Ok(index)
    }

    /// Keys named by a range/list specifier.
    ///
    /// Hyphenated ranges are not expanded: only escaped tokens literally
    /// present in the text become keys.
    fn expand_specifier(specifier: &str) -> Vec<String> {
        if specifier.contains(',') || specifier.contains('-') {
            ESCAPED_CODEPOINT
                .find_iter(specifier)
                .map(|m| m.as_str().to_string())
                .collect()
        } else {
            vec![specifier
                .trim_matches(|c| c == '[' || c == ']')
                .to_string()]
        }
    }

    fn insert(&mut self, key: String, category: &str) {
        if let Some(literal) = Self::decode_escaped(&key) {
            self.aliases.insert(literal, category.to_string());
        }
        self.categories.insert(key, category.to_string());
    }

    /// Literal spelling of a single `\uXXXX` token, if it names a valid scalar value
    fn decode_escaped(key: &str) -> Option<String> {
        let captures = ESCAPED_CODEPOINT.captures(key)?;
        if captures.get(0)?.as_str().len() != key.len() {
            return None;
        }
        let value = u32::from_str_radix(captures.get(1)?.as_str(), 16).ok()?;
        char::from_u32(value).map(String::from)
    }

    /// Category stored under exactly this key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.categories.get(key).map(String::as_str)
    }

    /// Category for an annotation key, falling back to the escaped spelling
    /// and then to [`UNKNOWN_CATEGORY`]
    pub fn category_for(&self, key: &str) -> &str {
        self.get(key)
            .or_else(|| self.aliases.get(key).map(String::as_str))
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
