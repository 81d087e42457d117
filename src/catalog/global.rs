//! Language-agnostic global catalog and reconciliation with the previous release

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info};

use super::language::LanguageCatalog;
use super::shortcode::shortcode;
use crate::cldr::CategoryIndex;
use crate::Result;

/// Shared metadata for one emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRecord {
    pub category: String,

    /// At most one derived shortcode
    pub shortcodes: Vec<String>,

    /// Manually curated emoticons carried forward between releases
    pub emoticons: Vec<String>,
}

/// Global catalog keyed by codepoint sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalCatalog {
    records: BTreeMap<String, GlobalRecord>,
}

/// Which language's display name a shortcode is derived from when several
/// languages annotate the same key.
///
/// Languages in `priority` are consulted first, in order. Any other language
/// is consulted afterwards in run order. The first non-empty name wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcodePolicy {
    pub priority: Vec<String>,
}

impl Default for ShortcodePolicy {
    fn default() -> Self {
        Self {
            priority: vec!["en".to_string()],
        }
    }
}

impl ShortcodePolicy {
    pub fn new(priority: Vec<String>) -> Self {
        Self { priority }
    }

    /// Reorder `languages` so preferred languages come first
    fn order<'a>(
        &self,
        languages: &[(&'a str, &'a LanguageCatalog)],
    ) -> Vec<(&'a str, &'a LanguageCatalog)> {
        let mut ordered: Vec<_> = self
            .priority
            .iter()
            .filter_map(|code| languages.iter().find(|(lang, _)| *lang == code.as_str()).copied())
            .collect();

        for entry in languages {
            if !self.priority.iter().any(|code| code == entry.0) {
                ordered.push(*entry);
            }
        }

        ordered
    }
}

impl GlobalCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every language catalog into the global catalog.
    ///
    /// Every key seen in any language gets a record. Categories come from the
    /// index, shortcodes from the display name chosen by `policy`, and
    /// emoticons from the previous release.
    pub fn build<'a, I>(
        languages: I,
        index: &CategoryIndex,
        previous: &PreviousCatalog,
        policy: &ShortcodePolicy,
    ) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a LanguageCatalog)>,
    {
        let languages: Vec<_> = languages.into_iter().collect();
        let candidates = policy.order(&languages);

        let keys: BTreeSet<&str> = languages
            .iter()
            .flat_map(|(_, catalog)| catalog.keys())
            .collect();

        let mut records = BTreeMap::new();
        let mut conflicts = 0usize;

        for key in keys {
            let names: Vec<&str> = candidates
                .iter()
                .filter_map(|(_, catalog)| catalog.get(key))
                .map(|record| record.name.as_str())
                .filter(|name| !name.is_empty())
                .collect();

            if names.iter().any(|name| *name != names[0]) {
                conflicts += 1;
            }

            let shortcodes = names.first().map(|name| vec![shortcode(name)]).unwrap_or_default();

            records.insert(
                key.to_string(),
                GlobalRecord {
                    category: index.category_for(key).to_string(),
                    shortcodes,
                    emoticons: previous.emoticons(key).to_vec(),
                },
            );
        }

        debug!(
            "Global catalog: {} keys from {} languages, {} with differing names",
            records.len(),
            languages.len(),
            conflicts
        );

        Self { records }
    }

    pub fn get(&self, key: &str) -> Option<&GlobalRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Entry of a previously published global catalog. Only emoticons are read.
#[derive(Debug, Deserialize)]
struct PreviousEntry {
    #[serde(default)]
    emoticons: Option<Vec<String>>,
}

/// Emoticons carried over from the previous release's global catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousCatalog {
    emoticons: BTreeMap<String, Vec<String>>,
}

impl PreviousCatalog {
    /// Empty catalog, as on a first-ever run
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a previous global catalog, treating a missing file as empty
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "No previous global catalog at {}, starting without emoticons",
                    path.display()
                );
                return Ok(Self::empty());
            }
            Err(e) => return Err(e.into()),
        };

        let previous = Self::from_json(&contents)?;
        debug!(
            "Loaded emoticons for {} keys from {}",
            previous.emoticons.len(),
            path.display()
        );
        Ok(previous)
    }

    /// Parse a serialized global catalog
    pub fn from_json(contents: &str) -> Result<Self> {
        let entries: BTreeMap<String, PreviousEntry> = serde_json::from_str(contents)?;

        let emoticons = entries
            .into_iter()
            .filter_map(|(key, entry)| {
                entry
                    .emoticons
                    .filter(|emoticons| !emoticons.is_empty())
                    .map(|emoticons| (key, emoticons))
            })
            .collect();

        Ok(Self { emoticons })
    }

    /// Emoticons recorded for `key`, empty if none
    pub fn emoticons(&self, key: &str) -> &[String] {
        self.emoticons.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.emoticons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emoticons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_ignores_empty_and_null_emoticons() {
        let previous = PreviousCatalog::from_json(
            r#"{
                "😀": {"category": "Smileys", "shortcodes": [":grinning_face:"], "emoticons": [":D"]},
                "😁": {"emoticons": []},
                "😂": {"emoticons": null},
                "😃": {}
            }"#,
        )
        .unwrap();

        assert_eq!(previous.len(), 1);
        assert_eq!(previous.emoticons("😀"), [":D".to_string()]);
        assert!(previous.emoticons("😁").is_empty());
        assert!(previous.emoticons("🙃").is_empty());
    }

    #[test]
    fn test_previous_rejects_malformed_json() {
        assert!(PreviousCatalog::from_json("{\"😀\": ").is_err());
        assert!(PreviousCatalog::from_json("[]").is_err());
    }

    #[test]
    fn test_missing_previous_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let previous = PreviousCatalog::load(dir.path().join("global.json")).unwrap();
        assert!(previous.is_empty());
    }

    #[test]
    fn test_policy_order_puts_priority_first() {
        let en = LanguageCatalog::new();
        let de = LanguageCatalog::new();
        let fr = LanguageCatalog::new();
        let languages = [("de", &de), ("fr", &fr), ("en", &en)];

        let policy = ShortcodePolicy::new(vec!["fr".to_string(), "en".to_string(), "xx".to_string()]);
        let order: Vec<&str> = policy.order(&languages).iter().map(|(l, _)| *l).collect();

        assert_eq!(order, vec!["fr", "en", "de"]);
    }
}
