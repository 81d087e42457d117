//! Annotation merging for one language
//!
//! A language has up to two sources: the base file (`annotations/<lang>.xml`)
//! and the derived file (`annotationsDerived/<lang>.xml`). Both are scanned in
//! that order into one catalog:
//!
//! - a `type="tts"` element creates or resets the record for its `cp`
//! - any other `<annotation>` element with text attaches `|`-separated
//!   keywords, but only to a record that already exists
//!
//! Keywords for a codepoint whose name has not been seen yet are dropped.

use std::path::Path;
use tracing::{debug, trace, warn};

use super::labels::CategoryIndex;
use crate::catalog::LanguageCatalog;
use crate::io::CldrLayout;
use crate::{EmojiCatalogError, Result};

const TTS_TYPE: &str = "tts";
const ANNOTATION_TAG: &str = "annotation";

/// Typed view of one element in an annotation source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationNode {
    /// Local tag name
    pub tag: String,
    /// `cp` attribute
    pub cp: Option<String>,
    /// `type` attribute
    pub kind: Option<String>,
    /// Text before the first child element
    pub text: Option<String>,
}

impl AnnotationNode {
    /// Whether this element carries the display name
    pub fn is_tts(&self) -> bool {
        self.kind.as_deref() == Some(TTS_TYPE)
    }

    /// Codepoint key, if present and non-empty
    pub fn key(&self) -> Option<&str> {
        self.cp.as_deref().filter(|cp| !cp.is_empty())
    }
}

/// Parse an annotation document into its elements, in document order.
///
/// The root element itself is not included.
pub fn parse_nodes(source_name: &str, text: &str) -> Result<Vec<AnnotationNode>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options).map_err(|e| {
        EmojiCatalogError::AnnotationFormat {
            source_name: source_name.to_string(),
            message: e.to_string(),
        }
    })?;

    let nodes = doc
        .root_element()
        .descendants()
        .skip(1)
        .filter(|n| n.is_element())
        .map(|n| AnnotationNode {
            tag: n.tag_name().name().to_string(),
            cp: n.attribute("cp").map(str::to_string),
            kind: n.attribute("type").map(str::to_string),
            text: leading_text(n),
        })
        .collect();

    Ok(nodes)
}

/// Text of an element up to its first child element.
///
/// Comments and processing instructions between text runs are skipped, so
/// `<annotation><!--c-->a|b</annotation>` still yields `a|b`.
fn leading_text(node: roxmltree::Node) -> Option<String> {
    let runs: Vec<&str> = node
        .children()
        .take_while(|c| !c.is_element())
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();

    if runs.is_empty() {
        None
    } else {
        Some(runs.concat())
    }
}

/// Fold one source's elements into the catalog
pub fn merge_nodes(
    catalog: &mut LanguageCatalog,
    nodes: &[AnnotationNode],
    index: &CategoryIndex,
) {
    for node in nodes {
        let Some(key) = node.key() else {
            continue;
        };

        if node.is_tts() {
            let name = node.text.as_deref().map(str::trim).unwrap_or_default();
            catalog.create_or_reset(key, name.to_string(), index.category_for(key));
        } else if node.tag == ANNOTATION_TAG {
            let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            let keywords = text.split('|').map(|k| k.trim().to_string()).collect();
            if !catalog.attach_keywords(key, keywords) {
                trace!("Dropping keywords for {} with no preceding name", key);
            }
        }
    }
}

/// Build a language catalog from optional base and derived source texts
pub fn parse_language(
    language: &str,
    base: Option<&str>,
    derived: Option<&str>,
    index: &CategoryIndex,
) -> Result<LanguageCatalog> {
    merge_sources(
        [
            (format!("annotations/{language}.xml"), base),
            (format!("annotationsDerived/{language}.xml"), derived),
        ],
        index,
    )
}

/// Read a language's sources from an extracted CLDR tree and merge them.
///
/// Missing files contribute nothing.
pub fn load_language(
    language: &str,
    layout: &CldrLayout,
    index: &CategoryIndex,
) -> Result<LanguageCatalog> {
    let base_path = layout.annotations_file(language);
    let derived_path = layout.derived_annotations_file(language);
    let base = read_optional(&base_path)?;
    let derived = read_optional(&derived_path)?;

    if base.is_none() && derived.is_none() {
        warn!("No annotation sources found for {}", language);
    }

    merge_sources(
        [
            (base_path.display().to_string(), base.as_deref()),
            (derived_path.display().to_string(), derived.as_deref()),
        ],
        index,
    )
}

/// Scan sources in order into one accumulating catalog
fn merge_sources(
    sources: [(String, Option<&str>); 2],
    index: &CategoryIndex,
) -> Result<LanguageCatalog> {
    let mut catalog = LanguageCatalog::new();

    for (source_name, text) in sources {
        let Some(text) = text else {
            continue;
        };
        let nodes = parse_nodes(&source_name, text)?;
        merge_nodes(&mut catalog, &nodes, index);
    }

    Ok(catalog)
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Skipping missing source {}", path.display());
            Ok(None)
        }
        Err(e) => Err(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)).into()),
    }
}
