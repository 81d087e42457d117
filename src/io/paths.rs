use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::{EmojiCatalogError, Result};

const COMMON_DIR: &str = "common";
const LABELS_FILE: &str = "properties/labels.txt";
const ANNOTATIONS_DIR: &str = "annotations";
const DERIVED_ANNOTATIONS_DIR: &str = "annotationsDerived";

/// Locations of the source files inside an extracted CLDR release
#[derive(Debug, Clone)]
pub struct CldrLayout {
    /// Release root (the directory containing `common/`)
    pub root: PathBuf,
}

impl CldrLayout {
    /// Layout rooted at an already known release directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find the release root in `dir`.
    ///
    /// Accepts the release root itself, or an extraction directory holding the
    /// release in a nested folder as GitHub source archives do.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let found = WalkDir::new(dir)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .map(|e| e.into_path())
            .find(|candidate| Self::is_release_root(candidate));

        match found {
            Some(root) => {
                debug!("Found CLDR release root at {}", root.display());
                Ok(Self { root })
            }
            None => Err(EmojiCatalogError::Config(format!(
                "No CLDR release found under {} (expected {}/{})",
                dir.display(),
                COMMON_DIR,
                LABELS_FILE
            ))),
        }
    }

    fn is_release_root(candidate: &Path) -> bool {
        candidate.join(COMMON_DIR).join(LABELS_FILE).is_file()
    }

    /// `common/properties/labels.txt`
    pub fn labels_file(&self) -> PathBuf {
        self.root.join(COMMON_DIR).join(LABELS_FILE)
    }

    /// `common/annotations/<lang>.xml`
    pub fn annotations_file(&self, language: &str) -> PathBuf {
        self.root
            .join(COMMON_DIR)
            .join(ANNOTATIONS_DIR)
            .join(format!("{language}.xml"))
    }

    /// `common/annotationsDerived/<lang>.xml`
    pub fn derived_annotations_file(&self, language: &str) -> PathBuf {
        self.root
            .join(COMMON_DIR)
            .join(DERIVED_ANNOTATIONS_DIR)
            .join(format!("{language}.xml"))
    }
}
