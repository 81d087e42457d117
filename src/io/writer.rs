//! Persistence of generated catalogs

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::{GlobalCatalog, LanguageCatalog};
use crate::cldr::artifact_name;
use crate::{EmojiCatalogError, Result};

pub const GLOBAL_FILE: &str = "global.json";
pub const VERSION_FILE: &str = "cldr_version.txt";

/// Serialize as pretty JSON with four-space indentation and a trailing
/// newline. Non-ASCII text is written as UTF-8, not escaped.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| EmojiCatalogError::Generic(e.into()))
}

/// Writes catalogs into an output directory
#[derive(Debug, Clone)]
pub struct CatalogWriter {
    output_dir: PathBuf,
}

impl CatalogWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Path a language catalog is written to
    pub fn language_path(&self, language: &str) -> PathBuf {
        self.output_dir.join(artifact_name(language))
    }

    pub fn global_path(&self) -> PathBuf {
        self.output_dir.join(GLOBAL_FILE)
    }

    pub fn write_language(&self, language: &str, catalog: &LanguageCatalog) -> Result<PathBuf> {
        let path = self.language_path(language);
        self.write(&path, &to_pretty_json(catalog)?)?;
        info!("Updated {} ({} emoji)", path.display(), catalog.len());
        Ok(path)
    }

    pub fn write_global(&self, catalog: &GlobalCatalog) -> Result<PathBuf> {
        let path = self.global_path();
        self.write(&path, &to_pretty_json(catalog)?)?;
        info!("Updated {} ({} emoji)", path.display(), catalog.len());
        Ok(path)
    }

    /// Record which CLDR release the catalogs were built from
    pub fn write_version(&self, release: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(VERSION_FILE);
        self.write(&path, &format!("{release}\n"))?;
        Ok(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
