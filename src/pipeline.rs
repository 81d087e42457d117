//! End-to-end catalog build over an extracted CLDR release
//!
//! The category index is built first and shared read-only. Each language is
//! then parsed on the blocking pool, at most `workers` at a time, and the
//! results are gathered by this task alone. The global fold starts only once
//! every language has finished.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::catalog::{GlobalCatalog, LanguageCatalog, PreviousCatalog};
use crate::cldr::{load_language, CategoryIndex};
use crate::config::{FailurePolicy, PipelineConfig};
use crate::io::{CatalogWriter, CldrLayout};
use crate::{EmojiCatalogError, Result};

/// Language catalogs produced by one run
#[derive(Debug, Default)]
pub struct LanguageResults {
    /// Successfully built languages, in processing order
    order: Vec<String>,
    catalogs: BTreeMap<String, LanguageCatalog>,
    /// Languages left out under [`FailurePolicy::Isolate`], with the reason
    pub failed: Vec<(String, String)>,
}

impl LanguageResults {
    /// Built catalogs in processing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageCatalog)> {
        self.order
            .iter()
            .filter_map(|language| self.catalogs.get_key_value(language))
            .map(|(language, catalog)| (language.as_str(), catalog))
    }
}

/// Outcome of a full build
#[derive(Debug)]
pub struct BuildSummary {
    pub languages_built: usize,
    pub failed: Vec<(String, String)>,
    pub global_entries: usize,
    pub written: Vec<PathBuf>,
}

/// Runs the catalog build described by a [`PipelineConfig`]
pub struct Pipeline {
    config: PipelineConfig,
    record_release: bool,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            record_release: false,
        }
    }

    /// Also write `cldr_version.txt` naming the configured release
    pub fn with_release_record(mut self) -> Self {
        self.record_release = true;
        self
    }

    /// Parse every configured language concurrently
    pub async fn build_languages(
        &self,
        layout: &CldrLayout,
        index: Arc<CategoryIndex>,
    ) -> Result<LanguageResults> {
        let mut seen = HashSet::new();
        let languages: Vec<String> = self
            .config
            .languages()
            .into_iter()
            .filter(|language| seen.insert(language.clone()))
            .collect();

        let semaphore = Arc::new(Semaphore::new(self.config.worker_count()));
        let mut tasks = JoinSet::new();

        for language in &languages {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| EmojiCatalogError::Generic(e.into()))?;
            let index = Arc::clone(&index);
            let layout = layout.clone();
            let language = language.clone();

            tasks.spawn_blocking(move || {
                let _permit = permit;
                info!("Processing language: {}", language);
                let result = load_language(&language, &layout, &index);
                (language, result)
            });
        }

        let mut results = LanguageResults::default();
        while let Some(joined) = tasks.join_next().await {
            let (language, result) = joined.map_err(|e| EmojiCatalogError::Generic(e.into()))?;
            match result {
                Ok(catalog) => {
                    results.catalogs.insert(language, catalog);
                }
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        tasks.abort_all();
                        return Err(e.for_language(&language));
                    }
                    FailurePolicy::Isolate => {
                        error!("Excluding language {}: {}", language, e);
                        results.failed.push((language, e.to_string()));
                    }
                },
            }
        }

        results.order = languages
            .into_iter()
            .filter(|language| results.catalogs.contains_key(language))
            .collect();
        results.failed.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(results)
    }

    /// Build and write every language catalog and the global catalog.
    ///
    /// All inputs are read and validated before the first artifact is written.
    pub async fn run(&self, layout: &CldrLayout) -> Result<BuildSummary> {
        let labels = layout.labels_file();
        let index = Arc::new(CategoryIndex::from_file(&labels)?);
        info!("Loaded {} categories from {}", index.len(), labels.display());
        let previous = PreviousCatalog::load(&self.config.previous_global)?;

        let results = self.build_languages(layout, Arc::clone(&index)).await?;

        let writer = CatalogWriter::new(&self.config.output_dir);
        let mut written = Vec::new();
        for (language, catalog) in results.iter() {
            written.push(writer.write_language(language, catalog)?);
        }

        let global = GlobalCatalog::build(
            results.iter(),
            &index,
            &previous,
            &self.config.shortcode_policy(),
        );
        written.push(writer.write_global(&global)?);

        if self.record_release {
            written.push(writer.write_version(&self.config.cldr_release)?);
        }

        Ok(BuildSummary {
            languages_built: results.catalogs.len(),
            failed: results.failed,
            global_entries: global.len(),
            written,
        })
    }
}
