use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

use super::{CommandHandler, ConfigOverrides};
use crate::io::CldrLayout;
use crate::pipeline::{BuildSummary, Pipeline};
use crate::Result;

/// Handler for the `build` command
pub struct BuildCommand {
    pub cldr: PathBuf,
    pub overrides: ConfigOverrides,
}

#[async_trait]
impl CommandHandler for BuildCommand {
    async fn execute(&self) -> Result<()> {
        let config = self.overrides.resolve()?;
        let layout = CldrLayout::discover(&self.cldr)?;

        let mut pipeline = Pipeline::new(config);
        if self.overrides.release.is_some() {
            pipeline = pipeline.with_release_record();
        }

        let summary = pipeline.run(&layout).await?;
        report(&summary);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "build"
    }
}

impl BuildCommand {
    /// Create new build command
    pub fn new(cldr: PathBuf, overrides: ConfigOverrides) -> Self {
        Self { cldr, overrides }
    }
}

/// Log the outcome of a build
pub(crate) fn report(summary: &BuildSummary) {
    info!(
        "Built {} language catalogs and {} global entries ({} files written)",
        summary.languages_built,
        summary.global_entries,
        summary.written.len()
    );
    for (language, reason) in &summary.failed {
        warn!("Language {} was excluded: {}", language, reason);
    }
}
