use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Semaphore;

use crate::catalog::ShortcodePolicy;
use crate::cldr::default_languages;

pub const DEFAULT_CLDR_RELEASE: &str = "46";
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/unicode-org/cldr/archive/refs/tags/release-{release}.tar.gz";
pub const DEFAULT_OUTPUT_DIR: &str = "emoji_data";
pub const DEFAULT_PREVIOUS_GLOBAL: &str = "global.json";

/// What to do when one language's sources fail to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run
    #[default]
    Abort,
    /// Leave the language out of every output and keep going
    Isolate,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Isolate => write!(f, "isolate"),
        }
    }
}

/// Settings for one catalog build (emoji-catalog.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// CLDR release number, e.g. "46"
    pub cldr_release: String,

    /// Archive URL template; `{release}` is replaced by `cldr_release`
    pub source_url: String,

    /// Directory the catalogs are written to
    pub output_dir: PathBuf,

    /// Previously published global catalog to carry emoticons from
    pub previous_global: PathBuf,

    /// Subset of languages to build; all configured languages when absent
    pub languages: Option<Vec<String>>,

    /// Languages whose names are preferred for shortcodes
    pub shortcode_priority: Vec<String>,

    pub failure_policy: FailurePolicy,

    /// Parallel language workers; defaults to available parallelism
    pub workers: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cldr_release: DEFAULT_CLDR_RELEASE.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            previous_global: PathBuf::from(DEFAULT_PREVIOUS_GLOBAL),
            languages: None,
            shortcode_priority: ShortcodePolicy::default().priority,
            failure_policy: FailurePolicy::default(),
            workers: None,
        }
    }
}

impl PipelineConfig {
    /// Languages to build, in processing order
    pub fn languages(&self) -> Vec<String> {
        self.languages.clone().unwrap_or_else(default_languages)
    }

    pub fn shortcode_policy(&self) -> ShortcodePolicy {
        ShortcodePolicy::new(self.shortcode_priority.clone())
    }

    /// Parallel language workers, capped at the semaphore's permit limit
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .clamp(1, Semaphore::MAX_PERMITS)
    }

    /// Download URL for the configured release
    pub fn source_url(&self) -> String {
        self.source_url.replace("{release}", &self.cldr_release)
    }
}
