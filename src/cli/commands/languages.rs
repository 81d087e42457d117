use async_trait::async_trait;
use serde_json::{json, Map, Value};

use super::CommandHandler;
use crate::cldr::LANGUAGE_TABLE;
use crate::io::to_pretty_json;
use crate::{EmojiCatalogError, Result};

/// Handler for the `languages` command
pub struct LanguagesCommand {
    pub format: String,
}

#[async_trait]
impl CommandHandler for LanguagesCommand {
    async fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "languages"
    }
}

impl LanguagesCommand {
    /// Create new languages command
    pub fn new(format: String) -> Self {
        Self { format }
    }

    fn render(&self) -> Result<String> {
        match self.format.as_str() {
            "text" => {
                let width = LANGUAGE_TABLE
                    .iter()
                    .map(|(code, _)| code.len())
                    .max()
                    .unwrap_or(0);
                Ok(LANGUAGE_TABLE
                    .iter()
                    .map(|(code, artifact)| format!("{code:<width$}  {artifact}\n"))
                    .collect())
            }
            "json" => {
                let table: Map<String, Value> = LANGUAGE_TABLE
                    .iter()
                    .map(|(code, artifact)| (code.to_string(), json!(artifact)))
                    .collect();
                to_pretty_json(&table)
            }
            other => Err(EmojiCatalogError::Config(format!(
                "Unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}
