use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmojiCatalogError {
    #[error("Malformed label line {line}: expected 3 fields, found {fields}")]
    LabelFormat { line: usize, fields: usize },

    #[error("Malformed annotation source {source_name}: {message}")]
    AnnotationFormat {
        source_name: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Language {language} failed: {source}")]
    Language {
        language: String,
        #[source]
        source: Box<EmojiCatalogError>,
    },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl EmojiCatalogError {
    /// Attach the language code that was being processed
    pub fn for_language(self, language: &str) -> Self {
        EmojiCatalogError::Language {
            language: language.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmojiCatalogError>;
