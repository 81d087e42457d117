//! Readers for CLDR source data

pub mod annotations;
pub mod labels;
pub mod languages;

pub use annotations::{load_language, parse_language, AnnotationNode};
pub use labels::{CategoryIndex, UNKNOWN_CATEGORY};
pub use languages::{artifact_name, default_languages, LANGUAGE_TABLE};
