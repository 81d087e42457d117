pub mod paths;
pub mod writer;

pub use paths::CldrLayout;
pub use writer::{to_pretty_json, CatalogWriter, GLOBAL_FILE, VERSION_FILE};
