//! Shortcode derivation from display names

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of anything that is not a letter or number, underscore included
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Derive a `:snake_case:` shortcode from a display name.
///
/// An empty name yields an empty string. A name with no letters or numbers
/// yields `"::"`.
pub fn shortcode(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let lowered = name.to_lowercase();
    let collapsed = SEPARATOR_RUN.replace_all(&lowered, "_");
    format!(":{}:", collapsed.trim_matches('_'))
}
