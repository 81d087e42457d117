//! Test helpers shared by the integration tests
//!
//! Builds a miniature CLDR release tree on disk with the same layout as the
//! real archive.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const LABELS: &str = "\
# Emoji labels
# Format: range ; category ; subcategory
@missing: [] ; Other ; x

[😀] ; Smileys & People ; face-smiling
[\\u2648-\\u2653] ; Symbols ; zodiac
[\\u0041,\\u0042] ; Letters ; latin
";

/// Wrap annotation elements in an LDML document
pub fn ldml(language: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
	<identity>
		<version number="$Revision$"/>
		<language type="{language}"/>
	</identity>
	<annotations>
{body}
	</annotations>
</ldml>
"#
    )
}

/// Create `common/properties/labels.txt` under `root`
pub fn write_labels(root: &Path, labels: &str) {
    let properties = root.join("common/properties");
    fs::create_dir_all(&properties).unwrap();
    fs::write(properties.join("labels.txt"), labels).unwrap();
}

/// Create the base annotation file for a language
pub fn write_base(root: &Path, language: &str, body: &str) {
    let dir = root.join("common/annotations");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{language}.xml")), ldml(language, body)).unwrap();
}

/// Create the derived annotation file for a language
pub fn write_derived(root: &Path, language: &str, body: &str) {
    let dir = root.join("common/annotationsDerived");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{language}.xml")), ldml(language, body)).unwrap();
}

/// A small release with English, German and a derived-only Japanese file
pub fn create_release(root: &Path) {
    write_labels(root, LABELS);

    write_base(
        root,
        "en",
        r#"		<annotation cp="😀">face | grin</annotation>
		<annotation cp="😀" type="tts">grinning face</annotation>
		<annotation cp="😀">face | grin | grinning face</annotation>
		<annotation cp="♈">Aries | ram | zodiac</annotation>
		<annotation cp="♈" type="tts">Aries</annotation>"#,
    );
    write_derived(
        root,
        "en",
        r#"		<annotation cp="👋🏻">hand | wave | light skin tone</annotation>
		<annotation cp="👋🏻" type="tts">waving hand: light skin tone</annotation>
		<annotation cp="👋🏻">hand | wave | light skin tone</annotation>"#,
    );

    write_base(
        root,
        "de",
        r#"		<annotation cp="😀" type="tts">grinsendes Gesicht</annotation>
		<annotation cp="😀">Gesicht | grinsen</annotation>
		<annotation cp="🫠" type="tts">schmelzendes Gesicht</annotation>"#,
    );

    write_derived(
        root,
        "ja",
        r#"		<annotation cp="😀">顔 | 笑顔</annotation>"#,
    );
}
