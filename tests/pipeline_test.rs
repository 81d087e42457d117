//! Integration tests for the catalog build pipeline

mod common;

use emoji_catalog::config::{FailurePolicy, PipelineConfig};
use emoji_catalog::io::CldrLayout;
use emoji_catalog::pipeline::Pipeline;
use emoji_catalog::EmojiCatalogError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config(output: &Path, previous: &Path, languages: &[&str]) -> PipelineConfig {
    PipelineConfig {
        output_dir: output.to_path_buf(),
        previous_global: previous.to_path_buf(),
        languages: Some(languages.iter().map(|l| l.to_string()).collect()),
        workers: Some(2),
        ..PipelineConfig::default()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_full_build_writes_language_and_global_catalogs() {
    common::init_test_logging();
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());

    let pipeline = Pipeline::new(config(
        out.path(),
        &out.path().join("previous.json"),
        &["en", "de", "ja", "sr_Cyrl"],
    ));
    let summary = pipeline.run(&CldrLayout::new(source.path())).await.unwrap();

    assert_eq!(summary.languages_built, 4);
    assert!(summary.failed.is_empty());
    assert_eq!(summary.global_entries, 4);

    let en = read_json(&out.path().join("en.json"));
    assert_eq!(
        en,
        json!({
            "😀": {
                "name": "grinning face",
                "keywords": ["face", "grin", "grinning face"],
                "category": "Smileys & People"
            },
            "♈": {"name": "Aries", "keywords": [], "category": "Symbols"},
            "👋🏻": {
                "name": "waving hand: light skin tone",
                "keywords": ["hand", "wave", "light skin tone"],
                "category": "Unknown"
            }
        })
    );

    // Keywords with no name anywhere are dropped
    assert_eq!(read_json(&out.path().join("ja.json")), json!({}));
    // Languages with no sources still produce an (empty) artifact
    assert_eq!(read_json(&out.path().join("sr@Cyrl.json")), json!({}));

    let global = read_json(&out.path().join("global.json"));
    assert_eq!(
        global["😀"],
        json!({"category": "Smileys & People", "shortcodes": [":grinning_face:"], "emoticons": []})
    );
    assert_eq!(
        global["🫠"],
        json!({"category": "Unknown", "shortcodes": [":schmelzendes_gesicht:"], "emoticons": []})
    );
    assert_eq!(global["👋🏻"]["shortcodes"], json!([":waving_hand_light_skin_tone:"]));
    assert!(!out.path().join("cldr_version.txt").exists());
}

#[tokio::test]
async fn test_previous_emoticons_are_carried_forward() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());

    let previous = out.path().join("previous.json");
    fs::write(
        &previous,
        r#"{
    "😀": {"category": "Old", "shortcodes": [":old:"], "emoticons": [":)", ":-)"]},
    "🦖": {"emoticons": ["rawr"]}
}"#,
    )
    .unwrap();

    Pipeline::new(config(out.path(), &previous, &["en"]))
        .with_release_record()
        .run(&CldrLayout::new(source.path()))
        .await
        .unwrap();

    let global = read_json(&out.path().join("global.json"));
    assert_eq!(
        global["😀"],
        json!({"category": "Smileys & People", "shortcodes": [":grinning_face:"], "emoticons": [":)", ":-)"]})
    );
    assert_eq!(global["♈"]["emoticons"], json!([]));
    // Keys no longer produced by any language are not resurrected
    assert!(global.get("🦖").is_none());

    assert_eq!(
        fs::read_to_string(out.path().join("cldr_version.txt")).unwrap(),
        "46\n"
    );
}

#[tokio::test]
async fn test_rebuild_is_byte_identical() {
    let source = TempDir::new().unwrap();
    common::create_release(source.path());

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let out = TempDir::new().unwrap();
        Pipeline::new(config(
            out.path(),
            &out.path().join("missing.json"),
            &["en", "de"],
        ))
        .run(&CldrLayout::new(source.path()))
        .await
        .unwrap();
        outputs.push(fs::read(out.path().join("global.json")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn test_malformed_language_aborts_by_default() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());
    fs::write(
        source.path().join("common/annotations/fr.xml"),
        "<ldml><annotations><annotation cp=\"😀\" type=\"tts\">visage",
    )
    .unwrap();

    let err = Pipeline::new(config(
        out.path(),
        &out.path().join("previous.json"),
        &["en", "fr"],
    ))
    .run(&CldrLayout::new(source.path()))
    .await
    .unwrap_err();

    match err {
        EmojiCatalogError::Language { language, source } => {
            assert_eq!(language, "fr");
            assert!(matches!(*source, EmojiCatalogError::AnnotationFormat { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out.path().join("global.json").exists());
}

#[tokio::test]
async fn test_isolated_failure_excludes_language() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());
    fs::write(
        source.path().join("common/annotationsDerived/de.xml"),
        "<ldml><annotations>",
    )
    .unwrap();

    let mut config = config(out.path(), &out.path().join("previous.json"), &["en", "de"]);
    config.failure_policy = FailurePolicy::Isolate;

    let summary = Pipeline::new(config)
        .run(&CldrLayout::new(source.path()))
        .await
        .unwrap();

    assert_eq!(summary.languages_built, 1);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "de");

    assert!(!out.path().join("de.json").exists());
    let global = read_json(&out.path().join("global.json"));
    assert!(global.get("🫠").is_none(), "failed language stays out of the union");
    assert!(global.get("😀").is_some());
}

#[tokio::test]
async fn test_malformed_labels_abort_before_languages() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());
    common::write_labels(source.path(), "[😀] ; Smileys\n");

    let err = Pipeline::new(config(out.path(), &out.path().join("p.json"), &["en"]))
        .run(&CldrLayout::new(source.path()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EmojiCatalogError::LabelFormat { line: 1, fields: 2 }
    ));
    assert!(!out.path().join("en.json").exists());
}

#[tokio::test]
async fn test_malformed_previous_catalog_writes_nothing() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());

    let previous = out.path().join("previous.json");
    fs::write(&previous, "{ not json").unwrap();

    let err = Pipeline::new(config(out.path(), &previous, &["en", "de"]))
        .with_release_record()
        .run(&CldrLayout::new(source.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, EmojiCatalogError::Json(_)));
    for artifact in ["en.json", "de.json", "global.json", "cldr_version.txt"] {
        assert!(
            !out.path().join(artifact).exists(),
            "{artifact} written despite invalid previous catalog"
        );
    }
}

#[tokio::test]
async fn test_oversized_worker_count_is_capped() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::create_release(source.path());

    let mut config = config(out.path(), &out.path().join("previous.json"), &["en"]);
    config.workers = Some(usize::MAX);

    let summary = Pipeline::new(config)
        .run(&CldrLayout::new(source.path()))
        .await
        .unwrap();

    assert_eq!(summary.languages_built, 1);
    assert!(out.path().join("en.json").is_file());
}
