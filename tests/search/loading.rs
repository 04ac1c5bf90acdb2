//! Loading documents, configuration and lexicons from disk.

use super::common::{engine_with, hit_ids, never_cancelled};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use typotrie::search::load_documents;
use typotrie::{ConfigError, Lexicon, SearchConfig};

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn documents_config_and_lexicon_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let docs = write(
        &dir,
        "docs.json",
        r#"[
            { "id": 1, "name": "Hotel Moscow", "rank": 5 },
            { "id": 2, "name": "Moscow Kremlin", "rank": 9 },
            { "id": 3, "name": "Grand Palace", "alt_names": ["Palace"], "categories": ["hotel"] }
        ]"#,
    );
    let config = write(&dir, "config.json", r#"{ "result_limit": 1, "policy": { "one_below": 6 } }"#);
    let lexicon = write(&dir, "lexicon.json", r#"{ "stop_words": ["the"] }"#);

    let docs = load_documents(&docs).unwrap();
    let config = SearchConfig::from_path(&config).unwrap();
    assert_eq!(config.result_limit, 1);
    assert_eq!(config.policy.one_below, 6);
    assert_eq!(config.policy.zero_below, 4);

    let engine = engine_with(config, &docs).with_lexicon(Arc::new(Lexicon::from_path(&lexicon).unwrap()));
    assert_eq!(hit_ids(&engine.search_text("the moscow ", &never_cancelled()).unwrap()), vec![2]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(load_documents(&missing), Err(ConfigError::Io(_))));
    assert!(matches!(SearchConfig::from_path(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "bad.json", "[{ \"id\": \"one\" }]");
    assert!(matches!(load_documents(&bad), Err(ConfigError::Parse(_))));
    assert!(matches!(Lexicon::from_path(&bad), Err(ConfigError::Parse(_))));
}

#[test]
fn invalid_config_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", r#"{ "unknown_idf": -2.0 }"#);
    assert!(matches!(
        SearchConfig::from_path(&config),
        Err(ConfigError::NonPositiveUnknownIdf(_))
    ));
}
