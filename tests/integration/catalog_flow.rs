//! Integration tests for catalog loading and tab building
//!
//! Covers the dump-to-tab-strip flow the CLI wraps: write a JSON dump,
//! load it, and check the rows that would be rendered.

use std::io::Write;

use sourcelens::source::truncated_filename;
use sourcelens::{Config, Source, SourceCatalog};

use super::common::fixtures::{demo_sources_json, DEMO_SOURCES};

#[test]
fn test_catalog_from_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp dump");
    file.write_all(demo_sources_json().as_bytes())
        .expect("write dump");

    let catalog = SourceCatalog::from_json_file(file.path()).expect("load dump");
    assert_eq!(catalog.len(), DEMO_SOURCES.len());

    // Deserialized sources behave exactly like the in-memory originals.
    for (loaded, original) in catalog.iter().zip(DEMO_SOURCES.iter()) {
        assert_eq!(loaded, original);
    }
}

#[test]
fn test_tab_entries_for_demo_dump() {
    let catalog = SourceCatalog::from_json_str(&demo_sources_json()).expect("parse dump");
    let entries = catalog.tab_entries();

    let buttons: Vec<_> = entries
        .iter()
        .filter(|entry| entry.filename == "Button.js")
        .collect();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].display_path.as_deref(), Some("src/a"));
    assert_eq!(buttons[1].display_path.as_deref(), Some("lib/a"));

    // The anonymous source renders its placeholder with the fallback icon.
    let anonymous = entries.last().expect("entries");
    assert_eq!(anonymous.filename, "SOURCE s6");
    assert_eq!(anonymous.icon, "file");
}

#[test]
fn test_tab_entries_serialize_for_the_front_end() {
    let catalog = SourceCatalog::from_json_str(&demo_sources_json()).expect("parse dump");
    let json = serde_json::to_string(&catalog.tab_entries()).expect("serialize entries");

    assert!(json.contains(r#""filename":"Button.js""#));
    assert!(json.contains(r#""display_path":"src/a""#));
    // None display paths are omitted, not null.
    assert!(!json.contains("null"));
}

#[test]
fn test_configured_filename_length_applies() {
    let config = Config::from_toml_str(
        r#"
        [display]
        filename-length = 12
        "#,
    )
    .expect("parse config");

    let long = Source::new(
        "L1",
        "https://app.example.com/src/ReallyLongComponentName.js",
    );
    let name = truncated_filename(&long, "", config.display.filename_length);
    assert_eq!(name, "Reall…me.js");

    // Short names pass through untouched.
    let short = &DEMO_SOURCES[0];
    assert_eq!(
        truncated_filename(short, "", config.display.filename_length),
        "Button.js"
    );
}
