//! Integration tests for the source display pipeline
//!
//! Drives URL decomposition, filename disambiguation, and classification
//! together over a realistic source set.

use sourcelens::{
    display_path, file_url, filename, icon_for, mode_for, segment_path, AsyncValue,
    LineTextCache, Mode, Source, SourceContent, SourceId, SourceIcon, SymbolHints,
};
use sourcelens::source::{relative_url, under_root, SourceUrl};

use super::common::fixtures::DEMO_SOURCES;

/// Filename collisions resolve to the minimal distinguishing fragment
#[test]
fn test_demo_set_display_paths() {
    let sources = &*DEMO_SOURCES;

    // Button.js differs one directory up.
    assert_eq!(
        display_path(&sources[0], sources).as_deref(),
        Some("src/a")
    );
    assert_eq!(
        display_path(&sources[1], sources).as_deref(),
        Some("lib/a")
    );

    // index.js collides with the vendored copy, not its pretty twin.
    assert_eq!(display_path(&sources[2], sources).as_deref(), Some("src"));
    assert_eq!(display_path(&sources[4], sources).as_deref(), Some("react"));

    // The anonymous source competes with nothing.
    assert_eq!(display_path(&sources[5], sources), None);
}

/// The pretty-printed twin displays exactly like its plain source
#[test]
fn test_pretty_twin_display() {
    let sources = &*DEMO_SOURCES;
    let plain = &sources[2];
    let pretty = &sources[3];

    assert_eq!(filename(pretty), filename(plain));
    assert_eq!(
        display_path(pretty, sources),
        display_path(plain, sources)
    );
    assert_eq!(icon_for(pretty), SourceIcon::PrettyPrint);
    assert_eq!(icon_for(plain), SourceIcon::Javascript);
}

/// Segmentation of a demo URL matches the tab-strip expectation
#[test]
fn test_segmentation_of_demo_url() {
    let parts = SourceUrl::parse(DEMO_SOURCES[0].url_str());
    assert_eq!(parts.group, "app.example.com");
    assert_eq!(
        segment_path(&parts.path),
        vec!["a".to_string(), "src".to_string(), "project".to_string(), String::new()]
    );
}

/// Readable URLs decode escapes and hide the pretty-print marker
#[test]
fn test_file_url_display() {
    let source = Source::new("e1", "https://app.example.com/my%20lib/core.js:formatted");
    assert_eq!(
        file_url(&source, false),
        "https://app.example.com/my lib/core.js"
    );

    let anonymous = &DEMO_SOURCES[5];
    assert_eq!(file_url(anonymous, true), "SOURCE s6");
}

/// Project-root trimming works from the host-relative location
#[test]
fn test_relative_url_over_demo_set() {
    let sources = &*DEMO_SOURCES;

    assert_eq!(relative_url(&sources[0], "project"), "src/a/Button.js");
    assert_eq!(
        relative_url(&sources[0], "app.example.com"),
        "project/src/a/Button.js"
    );
    assert!(under_root(&sources[0], "project/src"));
    assert!(!under_root(&sources[4], "project/src"));
}

/// Classification uses hints, extension, and content type together
#[test]
fn test_mode_classification_pipeline() {
    let source = &DEMO_SOURCES[0];
    let content = SourceContent::text_with_type("export const Button = 1;", "text/javascript");

    assert_eq!(mode_for(source, &content, None), Mode::Javascript);

    let hints = SymbolHints {
        has_jsx: true,
        has_types: false,
    };
    assert_eq!(mode_for(source, &content, Some(hints)), Mode::Jsx);

    let typed_hints = SymbolHints {
        has_jsx: true,
        has_types: true,
    };
    assert_eq!(
        mode_for(source, &content, Some(typed_hints)),
        Mode::TypescriptJsx
    );
}

/// Line lookups stay correct when hopping between sources
#[test]
fn test_line_cache_across_sources() {
    let mut cache = LineTextCache::new();

    let app_id = SourceId::new("s1");
    let app = AsyncValue::Fulfilled(SourceContent::text("const a = 1;\nconst b = 2;"));
    let vendor_id = SourceId::new("s5");
    let vendor = AsyncValue::Fulfilled(SourceContent::text("module.exports = react;"));

    assert_eq!(cache.line_text(&app_id, Some(&app), 2), "const b = 2;");
    assert_eq!(
        cache.line_text(&vendor_id, Some(&vendor), 1),
        "module.exports = react;"
    );
    // Back to the first source: the slot must not serve stale text.
    assert_eq!(cache.line_text(&app_id, Some(&app), 1), "const a = 1;");
    assert_eq!(cache.line_text(&app_id, Some(&app), 2), "const b = 2;");
}
