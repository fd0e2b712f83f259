//! Source fixtures shared across tests

use once_cell::sync::Lazy;
use sourcelens::Source;

/// A small but realistic source set: a filename collision across two
/// directories, a second collision against a vendored copy, a
/// pretty-printed twin, and an anonymous eval source.
pub static DEMO_SOURCES: Lazy<Vec<Source>> = Lazy::new(|| {
    vec![
        Source::new("s1", "https://app.example.com/project/src/a/Button.js"),
        Source::new("s2", "https://app.example.com/project/lib/a/Button.js"),
        Source::new("s3", "https://app.example.com/project/src/index.js"),
        Source::new(
            "s4",
            "https://app.example.com/project/src/index.js:formatted",
        ),
        Source::new("s5", "https://cdn.example.com/node_modules/react/index.js"),
        Source::without_url("s6"),
    ]
});

/// JSON dump of [`DEMO_SOURCES`] in the shape the CLI consumes
pub fn demo_sources_json() -> String {
    serde_json::to_string_pretty(&*DEMO_SOURCES).expect("fixture sources serialize")
}
