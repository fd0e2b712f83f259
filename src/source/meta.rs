//! Source predicates and classification
//!
//! Pretty-print URL marker handling, extension and origin predicates, the
//! minification heuristic, and the icon chooser for source lists.

use crate::source::model::{IntroductionKind, Source, SourceContent};
use crate::source::url::{is_extension_url, SourceUrl};

/// Suffix appended to the URL of a pretty-printed source
pub const PRETTY_PRINT_SUFFIX: &str = ":formatted";

/// Extensions treated as JavaScript beyond the standard ones
pub(crate) const JAVASCRIPT_LIKE_EXTENSIONS: &[&str] = &["marko", "es6", "vue", "jsm"];

/// Lines sampled by the minification heuristic
const MINIFIED_SAMPLE_LINES: usize = 50;
/// Sampled sources with fewer indented lines than this percentage are
/// considered minified
const MINIFIED_INDENT_PERCENT: f64 = 5.0;
/// A single line longer than this marks the source as minified outright
const MINIFIED_LINE_LENGTH_LIMIT: usize = 250;

/// Strip the pretty-print marker from a URL
pub fn raw_source_url(url: &str) -> &str {
    url.strip_suffix(PRETTY_PRINT_SUFFIX).unwrap_or(url)
}

/// URL of the pretty-printed twin of `url`
pub fn pretty_source_url(url: &str) -> String {
    format!("{url}{PRETTY_PRINT_SUFFIX}")
}

/// True when the URL points at a pretty-printed source
pub fn is_pretty_url(url: &str) -> bool {
    url.ends_with(PRETTY_PRINT_SUFFIX)
}

impl Source {
    /// True when this source is the pretty-printed variant
    pub fn is_pretty(&self) -> bool {
        self.url.as_deref().map(is_pretty_url).unwrap_or(false)
    }
}

/// File extension of the source URL's filename, empty when there is none.
/// The query string never contributes.
pub fn file_extension(source: &Source) -> String {
    let parts = SourceUrl::parse(raw_source_url(source.url_str()));
    match parts.filename.rsplit_once('.') {
        Some((_, extension)) => extension.to_string(),
        None => String::new(),
    }
}

/// True if the extension or the reported content type identify JavaScript.
/// Plain `.js` files are expected to carry a javascript content type.
pub fn is_javascript(source: &Source, content: &SourceContent) -> bool {
    let extension = file_extension(source).to_lowercase();
    JAVASCRIPT_LIKE_EXTENSIONS.contains(&extension.as_str())
        || content
            .content_type()
            .map(|content_type| content_type.contains("javascript"))
            .unwrap_or(false)
}

/// True when the source comes from a vendored dependency tree
pub fn is_third_party(source: &Source) -> bool {
    match source.url.as_deref() {
        Some(url) => url.contains("node_modules") || url.contains("bower_components"),
        None => false,
    }
}

/// Only sources with a URL can be blackboxed
pub fn can_blackbox(source: &Source) -> bool {
    source.url.as_deref().map(|url| !url.is_empty()).unwrap_or(false)
}

/// True for scripts introduced by an inline `<script>` element
pub fn is_inline_script(source: &Source) -> bool {
    source.introduction == Some(IntroductionKind::ScriptElement)
}

/// Heuristic minification check over a sample of the content.
///
/// Pretty-printed and original sources are never minified; WebAssembly is
/// not text, so it is never minified either.
pub fn is_minified(source: &Source, content: &SourceContent) -> bool {
    if source.is_pretty() || source.is_original {
        return false;
    }
    let SourceContent::Text { text, .. } = content else {
        return false;
    };

    let mut sampled = 0usize;
    let mut indented = 0usize;
    for line in text.lines().take(MINIFIED_SAMPLE_LINES) {
        sampled += 1;
        if line.len() > MINIFIED_LINE_LENGTH_LIMIT {
            return true;
        }
        if line.starts_with(char::is_whitespace) {
            indented += 1;
        }
    }
    if sampled == 0 {
        return false;
    }
    (indented as f64 / sampled as f64) * 100.0 < MINIFIED_INDENT_PERCENT
}

/// Query string (leading `?` included) of the raw source URL
pub fn query_string(source: &Source) -> Option<String> {
    let url = source.url.as_deref()?;
    let search = SourceUrl::parse(raw_source_url(url)).search;
    if search.is_empty() {
        None
    } else {
        Some(search)
    }
}

/// Icon shown for a source in lists and tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceIcon {
    File,
    PrettyPrint,
    BlackBox,
    Extension,
    Coffeescript,
    Javascript,
    React,
    Typescript,
    Vue,
}

impl SourceIcon {
    /// Class name the front end maps to an icon glyph
    pub fn class_name(&self) -> &'static str {
        match self {
            SourceIcon::File => "file",
            SourceIcon::PrettyPrint => "prettyPrint",
            SourceIcon::BlackBox => "blackBox",
            SourceIcon::Extension => "extension",
            SourceIcon::Coffeescript => "coffeescript",
            SourceIcon::Javascript => "javascript",
            SourceIcon::React => "react",
            SourceIcon::Typescript => "typescript",
            SourceIcon::Vue => "vue",
        }
    }
}

/// Pick the icon for a source. Conditionals are ordered by priority.
pub fn icon_for(source: &Source) -> SourceIcon {
    let Some(url) = source.url.as_deref().filter(|url| !url.is_empty()) else {
        return SourceIcon::File;
    };
    if source.is_pretty() {
        return SourceIcon::PrettyPrint;
    }
    if source.is_black_boxed {
        return SourceIcon::BlackBox;
    }
    if is_extension_url(url) {
        return SourceIcon::Extension;
    }
    match file_extension(source).as_str() {
        "coffee" => SourceIcon::Coffeescript,
        "js" => SourceIcon::Javascript,
        "jsx" => SourceIcon::React,
        "ts" | "tsx" => SourceIcon::Typescript,
        "vue" => SourceIcon::Vue,
        _ => SourceIcon::File,
    }
}
