//! Syntax-highlighting mode classification
//!
//! Decides how the editor should highlight a source. Symbol hints from the
//! parser outrank the file extension, the extension outranks the reported
//! content type, and content sniffing is the last resort before falling
//! back to plain text.

use crate::source::meta::{file_extension, JAVASCRIPT_LIKE_EXTENSIONS};
use crate::source::model::{Source, SourceContent, SymbolHints};

/// Highlighting mode handed to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    HtmlMixed,
    Javascript,
    Jsx,
    Typescript,
    TypescriptJsx,
    Coffeescript,
    Elm,
    Clojure,
    CSource,
    CppSource,
    Kotlin,
    ObjectiveC,
    RustSource,
    Haxe,
}

impl Mode {
    /// CodeMirror mode identifier for this mode
    pub fn codemirror(&self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::HtmlMixed => "htmlmixed",
            Mode::Javascript => "javascript",
            Mode::Jsx => "jsx",
            Mode::Typescript => "text/typescript",
            Mode::TypescriptJsx => "text/typescript-jsx",
            Mode::Coffeescript => "coffeescript",
            Mode::Elm => "elm",
            Mode::Clojure => "clojure",
            Mode::CSource => "text/x-csrc",
            Mode::CppSource => "text/x-c++src",
            Mode::Kotlin => "text/x-kotlin",
            Mode::ObjectiveC => "text/x-objectivec",
            Mode::RustSource => "text/x-rustsrc",
            Mode::Haxe => "text/x-haxe",
        }
    }
}

/// Extensions of languages that ship to the browser unbundled, mapped to
/// their native modes
const EXTENSION_MODES: &[(&str, Mode)] = &[
    ("c", Mode::CSource),
    ("kt", Mode::Kotlin),
    ("cpp", Mode::CppSource),
    ("m", Mode::ObjectiveC),
    ("rs", Mode::RustSource),
    ("hx", Mode::Haxe),
];

/// Content types with a dedicated mode
const CONTENT_TYPE_MODES: &[(&str, Mode)] = &[
    ("text/javascript", Mode::Javascript),
    ("text/typescript", Mode::Typescript),
    ("text/coffeescript", Mode::Coffeescript),
    ("text/typescript-jsx", Mode::TypescriptJsx),
    ("text/jsx", Mode::Jsx),
    ("text/x-elm", Mode::Elm),
    ("text/x-clojure", Mode::Clojure),
    ("text/x-clojurescript", Mode::Clojure),
    ("text/html", Mode::HtmlMixed),
];

/// Substrings that mark a content type as script-like
const SCRIPT_LIKE_CONTENT_TYPES: &[&str] = &["script", "elm", "jsx", "clojure", "html"];

/// Pick the highlighting mode for a source.
///
/// Pure function of its inputs; WebAssembly content is plain text as far
/// as the editor is concerned.
pub fn mode_for(source: &Source, content: &SourceContent, hints: Option<SymbolHints>) -> Mode {
    let SourceContent::Text { text, content_type } = content else {
        return Mode::Text;
    };

    let extension = file_extension(source);
    let hints = hints.unwrap_or_default();

    if extension == "jsx" || hints.has_jsx {
        if hints.has_types {
            return Mode::TypescriptJsx;
        }
        return Mode::Jsx;
    }

    if hints.has_types {
        return Mode::Typescript;
    }

    if let Some((_, mode)) = EXTENSION_MODES
        .iter()
        .find(|(candidate, _)| *candidate == extension)
    {
        return *mode;
    }

    if JAVASCRIPT_LIKE_EXTENSIONS.contains(&extension.as_str()) {
        return Mode::Javascript;
    }

    let looks_like_markup = text.trim_start().starts_with('<');

    let Some(content_type) = content_type.as_deref() else {
        if looks_like_markup {
            return Mode::HtmlMixed;
        }
        return Mode::Text;
    };

    if has_flow_pragma(text) {
        return Mode::Typescript;
    }

    if SCRIPT_LIKE_CONTENT_TYPES
        .iter()
        .any(|marker| content_type.contains(marker))
    {
        // Anything script-like without a dedicated mode is JavaScript.
        return CONTENT_TYPE_MODES
            .iter()
            .find(|(candidate, _)| *candidate == content_type)
            .map(|(_, mode)| *mode)
            .unwrap_or(Mode::Javascript);
    }

    if looks_like_markup {
        return Mode::HtmlMixed;
    }

    Mode::Text
}

/// Leading `// @flow` or `/* @flow */` pragma
fn has_flow_pragma(text: &str) -> bool {
    let head = text.trim_start();
    head.starts_with("// @flow") || head.starts_with("/* @flow */")
}
