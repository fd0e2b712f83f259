//! Data models for debuggable sources

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque source identifier assigned by the recording session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// How a script was introduced into the page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IntroductionKind {
    ScriptElement,
    EventHandler,
    InjectedScript,
    #[serde(other)]
    Unknown,
}

/// A debuggable script or file reported by the recording session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Unique identifier
    pub id: SourceId,
    /// Source URL; absent for eval and other anonymous sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// True for an original (pre-source-map) source
    #[serde(default)]
    pub is_original: bool,
    /// True when the user has blackboxed this source
    #[serde(default)]
    pub is_black_boxed: bool,
    /// How the script entered the page, when the session reports it
    #[serde(
        default,
        rename = "introductionType",
        skip_serializing_if = "Option::is_none"
    )]
    pub introduction: Option<IntroductionKind>,
}

impl Source {
    /// Create a source with an id and URL (the common case)
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: SourceId::new(id),
            url: Some(url.into()),
            is_original: false,
            is_black_boxed: false,
            introduction: None,
        }
    }

    /// Create an anonymous source (eval, console input)
    pub fn without_url(id: impl Into<String>) -> Self {
        Self {
            id: SourceId::new(id),
            url: None,
            is_original: false,
            is_black_boxed: false,
            introduction: None,
        }
    }

    /// URL as a string slice, empty when absent
    pub fn url_str(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// Fetched contents of a source plus the server-reported content type
#[derive(Debug, Clone, PartialEq)]
pub enum SourceContent {
    /// Plain text source
    Text {
        text: String,
        /// Content type from the response headers, when present
        content_type: Option<String>,
    },
    /// WebAssembly binary
    Wasm { bytes: Vec<u8> },
}

impl SourceContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            content_type: None,
        }
    }

    pub fn text_with_type(text: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            content_type: Some(content_type.into()),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        match self {
            SourceContent::Text { content_type, .. } => content_type.as_deref(),
            SourceContent::Wasm { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, SourceContent::Text { .. })
    }
}

/// Lifecycle of a remotely fetched value
///
/// The front end renders sources before their contents arrive, so
/// consumers must handle all three states.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncValue<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> AsyncValue<T> {
    /// Inner value when fulfilled
    pub fn fulfilled(&self) -> Option<&T> {
        match self {
            AsyncValue::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, AsyncValue::Fulfilled(_))
    }
}

/// Summary flags from an external symbol-parsing service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolHints {
    /// The parse found JSX elements
    pub has_jsx: bool,
    /// The parse found type annotations
    pub has_types: bool,
}

/// Position within a source: 1-based line, 0-based column
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}
