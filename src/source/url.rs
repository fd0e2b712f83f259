//! Source URL decomposition
//!
//! Splits raw source URLs into the group/path/filename/search record the
//! display layer works with. Parsing is delegated to the `url` crate; this
//! module only decides how parsed parts map onto display fields, and it
//! never fails: unparseable input is treated as a bare path.

use url::Url;

/// Filename shown for directory URLs such as `https://example.com/`
pub const INDEX_FILENAME: &str = "(index)";

/// Display-oriented parts of a source URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUrl {
    /// Grouping key: host for web URLs, `scheme://` style for the rest
    pub group: String,
    /// Path component, e.g. `/a/b/c.html`
    pub path: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
    /// Last path segment, [`INDEX_FILENAME`] for directory URLs
    pub filename: String,
}

impl SourceUrl {
    /// Derive display parts from a raw source URL
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        match Url::parse(raw) {
            Ok(url) => Self::from_parsed(&url, raw),
            Err(_) => Self::from_bare_path(raw),
        }
    }

    fn from_parsed(url: &Url, raw: &str) -> Self {
        let search = url
            .query()
            .map(|query| format!("?{query}"))
            .unwrap_or_default();

        match url.scheme() {
            // javascript: pseudo-URLs carry no displayable location
            "javascript" => Self::default(),
            "about" => Self {
                group: raw.to_string(),
                path: "/".to_string(),
                search: String::new(),
                filename: raw.to_string(),
            },
            "data" => Self {
                group: "data:".to_string(),
                path: "/".to_string(),
                search: String::new(),
                filename: raw.to_string(),
            },
            "http" | "https" => Self {
                group: url.host_str().unwrap_or("").to_string(),
                path: url.path().to_string(),
                search,
                filename: filename_from_path(url.path()),
            },
            "file" => Self {
                group: "file://".to_string(),
                path: url.path().to_string(),
                search,
                filename: filename_from_path(url.path()),
            },
            // webpack://, chrome://, moz-extension://abc123, ...
            scheme => Self {
                group: format!("{}://{}", scheme, url.host_str().unwrap_or("")),
                path: url.path().to_string(),
                search,
                filename: filename_from_path(url.path()),
            },
        }
    }

    // Relative URLs and plain paths still need a sensible display record.
    fn from_bare_path(raw: &str) -> Self {
        let (path, search) = match raw.split_once('?') {
            Some((path, query)) => (path, format!("?{query}")),
            None => (raw, String::new()),
        };
        // An absolute path is a local file as far as grouping goes.
        let group = if path.starts_with('/') {
            "file://".to_string()
        } else {
            String::new()
        };
        Self {
            group,
            path: path.to_string(),
            search,
            filename: filename_from_path(path),
        }
    }
}

fn filename_from_path(path: &str) -> String {
    let without_extras = match path.split_once(['?', '#']) {
        Some((head, _)) => head,
        None => path,
    };
    let name = without_extras.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        INDEX_FILENAME.to_string()
    } else {
        name.to_string()
    }
}

/// Path-plus-query portion used as a search or save target.
///
/// Falls back to the whole URL when there is no hierarchical path to speak
/// of (unparseable input).
pub fn source_path(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    match Url::parse(url) {
        Ok(parsed) => {
            let path = parsed.path();
            if path.is_empty() {
                return url.to_string();
            }
            match parsed.query() {
                Some(query) => format!("{path}?{query}"),
                None => path.to_string(),
            }
        }
        Err(_) => url.to_string(),
    }
}

/// Strip the query string from a URL
pub fn plain_url(url: &str) -> &str {
    match url.split_once('?') {
        Some((head, _)) => head,
        None => url,
    }
}

/// True for browser-extension URLs
pub fn is_extension_url(url: &str) -> bool {
    url.contains("moz-extension:") || url.contains("chrome-extension")
}

/// True when an extension URL points at the extension root rather than a
/// file inside it
pub fn is_extension_directory_path(url: &str) -> bool {
    if !is_extension_url(url) {
        return false;
    }
    let collapsed = collapse_slashes(url);
    let parts: Vec<&str> = collapsed.split('/').collect();
    let Some(scheme_index) = parts
        .iter()
        .position(|part| *part == "moz-extension:" || *part == "chrome-extension:")
    else {
        return false;
    };
    // parts[scheme_index + 1] is the extension id; anything after it is a
    // file path inside the extension.
    match parts.get(scheme_index + 2) {
        Some(segment) => segment.is_empty(),
        None => true,
    }
}

fn collapse_slashes(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut previous_slash = false;
    for c in url.chars() {
        if c == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(c);
    }
    out
}
