//! Readable names for sources
//!
//! Filenames, full URLs, and root-relative paths shaped for tab strips and
//! source lists. Sources without a URL get a stable placeholder derived
//! from their id.

use crate::source::meta::raw_source_url;
use crate::source::model::{Source, SourceId};
use crate::source::url::SourceUrl;
use crate::util::text::{readable_url, truncate_end, truncate_middle};

/// Display columns kept when truncating a full file URL
pub const FILE_URL_LENGTH: usize = 50;
/// Display columns kept when truncating a filename
pub const FILENAME_LENGTH: usize = 30;

/// Placeholder name for sources without a URL
pub fn formatted_source_id(id: &SourceId) -> String {
    format!("SOURCE {id}")
}

/// Readable filename, or the formatted source id when there is no URL
pub fn filename(source: &Source) -> String {
    if raw_source_url(source.url_str()).is_empty() {
        return formatted_source_id(&source.id);
    }
    let name = SourceUrl::parse(source.url_str()).filename;
    raw_source_url(&name).to_string()
}

/// Middle-truncated filename with an optional query-string suffix
pub fn truncated_filename(source: &Source, querystring: &str, length: usize) -> String {
    truncate_middle(&format!("{}{querystring}", filename(source)), length)
}

/// Readable source URL, or the formatted source id when there is no URL.
///
/// Strips the pretty-print marker and percent-decodes for display. With
/// `truncate` set, keeps the trailing [`FILE_URL_LENGTH`] columns.
pub fn file_url(source: &Source, truncate: bool) -> String {
    if source.url_str().is_empty() {
        return formatted_source_id(&source.id);
    }
    let name = readable_url(raw_source_url(source.url_str()));
    if !truncate {
        return name;
    }
    truncate_end(&name, FILE_URL_LENGTH)
}

/// Path of the source relative to a project root.
///
/// The root is matched against `group + path`; when it does not occur the
/// plain path is returned, and an empty root means no trimming.
pub fn relative_url(source: &Source, root: &str) -> String {
    let parts = SourceUrl::parse(source.url_str());
    if root.is_empty() {
        return parts.path;
    }
    let located = format!("{}{}", parts.group, parts.path);
    match located.find(root) {
        // Skip the root and its trailing separator.
        Some(index) => located
            .get(index + root.len() + 1..)
            .unwrap_or("")
            .to_string(),
        None => parts.path,
    }
}

/// True when the source lives under the given root
pub fn under_root(source: &Source, root: &str) -> bool {
    let Some(url) = source.url.as_deref() else {
        return false;
    };
    // chrome:// URLs hide the interesting part behind the scheme, so the
    // derived group/path is what gets matched.
    if url.contains("chrome://") {
        let parts = SourceUrl::parse(url);
        return format!("{}{}", parts.group, parts.path).contains(root);
    }
    url.contains(root)
}
