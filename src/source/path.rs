//! Path segmentation and minimal display paths
//!
//! When two open sources share a filename, the tab strip shows the shortest
//! trailing directory fragment that tells them apart. Segmentation and the
//! disambiguation walk both run innermost-out, so the common case (files
//! differing in their parent directory) stops after one step.

use crate::source::display::filename;
use crate::source::meta::raw_source_url;
use crate::source::model::Source;
use crate::source::url::SourceUrl;

/// Split a slash-delimited path into its directory names, innermost first,
/// terminated by an empty root sentinel.
///
/// The filename component is dropped: `/a/b/c.html` yields
/// `["b", "a", ""]`. A path with no directory component yields just the
/// sentinel, so the result always has one entry per directory plus one.
pub fn segment_path(path: &str) -> Vec<String> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);

    let mut components = trimmed.split('/');
    // Last component is the filename, not a directory.
    components.next_back();

    let mut segments: Vec<String> = components.map(str::to_string).collect();
    segments.reverse();
    segments.push(String::new());
    segments
}

/// Shortest trailing directory fragment that distinguishes `source` from
/// every other source sharing its filename.
///
/// Returns `None` when no other source competes for the filename. Segments
/// are compared innermost-out, keeping each segment until one is not
/// matched by any competitor at the same depth; a competitor shorter than
/// the current depth no longer matches. The root sentinel never contributes
/// a separator, so results carry no leading or trailing slash.
pub fn display_path(source: &Source, sources: &[Source]) -> Option<String> {
    let raw_url = raw_source_url(source.url_str());
    let name = filename(source);

    let competitors: Vec<&Source> = sources
        .iter()
        .filter(|other| {
            raw_source_url(other.url_str()) != raw_url && filename(other) == name
        })
        .collect();

    if competitors.is_empty() {
        return None;
    }

    let segments = segment_path(&SourceUrl::parse(source.url_str()).path);
    let competitor_segments: Vec<Vec<String>> = competitors
        .iter()
        .map(|other| segment_path(&SourceUrl::parse(other.url_str()).path))
        .collect();

    let mut kept: Vec<&str> = Vec::new();
    for (depth, segment) in segments.iter().enumerate() {
        kept.push(segment);
        let still_ambiguous = competitor_segments
            .iter()
            .any(|path| path.get(depth).map(String::as_str) == Some(segment.as_str()));
        if !still_ambiguous {
            break;
        }
    }

    // Reverse back to reading order; the sentinel is dropped from output.
    let display: Vec<&str> = kept
        .into_iter()
        .rev()
        .filter(|segment| !segment.is_empty())
        .collect();
    Some(display.join("/"))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // One segment per directory plus the root sentinel, regardless of
        // depth or leading slash.
        #[test]
        fn segment_count_is_directories_plus_one(
            dirs in proptest::collection::vec("[a-z0-9_-]{1,8}", 0..6),
            leading_slash in proptest::bool::ANY,
        ) {
            let mut path = String::new();
            if leading_slash {
                path.push('/');
            }
            for dir in &dirs {
                path.push_str(dir);
                path.push('/');
            }
            path.push_str("file.js");

            let segments = segment_path(&path);
            prop_assert_eq!(segments.len(), dirs.len() + 1);
            prop_assert_eq!(segments.last().map(String::as_str), Some(""));

            // Innermost directory comes first.
            if let Some(innermost) = dirs.last() {
                prop_assert_eq!(&segments[0], innermost);
            }
        }
    }
}
