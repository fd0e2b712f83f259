//! Display-width text helpers
//!
//! Truncation budgets are display columns, not bytes or chars, so
//! multi-byte and wide characters do not blow up tab strips.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Truncate a string to its trailing `max_width` display columns, adding a
/// leading "…" if truncated. The end of a URL is the interesting part.
pub fn truncate_end(s: &str, max_width: usize) -> String {
    let current_width = UnicodeWidthStr::width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    let mut width = 0;
    let mut kept: Vec<char> = Vec::new();

    for c in s.chars().rev() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        kept.push(c);
        width += char_width;
    }

    let mut result = String::from(ELLIPSIS);
    result.extend(kept.into_iter().rev());
    result
}

/// Truncate a string around a middle "…", keeping roughly half the budget
/// on each side. Filenames keep both their start and their extension.
pub fn truncate_middle(s: &str, max_width: usize) -> String {
    let current_width = UnicodeWidthStr::width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    let side_width = (max_width / 2).saturating_sub(1);

    let mut width = 0;
    let mut head = String::new();
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > side_width {
            break;
        }
        head.push(c);
        width += char_width;
    }

    let mut width = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in s.chars().rev() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > side_width {
            break;
        }
        tail.push(c);
        width += char_width;
    }

    let mut result = head;
    result.push_str(ELLIPSIS);
    result.extend(tail.into_iter().rev());
    result
}

/// Percent-decode a URL for display.
///
/// Returns the input unchanged when it has no escapes, when an escape is
/// malformed, or when the decoded bytes are not valid UTF-8.
pub fn readable_url(url: &str) -> String {
    if !url.contains('%') {
        return url.to_string();
    }
    percent_decode(url).unwrap_or_else(|| url.to_string())
}

fn percent_decode(input: &str) -> Option<String> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();

    while let Some(b) = bytes.next() {
        if b == b'%' {
            let high = hex_value(bytes.next()?)?;
            let low = hex_value(bytes.next()?)?;
            out.push(high << 4 | low);
        } else {
            out.push(b);
        }
    }

    String::from_utf8(out).ok()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
