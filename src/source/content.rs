//! Line-oriented access to fetched source contents

use crate::source::model::{AsyncValue, Location, SourceContent, SourceId};

/// Characters shown from a position lookup
const POSITION_WINDOW: usize = 100;

/// Lines in a text source, bytes in a WebAssembly binary
pub fn line_count(content: &SourceContent) -> usize {
    match content {
        SourceContent::Text { text, .. } => text.matches('\n').count() + 1,
        SourceContent::Wasm { bytes } => bytes.len(),
    }
}

/// One-slot cache for line lookups.
///
/// The debugger re-reads the same line many times while the caret sits on
/// it, and splitting a large bundle on every read is wasteful. Fulfilled
/// content for a given source id never changes within a session, so
/// `(source id, line)` identifies a result. Callers own the cache; it is
/// not shared across threads.
#[derive(Debug, Default)]
pub struct LineTextCache {
    last: Option<(SourceId, u32, String)>,
}

impl LineTextCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the 1-based `line`.
    ///
    /// Returns `""` when the content is not fulfilled text or the line is
    /// out of range.
    pub fn line_text(
        &mut self,
        id: &SourceId,
        content: Option<&AsyncValue<SourceContent>>,
        line: u32,
    ) -> String {
        let Some(content) = content.and_then(AsyncValue::fulfilled) else {
            return String::new();
        };

        if let Some((cached_id, cached_line, cached_text)) = &self.last {
            if cached_id == id && *cached_line == line {
                return cached_text.clone();
            }
        }

        let text = match content {
            SourceContent::Text { text, .. } => match line.checked_sub(1) {
                Some(index) => text
                    .split('\n')
                    .nth(index as usize)
                    .unwrap_or("")
                    .to_string(),
                None => String::new(),
            },
            SourceContent::Wasm { .. } => String::new(),
        };

        self.last = Some((id.clone(), line, text.clone()));
        text
    }

    /// Up to [`POSITION_WINDOW`] characters of the line starting at
    /// `location.column`, trimmed of surrounding whitespace
    pub fn text_at_position(
        &mut self,
        id: &SourceId,
        content: Option<&AsyncValue<SourceContent>>,
        location: Location,
    ) -> String {
        let line_text = self.line_text(id, content, location.line);
        line_text
            .chars()
            .skip(location.column as usize)
            .take(POSITION_WINDOW)
            .collect::<String>()
            .trim()
            .to_string()
    }
}
