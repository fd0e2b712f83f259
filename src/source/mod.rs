//! Source display domain
//!
//! Everything the front end needs to present a recording's sources: URL
//! decomposition, readable names, filename disambiguation, highlighting
//! modes, and line access.

mod catalog;
mod content;
mod display;
mod meta;
mod model;
mod mode;
mod path;
mod url;

pub use catalog::{CatalogError, SourceCatalog, TabEntry};
pub use content::{line_count, LineTextCache};
pub use display::{
    file_url, filename, formatted_source_id, relative_url, truncated_filename, under_root,
    FILENAME_LENGTH, FILE_URL_LENGTH,
};
pub use meta::{
    can_blackbox, file_extension, icon_for, is_inline_script, is_javascript, is_minified,
    is_pretty_url, is_third_party, pretty_source_url, query_string, raw_source_url, SourceIcon,
    PRETTY_PRINT_SUFFIX,
};
pub use mode::{mode_for, Mode};
pub use model::{
    AsyncValue, IntroductionKind, Location, Source, SourceContent, SourceId, SymbolHints,
};
pub use path::{display_path, segment_path};
pub use self::url::{
    is_extension_directory_path, is_extension_url, plain_url, source_path, SourceUrl,
    INDEX_FILENAME,
};
