pub mod cli;
pub mod config;
pub mod source;
pub mod telemetry;
pub mod util;

pub use config::{Config, ConfigError, DisplayConfig};
pub use source::{
    display_path, file_url, filename, icon_for, is_minified, line_count, mode_for, segment_path,
    AsyncValue, IntroductionKind, LineTextCache, Location, Mode, Source, SourceCatalog,
    SourceContent, SourceIcon, SourceId, SourceUrl, SymbolHints, TabEntry,
};
pub use telemetry::{Telemetry, TelemetryConfig, TelemetryUser};
