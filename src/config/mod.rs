mod settings;

pub use settings::{Config, ConfigError, DisplayConfig};
