//! Path utilities for sourcelens data directories

use std::path::PathBuf;

/// Get the base sourcelens data directory (~/.sourcelens)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".sourcelens"))
        .unwrap_or_else(|| PathBuf::from(".sourcelens"))
}

/// Get the config file path (~/.sourcelens/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
