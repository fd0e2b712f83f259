//! Utility modules

pub mod paths;
pub mod text;

pub use paths::{config_path, data_dir};
pub use text::{readable_url, truncate_end, truncate_middle};
