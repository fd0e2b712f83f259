//! Loading and aggregating source dumps
//!
//! A catalog is the front end's flat list of sources for one recording,
//! usually read from a JSON dump. It is the input the display layer needs
//! to disambiguate filenames across the whole set.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::display::filename;
use crate::source::meta::icon_for;
use crate::source::model::Source;
use crate::source::path::display_path;

/// Errors that can occur while loading a source dump
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read sources file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse sources JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered collection of sources, as dumped by the front end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceCatalog {
    sources: Vec<Source>,
}

/// One row of the editor-tab listing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabEntry {
    /// Readable filename (or placeholder id)
    pub filename: String,
    /// Minimal directory fragment distinguishing same-named files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_path: Option<String>,
    /// Icon class for the row
    pub icon: &'static str,
}

impl SourceCatalog {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Load a JSON array of sources from disk
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a JSON array of sources
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let sources: Vec<Source> = serde_json::from_str(json)?;
        Ok(Self::new(sources))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }

    /// Tab rows (filename, disambiguating path, icon) for every source,
    /// in catalog order
    pub fn tab_entries(&self) -> Vec<TabEntry> {
        self.sources
            .iter()
            .map(|source| TabEntry {
                filename: filename(source),
                display_path: display_path(source, &self.sources),
                icon: icon_for(source).class_name(),
            })
            .collect()
    }
}
