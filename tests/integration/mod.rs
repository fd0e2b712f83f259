//! Integration tests for sourcelens
//!
//! These tests verify that the display pipeline works across modules:
//! URL parsing, filename disambiguation, classification, and catalogs.

#[path = "../common/mod.rs"]
pub mod common;

pub mod catalog_flow;
pub mod source_display;
