//! Shared test utilities for sourcelens
//!
//! Provides the demo source set and dump helpers used by integration and
//! CLI tests.

pub mod fixtures;
