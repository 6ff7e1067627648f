//! Common types and utilities for the caret tree query services.
//!
//! This crate provides foundational types used across all caret crates:
//! - Source spans (`TextSpan`)
//! - Traversal limits and thresholds
//! - Analysis options loaded from JSON configuration

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::TextSpan;

// Centralized limits and thresholds
pub mod limits;

// Analysis options (constructor marker, traversal depth)
pub mod options;
pub use options::AnalysisOptions;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;

#[cfg(test)]
#[path = "tests/span_tests.rs"]
mod span_tests;
