//! Editor-facing queries over a parsed and type-checked compilation unit.
//!
//! - `path_finder` - Map a caret offset to the most specific tree path
//! - `scope` - Lexical scope at an offset, with base-clause detection
//! - `name_span` - Exact spans of declared names and parameter lists
//! - `jump_target` - Targets of `break` / `continue`
//! - `uncaught` - Checked exceptions escaping a subtree
//!
//! Type and symbol information comes from the front end through the
//! [`SemanticModel`] and [`TypeRelation`] traits. [`TreeQueries`] bundles
//! all queries for one snapshot.

pub mod error;
pub use error::AnalysisError;

pub mod semantic;
pub use semantic::{SemanticModel, SymbolKind, TypeKind, TypeRelation};

pub mod exception_set;
pub use exception_set::CheckedExceptionSet;

pub mod name_span;
pub mod path_finder;
pub use path_finder::PathFinder;

pub mod scope;
pub use scope::ResolvedScope;

pub mod jump_target;
pub mod uncaught;
pub use uncaught::UncaughtExceptions;

pub mod tree_queries;
pub use tree_queries::TreeQueries;

#[cfg(test)]
#[path = "tests/test_fixtures.rs"]
mod test_fixtures;

#[cfg(test)]
#[path = "tests/exception_set_tests.rs"]
mod exception_set_tests;

#[cfg(test)]
#[path = "tests/name_span_tests.rs"]
mod name_span_tests;

#[cfg(test)]
#[path = "tests/path_finder_tests.rs"]
mod path_finder_tests;

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod scope_tests;

#[cfg(test)]
#[path = "tests/jump_target_tests.rs"]
mod jump_target_tests;

#[cfg(test)]
#[path = "tests/uncaught_tests.rs"]
mod uncaught_tests;

#[cfg(test)]
#[path = "tests/tree_queries_tests.rs"]
mod tree_queries_tests;
