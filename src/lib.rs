//! Editor tree queries over a Java-like syntax tree.
//!
//! This crate re-exports the workspace crates as one API surface:
//! build a tree with [`TreeBuilder`], import the front end's token stream,
//! implement [`SemanticModel`] for the checker, and query through
//! [`TreeQueries`].

// Spans, limits and options shared by every crate
pub use caret_common::{AnalysisOptions, TextSpan, limits};

// Tokens and token cursors
pub use caret_scanner::{SyntaxKind, Token, TokenCursor, TokenStream, is_identifier};
#[cfg(feature = "fixtures")]
pub use caret_scanner::tokenize;

// Arena syntax tree and tree paths
pub use caret_syntax::{
    Ancestors, BinaryOperator, BuildError, ClassKind, Node, NodeArena, NodeData, NodeFlags,
    NodeIndex, NodeKind, NodeList, TreeBuilder, TreePath,
};

// Queries
pub use caret_analysis::{
    AnalysisError, CheckedExceptionSet, PathFinder, ResolvedScope, SemanticModel, SymbolKind,
    TreeQueries, TypeKind, TypeRelation, UncaughtExceptions,
};

// Tracing configuration - `CARET_LOG` / `CARET_LOG_FORMAT`
pub mod tracing_config;
