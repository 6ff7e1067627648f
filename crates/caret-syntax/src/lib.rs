//! Syntax tree for the caret tree query services.
//!
//! The tree of one compilation unit is stored in a `NodeArena`: nodes live
//! contiguously and refer to each other by `NodeIndex`. Parent links are
//! computed once by `TreeBuilder::finish`, which makes a `TreePath` (a
//! node plus its ancestor chain) a two-word `Copy` value whose ancestor
//! chain is shared by construction.
//!
//! The arena is immutable once built; queries borrow it.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod node;
pub use node::{BinaryOperator, ClassKind, Node, NodeData, NodeFlags, NodeKind};

pub mod node_arena;
pub use node_arena::NodeArena;

pub mod builder;
pub use builder::{BuildError, TreeBuilder};

pub mod path;
pub use path::{Ancestors, TreePath};

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod builder_tests;

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod path_tests;
