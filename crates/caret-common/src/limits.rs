//! Centralized limits and thresholds for tree queries.
//!
//! Every query walks the tree recursively. The front end may hand us
//! arbitrarily deep trees (generated code, deeply nested lambdas or
//! binary expressions), so recursive walks carry an explicit depth bound
//! instead of relying on the native stack.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth visited by recursive tree walks.
///
/// Used by the path finder (offset descent) and the uncaught-exception
/// visitor. Subtrees below this depth are skipped and a `warn!` event is
/// emitted. Each level costs one or two stack frames, so 2048 levels stay
/// far below the 8 MB default stack.
///
/// # Example
///
/// ```java
/// // A generated expression with thousands of nested parentheses:
/// int x = ((((((((((((((((((((/* ... 5000 levels ... */))))))))))))))))))));
/// ```
pub const MAX_TRAVERSAL_DEPTH: u32 = 2048;

/// Maximum number of ancestor steps taken while walking a `TreePath` upward.
///
/// Parent links are produced by the tree builder and are acyclic, but a
/// corrupted arena must not hang an editor thread.
pub const MAX_ANCESTOR_WALK: u32 = 1 << 16;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity of child lists (`NodeList`).
///
/// Most statement lists, argument lists and `throws` clauses are short.
pub const NODE_LIST_INLINE: usize = 4;

/// Inline capacity of a `CheckedExceptionSet` before it spills to the heap.
pub const EXCEPTION_SET_INLINE: usize = 4;
