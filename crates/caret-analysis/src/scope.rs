//! Lexical scope at an offset.

use crate::error::AnalysisError;
use crate::path_finder::PathFinder;
use crate::semantic::SemanticModel;
use caret_scanner::{SyntaxKind, TokenStream};
use caret_syntax::{NodeData, NodeIndex, TreePath};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// The scope at an offset, as answered by the semantic model.
///
/// `in_base_clause` is set when the offset is in the `extends` or
/// `implements` clause of a type declaration; the type's own members are
/// not visible there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope<S> {
    pub scope: S,
    pub in_base_clause: bool,
}

impl<S> ResolvedScope<S> {
    pub fn new(scope: S, in_base_clause: bool) -> Self {
        Self {
            scope,
            in_base_clause,
        }
    }
}

/// Elements of the leaf that introduce bindings one after another.
fn binding_elements(data: &NodeData) -> SmallVec<[NodeIndex; 4]> {
    match data {
        NodeData::Block { statements } => statements.iter().copied().collect(),
        NodeData::ForLoop { initializer, .. } => initializer.iter().copied().collect(),
        NodeData::EnhancedForLoop { body, .. } => std::iter::once(*body).collect(),
        NodeData::Method { parameters, .. } => parameters.iter().copied().collect(),
        _ => SmallVec::new(),
    }
}

/// Re-root `path` at the last statement, initializer or parameter that
/// starts before `pos`, so lookups only see bindings declared before the
/// caret. Paths whose leaf has no such list are returned unchanged.
pub fn narrow_to_preceding<'a>(path: TreePath<'a>, pos: u32) -> TreePath<'a> {
    let Some(node) = path.node() else {
        return path;
    };
    let arena = path.arena();
    let preceding = binding_elements(&node.data)
        .into_iter()
        .rev()
        .find(|&idx| arena.span(idx).is_some_and(|s| s.start < pos));

    match preceding.and_then(|idx| path.child(idx)) {
        Some(narrowed) => {
            trace!(from = %path.leaf(), to = %narrowed.leaf(), "scope narrowed");
            narrowed
        }
        None => path,
    }
}

/// Whether the first significant token before `pos` is `extends` or
/// `implements`.
pub fn in_base_clause(tokens: &TokenStream, pos: u32) -> bool {
    let mut cursor = tokens.cursor();
    cursor.move_to(pos);
    while cursor.move_previous() {
        match cursor.kind() {
            Some(kind) if kind.is_trivia() => continue,
            Some(SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword) => return true,
            _ => return false,
        }
    }
    false
}

pub fn resolve_scope<'a, M: SemanticModel>(
    finder: &PathFinder<'a, '_, M>,
    tokens: &TokenStream,
    model: &M,
    pos: u32,
) -> Result<ResolvedScope<M::Scope>, AnalysisError> {
    let path = narrow_to_preceding(finder.resolve(pos)?, pos);
    let scope = model.scope_at(&path);

    let base_clause = path.kind().is_some_and(|k| k.is_class()) && in_base_clause(tokens, pos);
    debug!(pos, leaf = %path.leaf(), in_base_clause = base_clause, "scope resolved");

    Ok(ResolvedScope::new(scope, base_clause))
}
