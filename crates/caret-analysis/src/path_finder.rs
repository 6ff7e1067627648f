//! Offset to tree path resolution.
//!
//! Resolution runs in two phases:
//!
//! 1. **Descent.** Starting at a node, enter the first child whose span
//!    encloses the caret (`start < pos <= end`) and repeat. A method or
//!    variable whose name token contains the caret stops the descent at
//!    that declaration. Erroneous nodes are entered, but when none of
//!    their children encloses the caret the descent stops at the node
//!    containing the erroneous one.
//!
//! 2. **Boundary adjustment.** When the caret sits right after a closing
//!    token of the leaf (`)`, `;`, `}` or a closing `>`), the user is
//!    usually about to type *after* the construct, not inside it. A small
//!    table, checked in order with fallthrough, decides whether the leaf is
//!    kept or replaced by an enclosing statement:
//!
//!    | token            | leaf kept when the leaf is                       |
//!    |------------------|--------------------------------------------------|
//!    | `>` `>>` `>>>`   | member select, class-like, `a > b`               |
//!    | `)`              | for, enhanced for, while, do-while, if, cast     |
//!    | `;`              | for loop whose header still contains the token   |
//!    | `}`              | never: climb to the enclosing statement          |
//!
//!    A token whose condition does not hold falls through to the next row.

use crate::error::AnalysisError;
use crate::name_span;
use crate::semantic::SemanticModel;
use caret_common::AnalysisOptions;
use caret_scanner::{SyntaxKind, Token, TokenStream};
use caret_syntax::{NodeArena, NodeData, NodeIndex, NodeKind, TreePath};
use tracing::{debug, trace, warn};

/// Row of the boundary table a closing token enters at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum BoundaryRule {
    ClosingAngle,
    CloseParen,
    Semicolon,
    CloseBrace,
}

impl BoundaryRule {
    fn for_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            k if k.is_closing_angle() => Some(BoundaryRule::ClosingAngle),
            SyntaxKind::CloseParen => Some(BoundaryRule::CloseParen),
            SyntaxKind::Semicolon => Some(BoundaryRule::Semicolon),
            SyntaxKind::CloseBrace => Some(BoundaryRule::CloseBrace),
            _ => None,
        }
    }
}

/// Resolves offsets to paths of one tree. Paths borrow the arena for `'a`;
/// the options are only needed while resolving.
pub struct PathFinder<'a, 'o, M> {
    arena: &'a NodeArena,
    tokens: &'a TokenStream,
    model: &'a M,
    options: &'o AnalysisOptions,
}

impl<'a, 'o, M: SemanticModel> PathFinder<'a, 'o, M> {
    pub fn new(
        arena: &'a NodeArena,
        tokens: &'a TokenStream,
        model: &'a M,
        options: &'o AnalysisOptions,
    ) -> Self {
        Self {
            arena,
            tokens,
            model,
            options,
        }
    }

    /// Offset one past the end of the compilation unit's text.
    pub fn unit_end(&self) -> u32 {
        let span_end = self.arena.unit_span().map_or(0, |s| s.end);
        span_end.max(self.tokens.end_offset())
    }

    /// Resolve `pos` starting from the compilation unit.
    pub fn resolve(&self, pos: u32) -> Result<TreePath<'a>, AnalysisError> {
        self.resolve_from(self.arena.root_path(), pos)
    }

    /// Resolve `pos` starting from `start`, which must be a path of this
    /// finder's tree.
    pub fn resolve_from(
        &self,
        start: TreePath<'a>,
        pos: u32,
    ) -> Result<TreePath<'a>, AnalysisError> {
        if !std::ptr::eq(start.arena(), self.arena) || start.node().is_none() {
            return Err(AnalysisError::InvalidNode(start.leaf()));
        }
        let unit_end = self.unit_end();
        if pos > unit_end {
            return Err(AnalysisError::OffsetOutOfRange {
                offset: pos,
                unit_end,
            });
        }

        let leaf = self.descend(start.leaf(), pos, 0).unwrap_or(start.leaf());
        let path = self
            .arena
            .path_to(leaf)
            .ok_or(AnalysisError::InvalidNode(leaf))?;
        debug!(pos, leaf = %leaf, kind = ?path.kind(), "descent finished");

        Ok(self.adjust_for_boundary(path, pos))
    }

    /// Deepest node below `idx` enclosing `pos`, or `idx` itself when `pos`
    /// is on its declared name. `None` if no child encloses `pos`, or if
    /// the only enclosing child is an erroneous node with nothing deeper.
    fn descend(&self, idx: NodeIndex, pos: u32, depth: u32) -> Option<NodeIndex> {
        let node = self.arena.get(idx)?;

        if matches!(node.kind(), NodeKind::Method | NodeKind::Variable)
            && let Some(path) = self.arena.path_to(idx)
            && let Some(name) = name_span::name_span(&path, self.tokens, self.model, self.options)
            && name.contains(pos)
        {
            trace!(pos, node = %idx, "caret on declared name");
            return Some(idx);
        }

        if depth >= self.options.max_traversal_depth {
            warn!(
                depth,
                node = %idx,
                "path resolution reached the traversal depth limit"
            );
            return None;
        }

        for child in node.data.children() {
            let Some(span) = self.arena.span(child) else {
                continue;
            };
            if !span.encloses_caret(pos) {
                continue;
            }
            if self.arena.kind(child) == Some(NodeKind::Erroneous) {
                // A parse-error placeholder is never the leaf itself.
                return self.descend(child, pos, depth + 1);
            }
            return Some(self.descend(child, pos, depth + 1).unwrap_or(child));
        }
        None
    }

    fn adjust_for_boundary(&self, path: TreePath<'a>, pos: u32) -> TreePath<'a> {
        if path.is_root() {
            return path;
        }
        let (Some(span), Some(leaf)) = (path.span(), path.node()) else {
            return path;
        };
        let Some(token) = self.tokens.tokens_in(span).last() else {
            return path;
        };
        if token.offset >= pos {
            return path;
        }
        let Some(rule) = BoundaryRule::for_token(token.kind) else {
            return path;
        };

        let kind = leaf.kind();
        if rule <= BoundaryRule::ClosingAngle
            && (kind == NodeKind::MemberSelect || kind.is_class() || kind == NodeKind::GreaterThan)
        {
            trace!(?kind, "closing angle bracket keeps leaf");
            return path;
        }
        if rule <= BoundaryRule::CloseParen
            && (kind.is_loop() || matches!(kind, NodeKind::If | NodeKind::TypeCast))
        {
            trace!(?kind, "closing parenthesis keeps leaf");
            return path;
        }
        if rule <= BoundaryRule::Semicolon && self.in_for_header(&leaf.data, token) {
            trace!("semicolon inside for header keeps leaf");
            return path;
        }

        let adjusted = climb_out_of_block(path);
        debug!(
            ?rule,
            from = ?kind,
            to = ?adjusted.kind(),
            "boundary adjustment"
        );
        adjusted
    }

    /// Whether `token` still belongs to the header of a for loop: at or
    /// before its first update expression, or before the body when the loop
    /// has no updates. A loop with neither is still being typed.
    fn in_for_header(&self, data: &NodeData, token: &Token) -> bool {
        let NodeData::ForLoop { update, body, .. } = data else {
            return false;
        };
        match update.first() {
            Some(&first) => self
                .arena
                .span(first)
                .is_some_and(|s| token.offset <= s.start),
            None => self.arena.span(*body).is_none_or(|s| token.offset < s.start),
        }
    }
}

fn parent_or_self(path: TreePath<'_>) -> TreePath<'_> {
    path.parent_path().unwrap_or(path)
}

/// Move from a leaf closed by `}` to the statement the user continues after.
fn climb_out_of_block(path: TreePath<'_>) -> TreePath<'_> {
    let Some(mut path) = path.parent_path() else {
        return path;
    };
    match path.kind() {
        Some(NodeKind::Catch) => {
            path = parent_or_self(parent_or_self(path));
        }
        Some(
            NodeKind::Method
            | NodeKind::ForLoop
            | NodeKind::EnhancedForLoop
            | NodeKind::Synchronized
            | NodeKind::WhileLoop
            | NodeKind::Try,
        ) => {
            path = parent_or_self(path);
        }
        Some(NodeKind::If) => {
            while let Some(parent) = path.parent_path() {
                path = parent;
                if path.kind() != Some(NodeKind::If) {
                    break;
                }
            }
        }
        _ => {}
    }
    path
}
