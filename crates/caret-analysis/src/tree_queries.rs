//! Entry point bundling every query over one compilation unit.

use crate::error::AnalysisError;
use crate::exception_set::CheckedExceptionSet;
use crate::jump_target;
use crate::name_span;
use crate::path_finder::PathFinder;
use crate::scope::{self, ResolvedScope};
use crate::semantic::SemanticModel;
use caret_common::{AnalysisOptions, TextSpan};
use caret_scanner::{Token, TokenStream};
use caret_syntax::{NodeArena, NodeFlags, NodeIndex, NodeKind, TreePath};
use tracing::instrument;

/// Tree queries over an immutable snapshot of one compilation unit: its
/// tree, its tokens and the checker's view of it.
///
/// Every query is a pure function of the snapshot. `TreeQueries` is `Send`
/// and `Sync` whenever the semantic model is.
pub struct TreeQueries<'a, M> {
    arena: &'a NodeArena,
    tokens: &'a TokenStream,
    model: &'a M,
    options: AnalysisOptions,
}

impl<'a, M: SemanticModel> TreeQueries<'a, M> {
    pub fn new(arena: &'a NodeArena, tokens: &'a TokenStream, model: &'a M) -> Self {
        Self::with_options(arena, tokens, model, AnalysisOptions::default())
    }

    pub fn with_options(
        arena: &'a NodeArena,
        tokens: &'a TokenStream,
        model: &'a M,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            arena,
            tokens,
            model,
            options,
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    #[inline]
    pub fn tokens(&self) -> &'a TokenStream {
        self.tokens
    }

    #[inline]
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    fn finder(&self) -> PathFinder<'a, '_, M> {
        PathFinder::new(self.arena, self.tokens, self.model, &self.options)
    }

    /// The most specific node at `offset`, adjusted for closing tokens.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_path(&self, offset: u32) -> Result<TreePath<'a>, AnalysisError> {
        self.finder().resolve(offset)
    }

    /// Like [`Self::resolve_path`], but descends from `start` instead of the
    /// compilation unit.
    #[instrument(level = "debug", skip(self, start), fields(start = %start.leaf()))]
    pub fn resolve_path_from(
        &self,
        start: TreePath<'a>,
        offset: u32,
    ) -> Result<TreePath<'a>, AnalysisError> {
        self.finder().resolve_from(start, offset)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn resolve_scope(&self, offset: u32) -> Result<ResolvedScope<M::Scope>, AnalysisError> {
        scope::resolve_scope(&self.finder(), self.tokens, self.model, offset)
    }

    /// Span of the declared name of a class-like declaration, method,
    /// variable or member select.
    pub fn name_span(&self, node: NodeIndex) -> Option<TextSpan> {
        let path = self.arena.path_to(node)?;
        name_span::name_span(&path, self.tokens, self.model, &self.options)
    }

    /// Offsets of the parentheses around a method's parameter list.
    pub fn parameter_list_span(&self, node: NodeIndex) -> Option<(u32, u32)> {
        let method = self.arena.get(node)?;
        if method.kind() != NodeKind::Method {
            return None;
        }
        name_span::parameter_list_span(method, self.tokens)
    }

    pub fn jump_target(&self, path: &TreePath<'_>) -> Result<Option<NodeIndex>, AnalysisError> {
        jump_target::jump_target(path)
    }

    #[instrument(level = "debug", skip(self, path), fields(leaf = %path.leaf()))]
    pub fn uncaught_exceptions(&self, path: &TreePath<'_>) -> CheckedExceptionSet<M::Type> {
        crate::uncaught::UncaughtExceptions::new(self.model, &self.options).analyze(path)
    }

    /// Whether any node on `path` was inserted by the compiler: it has no
    /// source span, is a generated default constructor, or is the implicit
    /// `super()` call of a constructor.
    pub fn is_synthetic(&self, path: &TreePath<'_>) -> bool {
        path.ancestors().any(|p| {
            p.node().is_none_or(|n| {
                n.is_synthetic()
                    || n.flags.intersects(
                        NodeFlags::GENERATED_CONSTRUCTOR | NodeFlags::SYNTHETIC_SUPER_CALL,
                    )
            })
        })
    }

    /// Tokens covered by a node, empty for synthetic nodes.
    pub fn tokens_for(&self, node: NodeIndex) -> &'a [Token] {
        match self.arena.span(node) {
            Some(span) => self.tokens.tokens_in(span),
            None => &[],
        }
    }

    pub fn is_enum_constant(&self, node: NodeIndex) -> bool {
        self.arena.get(node).is_some_and(|n| {
            n.kind() == NodeKind::Variable && n.flags.contains(NodeFlags::ENUM_CONSTANT)
        })
    }

    /// Path to `node`, for callers holding a bare index.
    pub fn path_to(&self, node: NodeIndex) -> Result<TreePath<'a>, AnalysisError> {
        self.arena
            .path_to(node)
            .ok_or(AnalysisError::InvalidNode(node))
    }
}
