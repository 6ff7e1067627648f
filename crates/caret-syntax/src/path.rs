//! Tree paths: a node together with its chain of ancestors.

use crate::base::NodeIndex;
use crate::node::{Node, NodeKind};
use crate::node_arena::NodeArena;
use caret_common::TextSpan;
use caret_common::limits::MAX_ANCESTOR_WALK;

/// A node of a tree plus its ancestors up to the compilation unit.
///
/// The ancestor chain is the arena's parent links, so a path is two words
/// and parent paths share their chain with the child path.
#[derive(Clone, Copy)]
pub struct TreePath<'a> {
    arena: &'a NodeArena,
    leaf: NodeIndex,
}

impl<'a> TreePath<'a> {
    pub(crate) fn new(arena: &'a NodeArena, leaf: NodeIndex) -> Self {
        Self { arena, leaf }
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    #[inline]
    pub fn leaf(&self) -> NodeIndex {
        self.leaf
    }

    pub fn node(&self) -> Option<&'a Node> {
        self.arena.get(self.leaf)
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.arena.kind(self.leaf)
    }

    pub fn span(&self) -> Option<TextSpan> {
        self.arena.span(self.leaf)
    }

    /// Path to the parent of the leaf, `None` at the compilation unit.
    pub fn parent_path(&self) -> Option<TreePath<'a>> {
        let parent = self.arena.parent(self.leaf);
        parent.is_some().then(|| TreePath::new(self.arena, parent))
    }

    /// Extend the path by one of the leaf's children.
    pub fn child(&self, child: NodeIndex) -> Option<TreePath<'a>> {
        (child.is_some() && self.arena.parent(child) == self.leaf)
            .then(|| TreePath::new(self.arena, child))
    }

    /// Path to another node of the same tree.
    pub fn path_to(&self, idx: NodeIndex) -> Option<TreePath<'a>> {
        self.arena.path_to(idx)
    }

    pub fn compilation_unit(&self) -> TreePath<'a> {
        self.arena.root_path()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.leaf == self.arena.root()
    }

    /// The leaf followed by its ancestors, innermost first.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            arena: self.arena,
            next: self.leaf,
            remaining: MAX_ANCESTOR_WALK,
        }
    }

    /// Whether `idx` is the leaf or one of its ancestors.
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.ancestors().any(|p| p.leaf == idx)
    }

    /// Number of nodes on the path.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}

impl PartialEq for TreePath<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.leaf == other.leaf
    }
}

impl Eq for TreePath<'_> {}

impl std::fmt::Debug for TreePath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<_> = self
            .ancestors()
            .map(|p| (p.leaf, p.kind()))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        f.debug_struct("TreePath")
            .field("leaf", &self.leaf)
            .field("path", &kinds)
            .finish()
    }
}

/// Iterator over a path and its parent paths.
#[derive(Clone)]
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: NodeIndex,
    remaining: u32,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = TreePath<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = TreePath::new(self.arena, self.next);
        self.next = self.arena.parent(self.next);
        Some(current)
    }
}
