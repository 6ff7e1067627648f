//! Contiguous storage for the nodes of one compilation unit.

use crate::base::{NodeIndex, NodeList};
use crate::node::{Node, NodeKind};
use crate::path::TreePath;
use caret_common::TextSpan;

/// Arena holding every node of a compilation unit plus the parent link of
/// each node. Built by [`crate::TreeBuilder`]; read-only afterwards.
#[derive(Debug, Clone)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    /// Parent of each node, `NONE` for the root and for nodes not reachable
    /// from it.
    pub(crate) parents: Vec<NodeIndex>,
    pub(crate) root: NodeIndex,
}

impl NodeArena {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The compilation unit node.
    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.index())
    }

    #[inline]
    pub fn kind(&self, idx: NodeIndex) -> Option<NodeKind> {
        self.get(idx).map(Node::kind)
    }

    /// Source span of a node; `None` for synthetic nodes and invalid indices.
    #[inline]
    pub fn span(&self, idx: NodeIndex) -> Option<TextSpan> {
        self.get(idx).and_then(|n| n.span)
    }

    /// Parent of a node, `NONE` for the root.
    #[inline]
    pub fn parent(&self, idx: NodeIndex) -> NodeIndex {
        if idx.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(idx.index())
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Children of a node in source order.
    pub fn children(&self, idx: NodeIndex) -> NodeList {
        self.get(idx)
            .map(|node| node.data.children())
            .unwrap_or_default()
    }

    /// Whether the node hangs off the compilation unit.
    pub fn is_attached(&self, idx: NodeIndex) -> bool {
        idx == self.root || (self.get(idx).is_some() && self.parent(idx).is_some())
    }

    /// Span of the whole compilation unit.
    pub fn unit_span(&self) -> Option<TextSpan> {
        self.span(self.root)
    }

    /// Path from the compilation unit to `idx`, or `None` if `idx` is not a
    /// node of this tree.
    pub fn path_to(&self, idx: NodeIndex) -> Option<TreePath<'_>> {
        self.is_attached(idx).then(|| TreePath::new(self, idx))
    }

    /// Path consisting of the compilation unit alone.
    pub fn root_path(&self) -> TreePath<'_> {
        TreePath::new(self, self.root)
    }
}
