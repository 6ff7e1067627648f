//! Incremental construction of a [`NodeArena`].
//!
//! Front ends (and test fixtures) push nodes bottom-up: children first,
//! then the parent that refers to them. `finish` validates the shape of the
//! tree and computes parent links in a single walk from the root.

use crate::base::NodeIndex;
use crate::node::{Node, NodeData, NodeFlags, NodeKind};
use crate::node_arena::NodeArena;
use caret_common::TextSpan;
use tracing::debug;

/// Why a set of nodes does not form a valid tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The root index does not name a node.
    MissingRoot(NodeIndex),
    /// The root is not a compilation unit.
    RootNotCompilationUnit { root: NodeIndex, kind: NodeKind },
    /// A node refers to a child index past the end of the arena.
    ChildOutOfRange { parent: NodeIndex, child: NodeIndex },
    /// A node is reachable twice from the root (shared subtree or cycle).
    SharedChild { parent: NodeIndex, child: NodeIndex },
    /// A break/continue target index past the end of the arena.
    JumpTargetOutOfRange { jump: NodeIndex, target: NodeIndex },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingRoot(root) => write!(f, "root {root} is not a node of the arena"),
            BuildError::RootNotCompilationUnit { root, kind } => {
                write!(f, "root {root} is a {kind:?}, expected a compilation unit")
            }
            BuildError::ChildOutOfRange { parent, child } => {
                write!(f, "node {parent} refers to missing child {child}")
            }
            BuildError::SharedChild { parent, child } => {
                write!(f, "node {child} is reached again through {parent}")
            }
            BuildError::JumpTargetOutOfRange { jump, target } => {
                write!(f, "jump {jump} targets missing node {target}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node whose preferred position is the start of its span.
    pub fn add(&mut self, data: NodeData, span: impl Into<TextSpan>) -> NodeIndex {
        let span = span.into();
        self.push(Node {
            data,
            span: Some(span),
            pos: span.start,
            flags: NodeFlags::empty(),
        })
    }

    /// Add a node with an explicit preferred position.
    pub fn add_at(&mut self, data: NodeData, span: impl Into<TextSpan>, pos: u32) -> NodeIndex {
        self.push(Node {
            data,
            span: Some(span.into()),
            pos,
            flags: NodeFlags::empty(),
        })
    }

    /// Add a node that has no source text.
    pub fn add_synthetic(&mut self, data: NodeData) -> NodeIndex {
        self.push(Node {
            data,
            span: None,
            pos: 0,
            flags: NodeFlags::empty(),
        })
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    pub fn set_flags(&mut self, idx: NodeIndex, flags: NodeFlags) {
        if let Some(node) = self.node_mut(idx) {
            node.flags |= flags;
        }
    }

    /// Record the statement a `break` or `continue` leaves. Ignored for
    /// other kinds of nodes.
    pub fn set_jump_target(&mut self, jump: NodeIndex, target: NodeIndex) {
        if let Some(node) = self.node_mut(jump) {
            match &mut node.data {
                NodeData::Break { target: slot, .. } | NodeData::Continue { target: slot, .. } => {
                    *slot = target;
                }
                _ => {}
            }
        }
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get_mut(idx.index())
    }

    /// Validate the tree rooted at `root` and freeze it into an arena.
    pub fn finish(self, root: NodeIndex) -> Result<NodeArena, BuildError> {
        let Some(root_node) = (!root.is_none())
            .then(|| self.nodes.get(root.index()))
            .flatten()
        else {
            return Err(BuildError::MissingRoot(root));
        };
        if root_node.kind() != NodeKind::CompilationUnit {
            return Err(BuildError::RootNotCompilationUnit {
                root,
                kind: root_node.kind(),
            });
        }

        let len = self.nodes.len();
        let mut parents = vec![NodeIndex::NONE; len];
        let mut visited = vec![false; len];
        visited[root.index()] = true;

        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            let node = &self.nodes[parent.index()];
            if let NodeData::Break { target, .. } | NodeData::Continue { target, .. } = &node.data
                && target.is_some()
                && target.index() >= len
            {
                return Err(BuildError::JumpTargetOutOfRange {
                    jump: parent,
                    target: *target,
                });
            }
            for child in node.data.children() {
                if child.index() >= len {
                    return Err(BuildError::ChildOutOfRange { parent, child });
                }
                if visited[child.index()] {
                    return Err(BuildError::SharedChild { parent, child });
                }
                visited[child.index()] = true;
                parents[child.index()] = parent;
                stack.push(child);
            }
        }

        let detached = visited.iter().filter(|v| !**v).count();
        if detached > 0 {
            debug!(detached, "tree has nodes not reachable from the root");
        }

        Ok(NodeArena {
            nodes: self.nodes,
            parents,
            root,
        })
    }
}
