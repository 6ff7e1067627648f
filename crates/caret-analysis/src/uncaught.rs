//! Checked exceptions that can escape a subtree.
//!
//! The visitor threads an accumulator through the tree. Calls and `throw`
//! statements add types; `try` statements and method declarations analyze
//! their protected part into a fresh accumulator, subtract what their
//! handlers (catch clauses or `throws` clause) cover, and merge the rest.
//! Nested type declarations are analyzed on their own and contribute
//! nothing to the enclosing subtree.

use crate::exception_set::CheckedExceptionSet;
use crate::semantic::{SemanticModel, SymbolKind, TypeKind};
use caret_common::AnalysisOptions;
use caret_syntax::{NodeData, NodeIndex, TreePath};
use smallvec::SmallVec;
use tracing::{trace, warn};

pub struct UncaughtExceptions<'a, M: SemanticModel> {
    model: &'a M,
    options: &'a AnalysisOptions,
}

impl<'a, M: SemanticModel> UncaughtExceptions<'a, M> {
    pub fn new(model: &'a M, options: &'a AnalysisOptions) -> Self {
        Self { model, options }
    }

    /// Exceptions that can propagate out of the leaf of `path`.
    ///
    /// When the leaf is itself a type declaration its members are analyzed.
    pub fn analyze(&self, path: &TreePath<'_>) -> CheckedExceptionSet<M::Type> {
        let mut set = CheckedExceptionSet::new();
        if path.kind().is_some_and(|k| k.is_class()) {
            self.visit_children(path, &mut set, 1);
        } else {
            self.visit(path, &mut set, 0);
        }
        set
    }

    fn visit(&self, path: &TreePath<'_>, set: &mut CheckedExceptionSet<M::Type>, depth: u32) {
        let Some(node) = path.node() else {
            return;
        };
        if depth >= self.options.max_traversal_depth {
            warn!(
                depth,
                node = %path.leaf(),
                "exception analysis reached the traversal depth limit"
            );
            return;
        }

        match &node.data {
            NodeData::Class { .. } => {}
            NodeData::MethodInvocation { .. } => {
                self.visit_children(path, set, depth + 1);
                self.add_thrown_types(path, SymbolKind::Method, set);
            }
            NodeData::NewClass { .. } => {
                self.visit_children(path, set, depth + 1);
                self.add_thrown_types(path, SymbolKind::Constructor, set);
            }
            NodeData::Throw { expression } => {
                self.visit_children(path, set, depth + 1);
                self.add_thrown_expression(path, *expression, set);
            }
            NodeData::Try {
                resources,
                block,
                catches,
                finally_block,
            } => {
                let mut protected = CheckedExceptionSet::new();
                for &resource in resources {
                    self.visit_child(path, resource, &mut protected, depth + 1);
                }
                self.visit_child(path, *block, &mut protected, depth + 1);

                for handler in self.catch_types(path, catches) {
                    protected.remove_subtypes_of(&handler, self.model);
                }
                set.merge(protected, self.model);

                for &catch in catches {
                    self.visit_child(path, catch, set, depth + 1);
                }
                self.visit_child(path, *finally_block, set, depth + 1);
            }
            NodeData::Method { throws, body, .. } => {
                let mut thrown = CheckedExceptionSet::new();
                self.visit_child(path, *body, &mut thrown, depth + 1);

                for &declared in throws {
                    let Some(ty) = path.child(declared).and_then(|p| self.model.type_of(&p)) else {
                        continue;
                    };
                    if self.model.type_kind(&ty) != TypeKind::Error {
                        thrown.remove_subtypes_of(&ty, self.model);
                    }
                }
                set.merge(thrown, self.model);
            }
            _ => self.visit_children(path, set, depth + 1),
        }
    }

    fn visit_children(
        &self,
        path: &TreePath<'_>,
        set: &mut CheckedExceptionSet<M::Type>,
        depth: u32,
    ) {
        let Some(node) = path.node() else {
            return;
        };
        for child in node.data.children() {
            self.visit_child(path, child, set, depth);
        }
    }

    fn visit_child(
        &self,
        path: &TreePath<'_>,
        child: NodeIndex,
        set: &mut CheckedExceptionSet<M::Type>,
        depth: u32,
    ) {
        if let Some(child_path) = path.child(child) {
            self.visit(&child_path, set, depth);
        }
    }

    /// Declared thrown types of the method or constructor `path` invokes.
    fn add_thrown_types(
        &self,
        path: &TreePath<'_>,
        expected: SymbolKind,
        set: &mut CheckedExceptionSet<M::Type>,
    ) {
        let Some(symbol) = self.model.element_of(path) else {
            return;
        };
        if self.model.symbol_kind(&symbol) != expected {
            return;
        }
        let thrown = self.model.thrown_types(&symbol);
        trace!(call = %path.leaf(), count = thrown.len(), "call contributes thrown types");
        set.extend(thrown, self.model);
    }

    fn add_thrown_expression(
        &self,
        path: &TreePath<'_>,
        expression: NodeIndex,
        set: &mut CheckedExceptionSet<M::Type>,
    ) {
        let Some(ty) = path.child(expression).and_then(|p| self.model.type_of(&p)) else {
            return;
        };
        match self.model.type_kind(&ty) {
            TypeKind::Declared => {
                set.insert(ty, self.model);
            }
            TypeKind::Union => {
                let alternatives = self.model.alternatives_of(&ty);
                set.extend(alternatives, self.model);
            }
            TypeKind::Error | TypeKind::Other => {}
        }
    }

    /// Types caught by the catch clauses of a try statement. Union types are
    /// expanded and unresolved types dropped.
    fn catch_types(&self, path: &TreePath<'_>, catches: &[NodeIndex]) -> SmallVec<[M::Type; 4]> {
        let mut handlers = SmallVec::new();
        for &catch in catches {
            let Some(type_path) = path
                .child(catch)
                .and_then(|c| c.node().map(|n| (c, n)))
                .and_then(|(c, n)| match &n.data {
                    NodeData::Catch { parameter, .. } => c.child(*parameter),
                    _ => None,
                })
                .and_then(|p| match p.node().map(|n| &n.data) {
                    Some(NodeData::Variable { var_type, .. }) => p.child(*var_type),
                    _ => None,
                })
            else {
                continue;
            };
            let Some(ty) = self.model.type_of(&type_path) else {
                continue;
            };
            match self.model.type_kind(&ty) {
                TypeKind::Union => handlers.extend(
                    self.model
                        .alternatives_of(&ty)
                        .into_iter()
                        .filter(|alt| self.model.type_kind(alt) != TypeKind::Error),
                ),
                TypeKind::Error => {}
                TypeKind::Declared | TypeKind::Other => handlers.push(ty),
            }
        }
        handlers
    }
}
