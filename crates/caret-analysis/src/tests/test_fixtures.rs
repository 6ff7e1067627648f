//! Shared fixtures for the analysis tests.
//!
//! Trees are built by hand over a source string; spans are located by
//! searching the source so fixtures stay readable. The semantic model is a
//! small mock keyed by node index.

#![allow(dead_code)]

use crate::semantic::{SemanticModel, SymbolKind, TypeKind, TypeRelation};
use caret_common::TextSpan;
use caret_scanner::{TokenStream, tokenize};
use caret_syntax::{ClassKind, NodeArena, NodeData, NodeIndex, NodeList, TreeBuilder, TreePath};
use rustc_hash::FxHashMap;

/// Source text plus a tree builder.
pub struct Fixture {
    pub source: &'static str,
    pub b: TreeBuilder,
}

impl Fixture {
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            b: TreeBuilder::new(),
        }
    }

    /// Offset of the first occurrence of `needle` at or after `from`.
    pub fn find_from(&self, needle: &str, from: u32) -> u32 {
        let rest = &self.source[from as usize..];
        let found = rest
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found after offset {from}"));
        from + found as u32
    }

    pub fn find(&self, needle: &str) -> u32 {
        self.find_from(needle, 0)
    }

    /// Span of `needle` searched from `from`.
    pub fn span_from(&self, needle: &str, from: u32) -> TextSpan {
        TextSpan::at(self.find_from(needle, from), needle.len() as u32)
    }

    pub fn span(&self, needle: &str) -> TextSpan {
        self.span_from(needle, 0)
    }

    /// Span from the `{` at `open` through its matching `}`.
    pub fn braces(&self, open: u32) -> TextSpan {
        let bytes = self.source.as_bytes();
        assert_eq!(bytes[open as usize], b'{', "no brace at {open}");
        let mut depth = 0;
        for (i, &c) in bytes.iter().enumerate().skip(open as usize) {
            match c {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return TextSpan::new(open, i as u32 + 1);
                    }
                }
                _ => {}
            }
        }
        panic!("unbalanced brace at {open}");
    }

    /// Span of the block whose `{` is the first one at or after `from`.
    pub fn block_from(&self, from: u32) -> TextSpan {
        self.braces(self.find_from("{", from))
    }

    /// Span from `start` through the end of the first `end_needle` after it.
    pub fn through(&self, start: u32, end_needle: &str) -> TextSpan {
        let end = self.find_from(end_needle, start) + end_needle.len() as u32;
        TextSpan::new(start, end)
    }

    /// Span from `start` through the end of the next `{...}` block.
    pub fn through_block(&self, start: u32) -> TextSpan {
        TextSpan::new(start, self.block_from(start).end)
    }

    // ------------------------------------------------------------------
    // Node helpers
    // ------------------------------------------------------------------

    pub fn ident(&mut self, name: &str, span: TextSpan) -> NodeIndex {
        self.b.add(
            NodeData::Identifier {
                name: name.to_string(),
            },
            span,
        )
    }

    /// Identifier for the first occurrence of `name` at or after `from`.
    pub fn ident_from(&mut self, name: &str, from: u32) -> NodeIndex {
        let span = self.span_from(name, from);
        self.ident(name, span)
    }

    pub fn primitive(&mut self, name: &str, span: TextSpan) -> NodeIndex {
        self.b.add(
            NodeData::PrimitiveType {
                name: name.to_string(),
            },
            span,
        )
    }

    pub fn literal(&mut self, text: &str, from: u32) -> NodeIndex {
        let span = self.span_from(text, from);
        self.b.add(
            NodeData::Literal {
                text: text.to_string(),
            },
            span,
        )
    }

    pub fn block(&mut self, statements: &[NodeIndex], span: TextSpan) -> NodeIndex {
        self.b.add(
            NodeData::Block {
                statements: list(statements),
            },
            span,
        )
    }

    pub fn expr_stmt(&mut self, expression: NodeIndex, span: TextSpan) -> NodeIndex {
        self.b
            .add(NodeData::ExpressionStatement { expression }, span)
    }

    /// `name(args)` with a plain identifier as method select.
    pub fn call(&mut self, name: &str, from: u32, arguments: &[NodeIndex]) -> NodeIndex {
        let start = self.find_from(name, from);
        let select = self.ident(name, TextSpan::at(start, name.len() as u32));
        let span = self.through(start, ")");
        self.b.add(
            NodeData::MethodInvocation {
                method_select: select,
                arguments: list(arguments),
            },
            span,
        )
    }

    /// `name(...);` as a statement.
    pub fn call_stmt(&mut self, name: &str, from: u32) -> NodeIndex {
        let call = self.call(name, from, &[]);
        let start = self.find_from(name, from);
        let span = self.through(start, ";");
        self.expr_stmt(call, span)
    }

    pub fn variable(
        &mut self,
        name: &str,
        var_type: NodeIndex,
        initializer: NodeIndex,
        span: TextSpan,
        pos: u32,
    ) -> NodeIndex {
        self.b.add_at(
            NodeData::Variable {
                name: name.to_string(),
                var_type,
                initializer,
            },
            span,
            pos,
        )
    }

    pub fn method(
        &mut self,
        name: &str,
        return_type: NodeIndex,
        parameters: &[NodeIndex],
        throws: &[NodeIndex],
        body: NodeIndex,
        span: TextSpan,
        pos: u32,
    ) -> NodeIndex {
        self.b.add_at(
            NodeData::Method {
                name: name.to_string(),
                return_type,
                parameters: list(parameters),
                throws: list(throws),
                body,
            },
            span,
            pos,
        )
    }

    pub fn class(
        &mut self,
        kind: ClassKind,
        name: &str,
        extends: NodeIndex,
        implements: &[NodeIndex],
        members: &[NodeIndex],
        span: TextSpan,
    ) -> NodeIndex {
        self.b.add(
            NodeData::Class {
                kind,
                name: name.to_string(),
                type_parameters: NodeList::new(),
                extends,
                implements: list(implements),
                members: list(members),
            },
            span,
        )
    }

    /// Compilation unit spanning the whole source.
    pub fn unit(&mut self, type_decls: &[NodeIndex]) -> NodeIndex {
        let span = TextSpan::new(0, self.source.len() as u32);
        self.b.add(
            NodeData::CompilationUnit {
                package: NodeIndex::NONE,
                imports: NodeList::new(),
                type_decls: list(type_decls),
            },
            span,
        )
    }

    pub fn finish(self, root: NodeIndex) -> (NodeArena, TokenStream) {
        let arena = self.b.finish(root).expect("fixture tree is valid");
        (arena, tokenize(self.source))
    }
}

pub fn list(items: &[NodeIndex]) -> NodeList {
    items.iter().copied().collect()
}

// ----------------------------------------------------------------------
// Mock semantic model
// ----------------------------------------------------------------------

/// Types are names. `A|B` is a union, `<error>` is unresolved and names
/// starting with a lowercase letter are primitives.
pub type MockType = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockSymbol(pub u32);

#[derive(Debug, Clone)]
pub struct SymbolInfo {
    pub kind: SymbolKind,
    pub name: String,
    pub enclosing: Option<MockSymbol>,
    pub thrown: Vec<MockType>,
}

#[derive(Debug, Default)]
pub struct MockModel {
    supertypes: FxHashMap<String, Vec<String>>,
    symbols: Vec<SymbolInfo>,
    elements: FxHashMap<NodeIndex, MockSymbol>,
    types: FxHashMap<NodeIndex, MockType>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual exception hierarchy: `Exception` with `IOException` and
    /// `SQLException` below it and `FileNotFoundException` below
    /// `IOException`.
    pub fn with_exceptions() -> Self {
        let mut model = Self::new();
        model.subclass("Exception", "Throwable");
        model.subclass("IOException", "Exception");
        model.subclass("FileNotFoundException", "IOException");
        model.subclass("SQLException", "Exception");
        model.subclass("InterruptedException", "Exception");
        model
    }

    pub fn subclass(&mut self, sub: &str, sup: &str) {
        self.supertypes
            .entry(sub.to_string())
            .or_default()
            .push(sup.to_string());
    }

    pub fn symbol(
        &mut self,
        kind: SymbolKind,
        name: &str,
        enclosing: Option<MockSymbol>,
        thrown: &[&str],
    ) -> MockSymbol {
        let id = MockSymbol(self.symbols.len() as u32);
        self.symbols.push(SymbolInfo {
            kind,
            name: name.to_string(),
            enclosing,
            thrown: thrown.iter().map(|t| t.to_string()).collect(),
        });
        id
    }

    pub fn bind_element(&mut self, node: NodeIndex, symbol: MockSymbol) {
        self.elements.insert(node, symbol);
    }

    pub fn bind_type(&mut self, node: NodeIndex, ty: &str) {
        self.types.insert(node, ty.to_string());
    }

    fn info(&self, symbol: &MockSymbol) -> Option<&SymbolInfo> {
        self.symbols.get(symbol.0 as usize)
    }
}

impl TypeRelation for MockModel {
    type Type = MockType;

    fn is_subtype(&self, sub: &MockType, sup: &MockType) -> bool {
        let mut pending = vec![sub.as_str()];
        while let Some(ty) = pending.pop() {
            if ty == sup {
                return true;
            }
            if let Some(parents) = self.supertypes.get(ty) {
                pending.extend(parents.iter().map(String::as_str));
            }
        }
        false
    }

    fn type_kind(&self, ty: &MockType) -> TypeKind {
        if ty == "<error>" {
            TypeKind::Error
        } else if ty.contains('|') {
            TypeKind::Union
        } else if ty.starts_with(|c: char| c.is_ascii_lowercase()) {
            TypeKind::Other
        } else {
            TypeKind::Declared
        }
    }

    fn alternatives_of(&self, ty: &MockType) -> Vec<MockType> {
        if !ty.contains('|') {
            return Vec::new();
        }
        ty.split('|').map(|alt| alt.trim().to_string()).collect()
    }
}

impl SemanticModel for MockModel {
    /// The scope is identified by the node it was requested for.
    type Scope = NodeIndex;
    type Symbol = MockSymbol;

    fn scope_at(&self, path: &TreePath<'_>) -> NodeIndex {
        path.leaf()
    }

    fn element_of(&self, path: &TreePath<'_>) -> Option<MockSymbol> {
        self.elements.get(&path.leaf()).copied()
    }

    fn type_of(&self, path: &TreePath<'_>) -> Option<MockType> {
        self.types.get(&path.leaf()).cloned()
    }

    fn symbol_kind(&self, symbol: &MockSymbol) -> SymbolKind {
        self.info(symbol).map_or(SymbolKind::Other, |s| s.kind)
    }

    fn simple_name(&self, symbol: &MockSymbol) -> String {
        self.info(symbol).map(|s| s.name.clone()).unwrap_or_default()
    }

    fn enclosing_element(&self, symbol: &MockSymbol) -> Option<MockSymbol> {
        self.info(symbol).and_then(|s| s.enclosing)
    }

    fn thrown_types(&self, symbol: &MockSymbol) -> Vec<MockType> {
        self.info(symbol).map(|s| s.thrown.clone()).unwrap_or_default()
    }
}
