//! Trees here are synthetic: exception analysis only looks at structure and
//! at what the model reports, never at spans.

use crate::exception_set::CheckedExceptionSet;
use crate::semantic::SymbolKind;
use crate::test_fixtures::{MockModel, MockType, list};
use crate::uncaught::UncaughtExceptions;
use caret_common::AnalysisOptions;
use caret_syntax::{ClassKind, NodeArena, NodeData, NodeIndex, TreeBuilder};

struct Tree {
    b: TreeBuilder,
    model: MockModel,
}

impl Tree {
    fn new() -> Self {
        Self {
            b: TreeBuilder::new(),
            model: MockModel::with_exceptions(),
        }
    }

    fn ident(&mut self, name: &str) -> NodeIndex {
        self.b.add_synthetic(NodeData::Identifier { name: name.into() })
    }

    /// Expression whose type is `ty`.
    fn typed(&mut self, name: &str, ty: &str) -> NodeIndex {
        let node = self.ident(name);
        self.model.bind_type(node, ty);
        node
    }

    /// Call of a method declared to throw `thrown`.
    fn call(&mut self, thrown: &[&str]) -> NodeIndex {
        let select = self.ident("op");
        let call = self.b.add_synthetic(NodeData::MethodInvocation {
            method_select: select,
            arguments: list(&[]),
        });
        let symbol = self.model.symbol(SymbolKind::Method, "op", None, thrown);
        self.model.bind_element(call, symbol);
        self.stmt(call)
    }

    fn new_class(&mut self, thrown: &[&str]) -> NodeIndex {
        let class_name = self.ident("Resource");
        let new = self.b.add_synthetic(NodeData::NewClass {
            class_name,
            arguments: list(&[]),
            body: NodeIndex::NONE,
        });
        let symbol = self.model.symbol(SymbolKind::Constructor, "<init>", None, thrown);
        self.model.bind_element(new, symbol);
        new
    }

    fn throw(&mut self, ty: &str) -> NodeIndex {
        let expression = self.typed("ex", ty);
        self.b.add_synthetic(NodeData::Throw { expression })
    }

    fn stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        self.b
            .add_synthetic(NodeData::ExpressionStatement { expression })
    }

    fn block(&mut self, statements: &[NodeIndex]) -> NodeIndex {
        self.b.add_synthetic(NodeData::Block {
            statements: list(statements),
        })
    }

    fn catch(&mut self, ty: &str, statements: &[NodeIndex]) -> NodeIndex {
        let var_type = self.typed("T", ty);
        let parameter = self.b.add_synthetic(NodeData::Variable {
            name: "e".into(),
            var_type,
            initializer: NodeIndex::NONE,
        });
        let block = self.block(statements);
        self.b.add_synthetic(NodeData::Catch { parameter, block })
    }

    fn try_stmt(
        &mut self,
        resources: &[NodeIndex],
        statements: &[NodeIndex],
        catches: &[NodeIndex],
        finally: Option<&[NodeIndex]>,
    ) -> NodeIndex {
        let block = self.block(statements);
        let finally_block = match finally {
            Some(statements) => self.block(statements),
            None => NodeIndex::NONE,
        };
        self.b.add_synthetic(NodeData::Try {
            resources: list(resources),
            block,
            catches: list(catches),
            finally_block,
        })
    }

    fn method(&mut self, throws: &[&str], statements: &[NodeIndex]) -> NodeIndex {
        let throws: Vec<_> = throws.iter().map(|ty| self.typed(ty, ty)).collect();
        let body = self.block(statements);
        self.b.add_synthetic(NodeData::Method {
            name: "m".into(),
            return_type: NodeIndex::NONE,
            parameters: list(&[]),
            throws: list(&throws),
            body,
        })
    }

    fn class(&mut self, members: &[NodeIndex]) -> NodeIndex {
        self.b.add_synthetic(NodeData::Class {
            kind: ClassKind::Class,
            name: "C".into(),
            type_parameters: list(&[]),
            extends: NodeIndex::NONE,
            implements: list(&[]),
            members: list(members),
        })
    }

    /// Wrap `decl` in a compilation unit, analyze `target` and return the
    /// escaping types sorted by name.
    fn analyze(self, decl: NodeIndex, target: NodeIndex) -> Vec<MockType> {
        self.analyze_with(decl, target, &AnalysisOptions::default())
    }

    fn analyze_with(
        mut self,
        decl: NodeIndex,
        target: NodeIndex,
        options: &AnalysisOptions,
    ) -> Vec<MockType> {
        let unit = self.b.add_synthetic(NodeData::CompilationUnit {
            package: NodeIndex::NONE,
            imports: list(&[]),
            type_decls: list(&[decl]),
        });
        let arena: NodeArena = self.b.finish(unit).expect("valid tree");
        let path = arena.path_to(target).expect("attached target");
        let set = UncaughtExceptions::new(&self.model, options).analyze(&path);
        sorted(set)
    }
}

fn sorted(set: CheckedExceptionSet<MockType>) -> Vec<MockType> {
    let mut types: Vec<_> = set.into_iter().collect();
    types.sort();
    types
}

/// `class C { void m() { <statements> } }` analyzed at the method body.
fn body_of(mut t: Tree, statements: &[NodeIndex]) -> Vec<MockType> {
    let method = t.method(&[], statements);
    let class = t.class(&[method]);
    let body = t.b.node_mut(method).and_then(|n| match &n.data {
        NodeData::Method { body, .. } => Some(*body),
        _ => None,
    });
    let body = body.expect("method body");
    t.analyze(class, body)
}

#[test]
fn test_calls_contribute_minimized_thrown_types() {
    let mut t = Tree::new();
    let a = t.call(&["FileNotFoundException"]);
    let b = t.call(&["IOException", "SQLException"]);
    assert_eq!(body_of(t, &[a, b]), ["IOException", "SQLException"]);
}

#[test]
fn test_catch_subtracts_handled_types() {
    let mut t = Tree::new();
    let io = t.call(&["IOException"]);
    let sql = t.call(&["SQLException"]);
    let handler = t.catch("IOException", &[]);
    let try_stmt = t.try_stmt(&[], &[io, sql], &[handler], None);
    assert_eq!(body_of(t, &[try_stmt]), ["SQLException"]);
}

#[test]
fn test_catch_of_supertype_handles_everything() {
    let mut t = Tree::new();
    let io = t.call(&["FileNotFoundException", "SQLException"]);
    let handler = t.catch("Exception", &[]);
    let try_stmt = t.try_stmt(&[], &[io], &[handler], None);
    assert!(body_of(t, &[try_stmt]).is_empty());
}

#[test]
fn test_catch_and_finally_blocks_are_not_protected() {
    let mut t = Tree::new();
    let io = t.call(&["IOException"]);
    let rethrow = t.throw("SQLException");
    let handler = t.catch("Exception", &[rethrow]);
    let cleanup = t.call(&["InterruptedException"]);
    let try_stmt = t.try_stmt(&[], &[io], &[handler], Some(&[cleanup]));
    assert_eq!(
        body_of(t, &[try_stmt]),
        ["InterruptedException", "SQLException"]
    );
}

#[test]
fn test_resources_are_protected() {
    let mut t = Tree::new();
    let open = t.new_class(&["IOException"]);
    let handler = t.catch("IOException", &[]);
    let try_stmt = t.try_stmt(&[open], &[], &[handler], None);
    assert!(body_of(t, &[try_stmt]).is_empty());

    let mut t = Tree::new();
    let open = t.new_class(&["IOException"]);
    let try_stmt = t.try_stmt(&[open], &[], &[], Some(&[]));
    assert_eq!(body_of(t, &[try_stmt]), ["IOException"]);
}

#[test]
fn test_method_throws_clause_subtracts() {
    let mut t = Tree::new();
    let a = t.call(&["FileNotFoundException"]);
    let b = t.call(&["SQLException"]);
    let method = t.method(&["IOException"], &[a, b]);
    let class = t.class(&[method]);
    assert_eq!(t.analyze(class, method), ["SQLException"]);
}

#[test]
fn test_union_throw_and_union_catch() {
    let mut t = Tree::new();
    let thrown = t.throw("IOException|SQLException");
    assert_eq!(body_of(t, &[thrown]), ["IOException", "SQLException"]);

    let mut t = Tree::new();
    let calls = t.call(&["IOException", "SQLException", "InterruptedException"]);
    let handler = t.catch("IOException|SQLException", &[]);
    let try_stmt = t.try_stmt(&[], &[calls], &[handler], None);
    assert_eq!(body_of(t, &[try_stmt]), ["InterruptedException"]);
}

#[test]
fn test_unresolved_types_are_ignored() {
    let mut t = Tree::new();
    let bad_throw = t.throw("<error>");
    let primitive = t.throw("int");
    let io = t.call(&["IOException"]);
    let bad_handler = t.catch("<error>", &[]);
    let try_stmt = t.try_stmt(&[], &[io], &[bad_handler], None);
    assert_eq!(
        body_of(t, &[bad_throw, primitive, try_stmt]),
        ["IOException"]
    );

    let mut t = Tree::new();
    let io = t.call(&["IOException"]);
    let method = t.method(&["<error>"], &[io]);
    let class = t.class(&[method]);
    assert_eq!(t.analyze(class, method), ["IOException"]);
}

#[test]
fn test_call_bound_to_wrong_symbol_kind_is_ignored() {
    let mut t = Tree::new();
    let select = t.ident("op");
    let call = t.b.add_synthetic(NodeData::MethodInvocation {
        method_select: select,
        arguments: list(&[]),
    });
    let ctor = t
        .model
        .symbol(SymbolKind::Constructor, "<init>", None, &["IOException"]);
    t.model.bind_element(call, ctor);
    let stmt = t.stmt(call);
    assert!(body_of(t, &[stmt]).is_empty());
}

#[test]
fn test_nested_class_contributes_nothing() {
    let mut t = Tree::new();
    let inner_call = t.call(&["IOException"]);
    let inner_method = t.method(&[], &[inner_call]);
    let local_class = t.class(&[inner_method]);
    let sql = t.call(&["SQLException"]);
    assert_eq!(body_of(t, &[local_class, sql]), ["SQLException"]);
}

#[test]
fn test_class_root_analyzes_its_members() {
    let mut t = Tree::new();
    let io = t.call(&["IOException"]);
    let method = t.method(&[], &[io]);
    let class = t.class(&[method]);
    assert_eq!(t.analyze(class, class), ["IOException"]);
}

#[test]
fn test_depth_limit_stops_descent() {
    let mut t = Tree::new();
    let io = t.call(&["IOException"]);
    let method = t.method(&[], &[io]);
    let class = t.class(&[method]);
    // method (0) -> body (1) -> statement (2) -> call (3)
    let options = AnalysisOptions::default().with_max_traversal_depth(3);
    assert!(t.analyze_with(class, method, &options).is_empty());
}
