//! Node kinds and per-kind node data.

use crate::base::{NodeIndex, NodeList};
use caret_common::TextSpan;
use serde::Serialize;

/// Fieldless mirror of [`NodeData`], used for dispatch and for the
/// kind tables of the query services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    CompilationUnit,
    Import,

    // Declarations
    Class,
    Interface,
    Enum,
    AnnotationType,
    Method,
    Variable,

    // Statements
    Block,
    EmptyStatement,
    ExpressionStatement,
    If,
    ForLoop,
    EnhancedForLoop,
    WhileLoop,
    DoWhileLoop,
    LabeledStatement,
    Switch,
    Case,
    Break,
    Continue,
    Return,
    Throw,
    Try,
    Catch,
    Synchronized,

    // Expressions
    Identifier,
    MemberSelect,
    MethodInvocation,
    NewClass,
    Parenthesized,
    TypeCast,
    Assignment,
    Conditional,
    GreaterThan,
    Binary,
    Unary,
    Literal,

    // Type references
    PrimitiveType,
    ArrayType,
    ParameterizedType,
    UnionType,

    /// Placeholder the parser produced for syntax it could not make sense of.
    Erroneous,
}

impl NodeKind {
    /// Class-like declarations: class, interface, enum, annotation type.
    #[inline]
    pub const fn is_class(self) -> bool {
        matches!(
            self,
            NodeKind::Class | NodeKind::Interface | NodeKind::Enum | NodeKind::AnnotationType
        )
    }

    #[inline]
    pub const fn is_loop(self) -> bool {
        matches!(
            self,
            NodeKind::ForLoop
                | NodeKind::EnhancedForLoop
                | NodeKind::WhileLoop
                | NodeKind::DoWhileLoop
        )
    }
}

/// Flavour of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    ConditionalAnd,
    ConditionalOr,
    And,
    Or,
    Xor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    InstanceOf,
}

bitflags::bitflags! {
    /// Per-node facts recorded by the front end.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        /// Default constructor the compiler generated for a class without one.
        const GENERATED_CONSTRUCTOR = 1 << 0;
        /// Variable declaring an enum constant.
        const ENUM_CONSTANT = 1 << 1;
        const STATIC = 1 << 2;
        const FINAL = 1 << 3;
        /// Compiler-inserted `super()` call at the start of a constructor.
        const SYNTHETIC_SUPER_CALL = 1 << 4;
    }
}

/// Per-kind payload of a node. Optional children use `NodeIndex::NONE`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    CompilationUnit {
        package: NodeIndex,
        imports: NodeList,
        type_decls: NodeList,
    },
    Import {
        qualified_name: NodeIndex,
        is_static: bool,
    },
    Class {
        kind: ClassKind,
        name: String,
        type_parameters: NodeList,
        extends: NodeIndex,
        implements: NodeList,
        members: NodeList,
    },
    Method {
        name: String,
        return_type: NodeIndex,
        parameters: NodeList,
        throws: NodeList,
        body: NodeIndex,
    },
    Variable {
        name: String,
        var_type: NodeIndex,
        initializer: NodeIndex,
    },
    Block {
        statements: NodeList,
    },
    EmptyStatement,
    ExpressionStatement {
        expression: NodeIndex,
    },
    If {
        condition: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    },
    ForLoop {
        initializer: NodeList,
        condition: NodeIndex,
        update: NodeList,
        body: NodeIndex,
    },
    EnhancedForLoop {
        variable: NodeIndex,
        expression: NodeIndex,
        body: NodeIndex,
    },
    WhileLoop {
        condition: NodeIndex,
        body: NodeIndex,
    },
    DoWhileLoop {
        body: NodeIndex,
        condition: NodeIndex,
    },
    LabeledStatement {
        label: String,
        body: NodeIndex,
    },
    Switch {
        selector: NodeIndex,
        cases: NodeList,
    },
    Case {
        labels: NodeList,
        statements: NodeList,
    },
    /// `target` is filled in by the front end's resolution phase.
    Break {
        label: Option<String>,
        target: NodeIndex,
    },
    Continue {
        label: Option<String>,
        target: NodeIndex,
    },
    Return {
        expression: NodeIndex,
    },
    Throw {
        expression: NodeIndex,
    },
    Try {
        resources: NodeList,
        block: NodeIndex,
        catches: NodeList,
        finally_block: NodeIndex,
    },
    Catch {
        parameter: NodeIndex,
        block: NodeIndex,
    },
    Synchronized {
        lock: NodeIndex,
        block: NodeIndex,
    },
    Identifier {
        name: String,
    },
    MemberSelect {
        expression: NodeIndex,
        name: String,
    },
    MethodInvocation {
        method_select: NodeIndex,
        arguments: NodeList,
    },
    NewClass {
        class_name: NodeIndex,
        arguments: NodeList,
        /// Anonymous class body, a class-like node.
        body: NodeIndex,
    },
    Parenthesized {
        expression: NodeIndex,
    },
    TypeCast {
        cast_type: NodeIndex,
        expression: NodeIndex,
    },
    Assignment {
        target: NodeIndex,
        value: NodeIndex,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    Binary {
        operator: BinaryOperator,
        left: NodeIndex,
        right: NodeIndex,
    },
    Unary {
        operand: NodeIndex,
    },
    Literal {
        text: String,
    },
    PrimitiveType {
        name: String,
    },
    ArrayType {
        element_type: NodeIndex,
    },
    ParameterizedType {
        base_type: NodeIndex,
        type_arguments: NodeList,
    },
    UnionType {
        alternatives: NodeList,
    },
    Erroneous {
        children: NodeList,
    },
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::CompilationUnit { .. } => NodeKind::CompilationUnit,
            NodeData::Import { .. } => NodeKind::Import,
            NodeData::Class { kind, .. } => match kind {
                ClassKind::Class => NodeKind::Class,
                ClassKind::Interface => NodeKind::Interface,
                ClassKind::Enum => NodeKind::Enum,
                ClassKind::AnnotationType => NodeKind::AnnotationType,
            },
            NodeData::Method { .. } => NodeKind::Method,
            NodeData::Variable { .. } => NodeKind::Variable,
            NodeData::Block { .. } => NodeKind::Block,
            NodeData::EmptyStatement => NodeKind::EmptyStatement,
            NodeData::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            NodeData::If { .. } => NodeKind::If,
            NodeData::ForLoop { .. } => NodeKind::ForLoop,
            NodeData::EnhancedForLoop { .. } => NodeKind::EnhancedForLoop,
            NodeData::WhileLoop { .. } => NodeKind::WhileLoop,
            NodeData::DoWhileLoop { .. } => NodeKind::DoWhileLoop,
            NodeData::LabeledStatement { .. } => NodeKind::LabeledStatement,
            NodeData::Switch { .. } => NodeKind::Switch,
            NodeData::Case { .. } => NodeKind::Case,
            NodeData::Break { .. } => NodeKind::Break,
            NodeData::Continue { .. } => NodeKind::Continue,
            NodeData::Return { .. } => NodeKind::Return,
            NodeData::Throw { .. } => NodeKind::Throw,
            NodeData::Try { .. } => NodeKind::Try,
            NodeData::Catch { .. } => NodeKind::Catch,
            NodeData::Synchronized { .. } => NodeKind::Synchronized,
            NodeData::Identifier { .. } => NodeKind::Identifier,
            NodeData::MemberSelect { .. } => NodeKind::MemberSelect,
            NodeData::MethodInvocation { .. } => NodeKind::MethodInvocation,
            NodeData::NewClass { .. } => NodeKind::NewClass,
            NodeData::Parenthesized { .. } => NodeKind::Parenthesized,
            NodeData::TypeCast { .. } => NodeKind::TypeCast,
            NodeData::Assignment { .. } => NodeKind::Assignment,
            NodeData::Conditional { .. } => NodeKind::Conditional,
            NodeData::Binary {
                operator: BinaryOperator::GreaterThan,
                ..
            } => NodeKind::GreaterThan,
            NodeData::Binary { .. } => NodeKind::Binary,
            NodeData::Unary { .. } => NodeKind::Unary,
            NodeData::Literal { .. } => NodeKind::Literal,
            NodeData::PrimitiveType { .. } => NodeKind::PrimitiveType,
            NodeData::ArrayType { .. } => NodeKind::ArrayType,
            NodeData::ParameterizedType { .. } => NodeKind::ParameterizedType,
            NodeData::UnionType { .. } => NodeKind::UnionType,
            NodeData::Erroneous { .. } => NodeKind::Erroneous,
        }
    }

    /// Children in source order. Absent optional children are skipped.
    pub fn children(&self) -> NodeList {
        let mut children = NodeList::new();

        // Helper to add optional NodeIndex (ignoring NONE)
        let add_opt = |children: &mut NodeList, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };
        let add_list = |children: &mut NodeList, list: &NodeList| {
            children.extend(list.iter().copied().filter(|idx| idx.is_some()));
        };

        match self {
            NodeData::CompilationUnit {
                package,
                imports,
                type_decls,
            } => {
                add_opt(&mut children, *package);
                add_list(&mut children, imports);
                add_list(&mut children, type_decls);
            }
            NodeData::Import { qualified_name, .. } => {
                add_opt(&mut children, *qualified_name);
            }
            NodeData::Class {
                type_parameters,
                extends,
                implements,
                members,
                ..
            } => {
                add_list(&mut children, type_parameters);
                add_opt(&mut children, *extends);
                add_list(&mut children, implements);
                add_list(&mut children, members);
            }
            NodeData::Method {
                return_type,
                parameters,
                throws,
                body,
                ..
            } => {
                add_opt(&mut children, *return_type);
                add_list(&mut children, parameters);
                add_list(&mut children, throws);
                add_opt(&mut children, *body);
            }
            NodeData::Variable {
                var_type,
                initializer,
                ..
            } => {
                add_opt(&mut children, *var_type);
                add_opt(&mut children, *initializer);
            }
            NodeData::Block { statements } => {
                add_list(&mut children, statements);
            }
            NodeData::ExpressionStatement { expression }
            | NodeData::Return { expression }
            | NodeData::Throw { expression }
            | NodeData::Parenthesized { expression } => {
                add_opt(&mut children, *expression);
            }
            NodeData::If {
                condition,
                then_statement,
                else_statement,
            } => {
                add_opt(&mut children, *condition);
                add_opt(&mut children, *then_statement);
                add_opt(&mut children, *else_statement);
            }
            NodeData::ForLoop {
                initializer,
                condition,
                update,
                body,
            } => {
                add_list(&mut children, initializer);
                add_opt(&mut children, *condition);
                add_list(&mut children, update);
                add_opt(&mut children, *body);
            }
            NodeData::EnhancedForLoop {
                variable,
                expression,
                body,
            } => {
                add_opt(&mut children, *variable);
                add_opt(&mut children, *expression);
                add_opt(&mut children, *body);
            }
            NodeData::WhileLoop { condition, body } => {
                add_opt(&mut children, *condition);
                add_opt(&mut children, *body);
            }
            NodeData::DoWhileLoop { body, condition } => {
                add_opt(&mut children, *body);
                add_opt(&mut children, *condition);
            }
            NodeData::LabeledStatement { body, .. } => {
                add_opt(&mut children, *body);
            }
            NodeData::Switch { selector, cases } => {
                add_opt(&mut children, *selector);
                add_list(&mut children, cases);
            }
            NodeData::Case { labels, statements } => {
                add_list(&mut children, labels);
                add_list(&mut children, statements);
            }
            NodeData::Try {
                resources,
                block,
                catches,
                finally_block,
            } => {
                add_list(&mut children, resources);
                add_opt(&mut children, *block);
                add_list(&mut children, catches);
                add_opt(&mut children, *finally_block);
            }
            NodeData::Catch { parameter, block } => {
                add_opt(&mut children, *parameter);
                add_opt(&mut children, *block);
            }
            NodeData::Synchronized { lock, block } => {
                add_opt(&mut children, *lock);
                add_opt(&mut children, *block);
            }
            NodeData::MemberSelect { expression, .. } => {
                add_opt(&mut children, *expression);
            }
            NodeData::MethodInvocation {
                method_select,
                arguments,
            } => {
                add_opt(&mut children, *method_select);
                add_list(&mut children, arguments);
            }
            NodeData::NewClass {
                class_name,
                arguments,
                body,
            } => {
                add_opt(&mut children, *class_name);
                add_list(&mut children, arguments);
                add_opt(&mut children, *body);
            }
            NodeData::TypeCast {
                cast_type,
                expression,
            } => {
                add_opt(&mut children, *cast_type);
                add_opt(&mut children, *expression);
            }
            NodeData::Assignment { target, value } => {
                add_opt(&mut children, *target);
                add_opt(&mut children, *value);
            }
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                add_opt(&mut children, *condition);
                add_opt(&mut children, *when_true);
                add_opt(&mut children, *when_false);
            }
            NodeData::Binary { left, right, .. } => {
                add_opt(&mut children, *left);
                add_opt(&mut children, *right);
            }
            NodeData::Unary { operand } => {
                add_opt(&mut children, *operand);
            }
            NodeData::ArrayType { element_type } => {
                add_opt(&mut children, *element_type);
            }
            NodeData::ParameterizedType {
                base_type,
                type_arguments,
            } => {
                add_opt(&mut children, *base_type);
                add_list(&mut children, type_arguments);
            }
            NodeData::UnionType { alternatives } => {
                add_list(&mut children, alternatives);
            }
            NodeData::Erroneous { children: inner } => {
                add_list(&mut children, inner);
            }
            NodeData::EmptyStatement
            | NodeData::Break { .. }
            | NodeData::Continue { .. }
            | NodeData::Identifier { .. }
            | NodeData::Literal { .. }
            | NodeData::PrimitiveType { .. } => {}
        }

        children
    }

    /// Declared name of a class, method or variable, or the selected name of
    /// a member select.
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeData::Class { name, .. }
            | NodeData::Method { name, .. }
            | NodeData::Variable { name, .. }
            | NodeData::MemberSelect { name, .. }
            | NodeData::Identifier { name } => Some(name),
            _ => None,
        }
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub data: NodeData,
    /// Source range from the position oracle; `None` for synthetic nodes.
    pub span: Option<TextSpan>,
    /// Preferred position: where token searches for this node start (the
    /// name of a method or variable, the `class` keyword of a type, the `.`
    /// of a member select). Defaults to the span start.
    pub pos: u32,
    pub flags: NodeFlags,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    /// Nodes without source text, inserted by the compiler.
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.span.is_none()
    }

    #[inline]
    pub fn start(&self) -> Option<u32> {
        self.span.map(|s| s.start)
    }

    #[inline]
    pub fn end(&self) -> Option<u32> {
        self.span.map(|s| s.end)
    }
}
