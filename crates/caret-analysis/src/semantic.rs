//! Narrow interface to the front end's type checker.
//!
//! Queries never inspect types or symbols themselves. Everything they need
//! (scopes, the symbol a node refers to, static types, the subtype order)
//! is asked through these traits, so any checker that can answer them can
//! drive the queries.

use caret_syntax::TreePath;

/// Coarse classification of a type, as far as exception analysis cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A class or interface type.
    Declared,
    /// A multi-catch style union of alternatives.
    Union,
    /// A type the checker could not resolve.
    Error,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
    Method,
    Constructor,
    Field,
    LocalVariable,
    Parameter,
    Other,
}

impl SymbolKind {
    /// Class-like symbols: classes, interfaces, enums and annotation types.
    #[inline]
    pub const fn is_class(self) -> bool {
        matches!(
            self,
            SymbolKind::Class | SymbolKind::Interface | SymbolKind::Enum | SymbolKind::AnnotationType
        )
    }
}

/// The subtype partial order over checked exception types.
pub trait TypeRelation {
    type Type: Clone + PartialEq;

    /// Whether `sub` is a subtype of `sup`. Reflexive.
    fn is_subtype(&self, sub: &Self::Type, sup: &Self::Type) -> bool;

    fn type_kind(&self, ty: &Self::Type) -> TypeKind;

    /// Alternatives of a union type; empty for any other type.
    fn alternatives_of(&self, ty: &Self::Type) -> Vec<Self::Type>;
}

/// Symbol and type information for one compilation unit.
pub trait SemanticModel: TypeRelation {
    type Scope;
    type Symbol: Clone;

    /// The lexical scope visible at the leaf of `path`.
    fn scope_at(&self, path: &TreePath<'_>) -> Self::Scope;

    /// The symbol the leaf of `path` declares or refers to.
    fn element_of(&self, path: &TreePath<'_>) -> Option<Self::Symbol>;

    /// The static type of the leaf of `path`.
    fn type_of(&self, path: &TreePath<'_>) -> Option<Self::Type>;

    fn symbol_kind(&self, symbol: &Self::Symbol) -> SymbolKind;

    fn simple_name(&self, symbol: &Self::Symbol) -> String;

    fn enclosing_element(&self, symbol: &Self::Symbol) -> Option<Self::Symbol>;

    /// Declared thrown types of a method or constructor symbol.
    fn thrown_types(&self, symbol: &Self::Symbol) -> Vec<Self::Type>;
}
