//! Locating declared names and parameter lists in the token stream.
//!
//! Node spans cover whole declarations. Editor features such as rename or
//! highlight need the exact token of the name, so we scan forward from the
//! node's preferred position, skipping the tokens that may legally sit
//! between it and the name.

use crate::semantic::SemanticModel;
use caret_common::{AnalysisOptions, TextSpan};
use caret_scanner::{SyntaxKind, TokenStream, is_identifier};
use caret_syntax::{Node, NodeData, NodeFlags, NodeKind, TreePath};
use tracing::trace;

const TRIVIA: &[SyntaxKind] = &[
    SyntaxKind::Whitespace,
    SyntaxKind::LineComment,
    SyntaxKind::BlockComment,
    SyntaxKind::DocComment,
];

const CLASS_NAME_SKIP: &[SyntaxKind] = &[
    SyntaxKind::ClassKeyword,
    SyntaxKind::InterfaceKeyword,
    SyntaxKind::EnumKeyword,
    SyntaxKind::At,
    SyntaxKind::Whitespace,
    SyntaxKind::LineComment,
    SyntaxKind::BlockComment,
    SyntaxKind::DocComment,
];

const MEMBER_SELECT_SKIP: &[SyntaxKind] = &[
    SyntaxKind::Dot,
    SyntaxKind::Whitespace,
    SyntaxKind::LineComment,
    SyntaxKind::BlockComment,
    SyntaxKind::DocComment,
];

/// Tokens that may precede the name of a declaration of `kind`, or `None`
/// if nodes of that kind have no locatable name.
pub fn skipped_before_name(kind: NodeKind) -> Option<&'static [SyntaxKind]> {
    match kind {
        k if k.is_class() => Some(CLASS_NAME_SKIP),
        NodeKind::Method | NodeKind::Variable => Some(TRIVIA),
        NodeKind::MemberSelect => Some(MEMBER_SELECT_SKIP),
        _ => None,
    }
}

/// Scan forward from the node's preferred position over `skipped` tokens;
/// the first other token must be an identifier spelled `expected`.
pub fn find_name_span(
    tokens: &TokenStream,
    node: &Node,
    expected: &str,
    skipped: &[SyntaxKind],
) -> Option<TextSpan> {
    if node.is_synthetic() || !is_identifier(expected) {
        return None;
    }

    let mut cursor = tokens.cursor();
    cursor.move_to(node.pos);
    while cursor.move_next() {
        let token = cursor.token()?;
        if skipped.contains(&token.kind) {
            continue;
        }
        if token.kind == SyntaxKind::Identifier && token.text == expected {
            return Some(token.span());
        }
        trace!(found = ?token.kind, offset = token.offset, expected, "name token mismatch");
        return None;
    }
    None
}

/// Span of the name token of a class-like declaration, method, variable or
/// member select.
///
/// Constructors are stored under the configured marker name; their name is
/// the simple name of the class that declares them.
pub fn name_span<M: SemanticModel>(
    path: &TreePath<'_>,
    tokens: &TokenStream,
    model: &M,
    options: &AnalysisOptions,
) -> Option<TextSpan> {
    let node = path.node()?;
    let skipped = skipped_before_name(node.kind())?;

    if node.is_synthetic() || node.flags.contains(NodeFlags::GENERATED_CONSTRUCTOR) {
        return None;
    }

    let declared = node.data.name()?;
    let expected = match &node.data {
        NodeData::Method { name, .. } if options.is_constructor_name(name) => {
            constructor_class_name(path, model)?
        }
        _ => declared.to_string(),
    };

    find_name_span(tokens, node, &expected, skipped)
}

fn constructor_class_name<M: SemanticModel>(path: &TreePath<'_>, model: &M) -> Option<String> {
    let symbol = model.element_of(path)?;
    let class = model.enclosing_element(&symbol)?;
    model
        .symbol_kind(&class)
        .is_class()
        .then(|| model.simple_name(&class))
}

/// Offsets of the `(` and `)` tokens delimiting the parameter list of a
/// method, scanning forward from its preferred position.
///
/// Gives up when a `{` shows up before the list is closed, which happens
/// for declarations the parser only partially recovered.
pub fn parameter_list_span(node: &Node, tokens: &TokenStream) -> Option<(u32, u32)> {
    if node.is_synthetic() {
        return None;
    }

    let mut cursor = tokens.cursor();
    cursor.move_to(node.pos);

    let mut open = None;
    let mut depth = 0u32;
    while cursor.move_next() {
        let token = cursor.token()?;
        match token.kind {
            SyntaxKind::OpenParen => {
                if open.is_none() {
                    open = Some(token.offset);
                }
                depth += 1;
            }
            SyntaxKind::CloseParen => {
                let start = open?;
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some((start, token.offset));
                }
            }
            SyntaxKind::OpenBrace => return None,
            _ => {}
        }
    }
    None
}
