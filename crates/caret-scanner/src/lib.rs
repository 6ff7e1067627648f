//! Token layer for the caret tree query services.
//!
//! This crate provides the lexical view of a compilation unit:
//! - `SyntaxKind` - Token types
//! - `Token` / `TokenStream` - The token sequence covering the unit's text
//! - `TokenCursor` - Read-only forward/backward navigation by offset
//! - `tokenize` - A small tokenizer for fixtures (`fixtures` feature)
//! - `is_identifier` - Identifier validity check for declared names

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod token;
pub use token::{Token, TokenStream};

pub mod cursor;
pub use cursor::TokenCursor;

pub mod identifier;
pub use identifier::{is_identifier, is_identifier_part, is_identifier_start};

#[cfg(any(test, feature = "fixtures"))]
pub mod lexer;
#[cfg(any(test, feature = "fixtures"))]
pub use lexer::tokenize;

#[cfg(test)]
#[path = "tests/cursor_tests.rs"]
mod cursor_tests;

#[cfg(test)]
#[path = "tests/lexer_tests.rs"]
mod lexer_tests;

#[cfg(test)]
#[path = "tests/identifier_tests.rs"]
mod identifier_tests;
