//! Tokens and the token sequence of a compilation unit.

use crate::cursor::TokenCursor;
use crate::syntax_kind::SyntaxKind;
use caret_common::TextSpan;
use serde::Serialize;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Byte offset of the first character.
    pub offset: u32,
    pub text: String,
}

impl Token {
    pub fn new(kind: SyntaxKind, offset: u32, text: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            text: text.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset one past the last character.
    #[inline]
    pub fn end(&self) -> u32 {
        self.offset + self.len()
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.offset, self.end())
    }
}

/// The token sequence covering one compilation unit, sorted by offset.
///
/// The stream is immutable once built. Navigation goes through
/// [`TokenCursor`]; each query creates its own cursor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Build a stream from tokens in source order.
    ///
    /// Tokens are expected to be contiguous and non-overlapping; they are
    /// sorted by offset defensively since the producer is external.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.is_sorted_by_key(|t| t.offset) {
            tokens.sort_by_key(|t| t.offset);
        }
        Self { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Offset one past the last token.
    pub fn end_offset(&self) -> u32 {
        self.tokens.last().map_or(0, Token::end)
    }

    /// A fresh cursor positioned before the first token.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(self)
    }

    /// Index of the token containing `offset`, or of the first token after
    /// it. Equals `len()` when `offset` is at or past the end.
    pub(crate) fn index_at(&self, offset: u32) -> usize {
        self.tokens.partition_point(|t| t.end() <= offset)
    }

    /// Tokens overlapping `span`, in order.
    pub fn tokens_in(&self, span: TextSpan) -> &[Token] {
        let start = self.index_at(span.start);
        let end = self.tokens.partition_point(|t| t.offset < span.end);
        if start >= end {
            return &[];
        }
        &self.tokens[start..end]
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
