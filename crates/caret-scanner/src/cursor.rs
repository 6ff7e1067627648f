//! Positional, read-only navigation over a [`TokenStream`].

use crate::syntax_kind::SyntaxKind;
use crate::token::{Token, TokenStream};

/// A cursor over the tokens of one compilation unit.
///
/// The cursor is either *between* two tokens (right after `move_to` or
/// `move_end`) or *on* a token (after a successful `move_next` /
/// `move_previous`). `move_to(offset)` puts it right before the token
/// containing `offset`, so `move_next` lands on that token and
/// `move_previous` on the token before it.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    stream: &'a TokenStream,
    /// Gap index: tokens `[0, gap)` lie before the cursor.
    gap: usize,
    current: Option<usize>,
}

impl<'a> TokenCursor<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self {
            stream,
            gap: 0,
            current: None,
        }
    }

    /// Position the cursor right before the token containing `offset`.
    pub fn move_to(&mut self, offset: u32) {
        self.gap = self.stream.index_at(offset);
        self.current = None;
    }

    /// Position the cursor after the last token.
    pub fn move_end(&mut self) {
        self.gap = self.stream.len();
        self.current = None;
    }

    /// Step onto the next token. Returns false at the end of the stream.
    pub fn move_next(&mut self) -> bool {
        let next = match self.current {
            Some(current) => current + 1,
            None => self.gap,
        };
        if next < self.stream.len() {
            self.current = Some(next);
            true
        } else {
            false
        }
    }

    /// Step onto the previous token. Returns false at the start of the stream.
    pub fn move_previous(&mut self) -> bool {
        let from = self.current.unwrap_or(self.gap);
        match from.checked_sub(1) {
            Some(prev) => {
                self.current = Some(prev);
                true
            }
            None => false,
        }
    }

    /// The token the cursor is on, if any.
    #[inline]
    pub fn token(&self) -> Option<&'a Token> {
        self.current.and_then(|idx| self.stream.get(idx))
    }

    #[inline]
    pub fn kind(&self) -> Option<SyntaxKind> {
        self.token().map(|t| t.kind)
    }

    /// Offset of the current token.
    #[inline]
    pub fn offset(&self) -> Option<u32> {
        self.token().map(|t| t.offset)
    }
}
