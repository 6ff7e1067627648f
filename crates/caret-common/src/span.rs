//! Byte-offset spans into the text of one compilation unit.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the source text.
///
/// Spans come from the front end's position oracle. A node without a span
/// is synthetic; that is modelled as `Option<TextSpan>` on the node rather
/// than with a sentinel value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: u32,
    pub end: u32,
}

impl TextSpan {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Span of `len` bytes starting at `start`.
    #[inline]
    pub const fn at(start: u32, len: u32) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// `start <= offset < end`, the usual half-open test.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// `start < offset <= end`.
    ///
    /// This is the containment used when mapping a caret to a node: a caret
    /// sitting right after the last character still belongs to the node, a
    /// caret sitting right before the first character does not.
    #[inline]
    pub const fn encloses_caret(&self, offset: u32) -> bool {
        self.start < offset && offset <= self.end
    }

    /// True when `other` lies completely inside this span.
    #[inline]
    pub const fn covers(&self, other: TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<(u32, u32)> for TextSpan {
    fn from((start, end): (u32, u32)) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for TextSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
