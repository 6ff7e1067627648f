//! A small tokenizer for Java-like source text.
//!
//! The real token stream comes from the front end. This tokenizer exists
//! so fixtures, benchmarks and tools can produce a faithful stream from
//! plain text: it covers every byte, keeps trivia as tokens, and applies
//! maximal munch to operators (so `>>` in `List<List<T>>` is one `GtGt`
//! token, exactly as a front-end lexer reports it).

use crate::identifier::{is_identifier_part, is_identifier_start};
use crate::syntax_kind::SyntaxKind;
use crate::token::{Token, TokenStream};
use memchr::{memchr, memmem};
use tracing::trace;

/// Operators and punctuation, longest first so the first match wins.
const PUNCTUATION: &[(&str, SyntaxKind)] = &[
    (">>>=", SyntaxKind::GtGtGtEq),
    (">>>", SyntaxKind::GtGtGt),
    ("<<=", SyntaxKind::LtLtEq),
    (">>=", SyntaxKind::GtGtEq),
    ("...", SyntaxKind::Ellipsis),
    ("::", SyntaxKind::ColonColon),
    ("->", SyntaxKind::Arrow),
    ("==", SyntaxKind::EqEq),
    ("!=", SyntaxKind::BangEq),
    ("<=", SyntaxKind::LtEq),
    (">=", SyntaxKind::GtEq),
    ("<<", SyntaxKind::LtLt),
    (">>", SyntaxKind::GtGt),
    ("+=", SyntaxKind::PlusEq),
    ("-=", SyntaxKind::MinusEq),
    ("*=", SyntaxKind::StarEq),
    ("/=", SyntaxKind::SlashEq),
    ("%=", SyntaxKind::PercentEq),
    ("&=", SyntaxKind::AmpEq),
    ("|=", SyntaxKind::BarEq),
    ("^=", SyntaxKind::CaretEq),
    ("++", SyntaxKind::PlusPlus),
    ("--", SyntaxKind::MinusMinus),
    ("&&", SyntaxKind::AmpAmp),
    ("||", SyntaxKind::BarBar),
    ("(", SyntaxKind::OpenParen),
    (")", SyntaxKind::CloseParen),
    ("{", SyntaxKind::OpenBrace),
    ("}", SyntaxKind::CloseBrace),
    ("[", SyntaxKind::OpenBracket),
    ("]", SyntaxKind::CloseBracket),
    (";", SyntaxKind::Semicolon),
    (",", SyntaxKind::Comma),
    (".", SyntaxKind::Dot),
    ("@", SyntaxKind::At),
    (":", SyntaxKind::Colon),
    ("?", SyntaxKind::Question),
    ("=", SyntaxKind::Eq),
    ("!", SyntaxKind::Bang),
    ("~", SyntaxKind::Tilde),
    ("<", SyntaxKind::Lt),
    (">", SyntaxKind::Gt),
    ("+", SyntaxKind::Plus),
    ("-", SyntaxKind::Minus),
    ("*", SyntaxKind::Star),
    ("/", SyntaxKind::Slash),
    ("%", SyntaxKind::Percent),
    ("&", SyntaxKind::Amp),
    ("|", SyntaxKind::Bar),
    ("^", SyntaxKind::Caret),
];

/// Tokenize `text` into a stream that covers every byte.
pub fn tokenize(text: &str) -> TokenStream {
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < text.len() {
        let rest = &text[pos..];
        let (kind, len) = scan_token(rest);
        // Never produce an empty token; an unclassifiable char is one token.
        let len = if len == 0 {
            rest.chars().next().map_or(1, char::len_utf8)
        } else {
            len
        };
        tokens.push(Token::new(kind, pos as u32, &rest[..len]));
        pos += len;
    }

    trace!(count = tokens.len(), "tokenized source text");
    TokenStream::new(tokens)
}

/// Kind and byte length of the token at the start of `rest`.
fn scan_token(rest: &str) -> (SyntaxKind, usize) {
    let bytes = rest.as_bytes();
    let Some(first) = rest.chars().next() else {
        return (SyntaxKind::Unknown, 0);
    };

    if first.is_whitespace() {
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !ch.is_whitespace())
            .map_or(rest.len(), |(idx, _)| idx);
        return (SyntaxKind::Whitespace, len);
    }

    if rest.starts_with("//") {
        let len = memchr(b'\n', bytes).unwrap_or(rest.len());
        return (SyntaxKind::LineComment, len);
    }

    if rest.starts_with("/*") {
        let kind = if rest.starts_with("/**") && !rest.starts_with("/**/") {
            SyntaxKind::DocComment
        } else {
            SyntaxKind::BlockComment
        };
        let len = memmem::find(&bytes[2..], b"*/").map_or(rest.len(), |idx| idx + 4);
        return (kind, len);
    }

    if is_identifier_start(first) {
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !is_identifier_part(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        let word = &rest[..len];
        let kind = SyntaxKind::keyword(word).unwrap_or(SyntaxKind::Identifier);
        return (kind, len);
    }

    if first.is_ascii_digit() {
        return scan_number(bytes);
    }

    if first == '"' {
        return (SyntaxKind::StringLiteral, scan_quoted(bytes, b'"'));
    }

    if first == '\'' {
        return (SyntaxKind::CharLiteral, scan_quoted(bytes, b'\''));
    }

    for &(punct, kind) in PUNCTUATION {
        if rest.starts_with(punct) {
            return (kind, punct.len());
        }
    }

    (SyntaxKind::Unknown, first.len_utf8())
}

fn scan_number(bytes: &[u8]) -> (SyntaxKind, usize) {
    let mut len = 0;
    let mut kind = SyntaxKind::IntLiteral;
    while len < bytes.len() {
        let b = bytes[len];
        if b.is_ascii_alphanumeric() || b == b'_' {
            len += 1;
        } else if b == b'.' && kind == SyntaxKind::IntLiteral {
            // `1.5` is a float, `1..` and `x.1` never reach here.
            if bytes.get(len + 1).is_some_and(u8::is_ascii_digit) {
                kind = SyntaxKind::FloatLiteral;
                len += 1;
            } else {
                break;
            }
        } else {
            break;
        }
    }
    (kind, len)
}

/// Length of a quoted literal, stopping at the closing quote or the end of
/// the line (unterminated literals are common mid-edit).
fn scan_quoted(bytes: &[u8], quote: u8) -> usize {
    let mut idx = 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'\n' => return idx,
            b if b == quote => return idx + 1,
            _ => idx += 1,
        }
    }
    bytes.len()
}
