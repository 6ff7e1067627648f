//! Identifier validity.
//!
//! Front ends give placeholder names such as `<error>`, `<init>` or
//! `<any>` to nodes they had to invent. Name lookups reject those before
//! touching the token stream.

#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_numeric()
}

/// True when `name` is syntactically an identifier: a start character
/// followed by identifier parts. Keywords are not rejected here.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}
