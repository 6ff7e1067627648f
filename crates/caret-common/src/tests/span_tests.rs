use crate::span::TextSpan;

#[test]
fn test_span_half_open_containment() {
    let span = TextSpan::new(4, 8);
    assert!(!span.contains(3));
    assert!(span.contains(4));
    assert!(span.contains(7));
    assert!(!span.contains(8));
}

#[test]
fn test_span_caret_containment() {
    let span = TextSpan::new(4, 8);
    // A caret right before the first character is outside, right after
    // the last character is inside.
    assert!(!span.encloses_caret(4));
    assert!(span.encloses_caret(5));
    assert!(span.encloses_caret(8));
    assert!(!span.encloses_caret(9));
}

#[test]
fn test_span_len_and_cover() {
    let outer = TextSpan::at(10, 20);
    assert_eq!(outer.end, 30);
    assert_eq!(outer.len(), 20);
    assert!(outer.covers(TextSpan::new(12, 30)));
    assert!(!outer.covers(TextSpan::new(9, 12)));
    assert!(TextSpan::new(5, 5).is_empty());
    assert_eq!(TextSpan::from((1, 2)), TextSpan::new(1, 2));
    assert_eq!(TextSpan::new(1, 2).to_string(), "1..2");
}
