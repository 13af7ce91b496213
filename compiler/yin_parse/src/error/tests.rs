#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use yin_ir::{FileId, StringInterner};

fn sp(start: u32, end: u32) -> Span {
    Span::new(FileId::DUMMY, start, end, 1, start + 1)
}

#[test]
fn test_categories() {
    assert_eq!(ErrorCategory::of(ErrorCode::E1001), ErrorCategory::Shape);
    assert_eq!(ErrorCategory::of(ErrorCode::E1002), ErrorCategory::Shape);
    assert_eq!(ErrorCategory::of(ErrorCode::E1014), ErrorCategory::Shape);
    assert_eq!(ErrorCategory::of(ErrorCode::E1017), ErrorCategory::Shape);
    assert_eq!(ErrorCategory::of(ErrorCode::E1007), ErrorCategory::Kind);
    assert_eq!(ErrorCategory::of(ErrorCode::E1018), ErrorCategory::Kind);
    assert_eq!(
        ErrorCategory::of(ErrorCode::E1010),
        ErrorCategory::SemanticShape
    );
    assert_eq!(
        ErrorCategory::of(ErrorCode::E1016),
        ErrorCategory::SemanticShape
    );
    assert_eq!(ErrorCategory::of(ErrorCode::E0004), ErrorCategory::Lexical);
}

#[test]
fn test_every_parser_code_has_a_non_lexical_category() {
    for code in ErrorCode::ALL.iter().copied() {
        let lexical = ErrorCategory::of(code) == ErrorCategory::Lexical;
        assert_eq!(lexical, code.is_reader_error(), "{code}");
    }
}

#[test]
fn test_to_diagnostic_uses_context_as_label() {
    let err = ParseError::new(ErrorCode::E1016, "duplicated field name: x", sp(22, 29))
        .with_context("duplicated field name");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1016);
    assert_eq!(diag.message, "duplicated field name: x");
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].message, "duplicated field name");
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.labels[0].span, sp(22, 29));
}

#[test]
fn test_to_diagnostic_defaults_label() {
    let diag = ParseError::new(ErrorCode::E1001, "syntax error", sp(0, 2)).to_diagnostic();
    assert_eq!(diag.labels[0].message, "here");
}

#[test]
fn test_from_read_error_keeps_reader_diagnostic() {
    let interner = StringInterner::new();
    let read_err = yin_reader::read("(a [b)", FileId::DUMMY, &interner).unwrap_err();
    let err = ParseError::from(read_err.clone());

    assert_eq!(err.code, ErrorCode::E0006);
    assert_eq!(err.category(), ErrorCategory::Lexical);
    assert_eq!(err.span, read_err.span);
    assert_eq!(err.read_error(), Some(&read_err));
    assert_eq!(err.to_diagnostic(), read_err.to_diagnostic());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_display() {
    let err = ParseError::new(ErrorCode::E1002, "incorrect format of if", sp(4, 12));
    assert_eq!(err.to_string(), "1:5: error[E1002]: incorrect format of if");
}
