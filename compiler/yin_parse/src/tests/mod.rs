//! Parser tests.
//!
//! - `parser`: node classification and the fixed-arity special forms
//! - `functions`: function literals and parameter resolution
//! - `records`: record definitions, field specs and keyword maps
//! - `properties`: property tests for call shape and span preservation

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

mod records;

use yin_ir::{Expr, ExprKind, FileId, Name, Span, StringInterner};

use crate::{parse, ParseError};

/// Parse `source` and return its only top-level statement.
fn parse_one(source: &str) -> (Expr, StringInterner) {
    let interner = StringInterner::new();
    let root = parse(source, FileId::DUMMY, &interner).unwrap();
    let ExprKind::Block(mut statements) = root.kind else {
        panic!("root is not a block");
    };
    assert_eq!(statements.len(), 1, "expected one statement in {source:?}");
    (statements.remove(0), interner)
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    parse(source, FileId::DUMMY, &interner).unwrap_err()
}

fn sp(start: u32, end: u32, line: u32, col: u32) -> Span {
    Span::new(FileId::DUMMY, start, end, line, col)
}

/// Single-line span.
fn sp1(start: u32, end: u32) -> Span {
    sp(start, end, 1, start + 1)
}

fn name(interner: &StringInterner, text: &str) -> Name {
    interner.intern(text)
}
