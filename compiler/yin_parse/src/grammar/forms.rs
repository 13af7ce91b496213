//! Fixed-arity forms: `if`, `define`, `set!`, and `declare`.

use tracing::trace;
use yin_diagnostic::ErrorCode;
use yin_ir::{Expr, ExprKind, PreNode, Span};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `(if test conseq alt)`
    pub(super) fn parse_if(&self, elements: &[PreNode], span: Span) -> Result<Expr, ParseError> {
        trace!("parse_tuple -> If");
        let [_, test, conseq, alt] = elements else {
            return Err(
                ParseError::new(ErrorCode::E1002, "incorrect format of if", span)
                    .with_context(arity_context("if", 3, elements.len())),
            );
        };
        Ok(Expr::new(
            ExprKind::If {
                test: Box::new(self.parse_node(test)?),
                conseq: Box::new(self.parse_node(conseq)?),
                alt: Box::new(self.parse_node(alt)?),
            },
            span,
        ))
    }

    /// `(define pattern value)`
    pub(super) fn parse_define(
        &self,
        elements: &[PreNode],
        span: Span,
    ) -> Result<Expr, ParseError> {
        trace!("parse_tuple -> Define");
        let [_, pattern, value] = elements else {
            return Err(
                ParseError::new(ErrorCode::E1003, "incorrect format of definition", span)
                    .with_context(arity_context("define", 2, elements.len())),
            );
        };
        Ok(Expr::new(
            ExprKind::Def {
                pattern: Box::new(self.parse_node(pattern)?),
                value: Box::new(self.parse_node(value)?),
            },
            span,
        ))
    }

    /// `(set! pattern value)`
    pub(super) fn parse_assign(
        &self,
        elements: &[PreNode],
        span: Span,
    ) -> Result<Expr, ParseError> {
        trace!("parse_tuple -> Assign");
        let [_, pattern, value] = elements else {
            return Err(
                ParseError::new(ErrorCode::E1004, "incorrect format of assignment", span)
                    .with_context(arity_context("set!", 2, elements.len())),
            );
        };
        Ok(Expr::new(
            ExprKind::Assign {
                pattern: Box::new(self.parse_node(pattern)?),
                value: Box::new(self.parse_node(value)?),
            },
            span,
        ))
    }

    /// `(declare [name Type :key value ...] ...)`
    pub(super) fn parse_declare(
        &self,
        elements: &[PreNode],
        span: Span,
    ) -> Result<Expr, ParseError> {
        trace!("parse_tuple -> Declare");
        if elements.len() < 2 {
            return Err(
                ParseError::new(ErrorCode::E1005, "incorrect format of declaration", span)
                    .with_context("expected at least one field after `declare`"),
            );
        }
        let properties = self.parse_properties(&elements[1..])?;
        Ok(Expr::new(ExprKind::Declare(properties), span))
    }
}

/// Label text for a form with the wrong number of operands.
///
/// `found` counts the head, `expected` does not.
fn arity_context(form: &str, expected: usize, found: usize) -> String {
    let found = found.saturating_sub(1);
    let plural = if expected == 1 { "" } else { "s" };
    format!("`{form}` takes {expected} operand{plural}, found {found}")
}
