//! Grammar: one module per family of forms.
//!
//! This module holds the node classifier and the tuple dispatcher. The
//! special forms live in their own modules as further `impl Parser` blocks.

mod forms;
mod fun;
mod properties;
mod record;

use tracing::{debug, trace};
use yin_diagnostic::ErrorCode;
use yin_ir::{print_expr, print_pre, Delimiter, Expr, ExprKind, PreKind, PreNode, SpecialForm, Span};
use yin_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one pre-AST node into an AST node.
    ///
    /// Blocks and attribute accesses are rebuilt around their parsed parts,
    /// tuples are classified by delimiter and head, and atoms pass through
    /// unchanged. The result keeps the span of `node`.
    pub fn parse_node(&self, node: &PreNode) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_node_inner(node))
    }

    fn parse_node_inner(&self, node: &PreNode) -> Result<Expr, ParseError> {
        let span = node.span;
        let kind = match &node.kind {
            PreKind::Block(statements) => ExprKind::Block(self.parse_list(statements)?),
            PreKind::Attr { value, attr } => ExprKind::Attr {
                value: Box::new(self.parse_node(value)?),
                attr: *attr,
            },
            PreKind::Tuple { open, elements } => return self.parse_tuple(*open, elements, span),
            PreKind::Name(name) => ExprKind::Ident(*name),
            PreKind::Keyword(name) => ExprKind::Keyword(*name),
            PreKind::Int(value) => ExprKind::Int(*value),
            PreKind::Float(bits) => ExprKind::Float(*bits),
            PreKind::Str(name) => ExprKind::Str(*name),
        };
        Ok(Expr::new(kind, span))
    }

    /// Parse each node in order, stopping at the first error.
    pub fn parse_list(&self, nodes: &[PreNode]) -> Result<Vec<Expr>, ParseError> {
        nodes.iter().map(|node| self.parse_node(node)).collect()
    }

    fn parse_tuple(
        &self,
        open: Delimiter,
        elements: &[PreNode],
        span: Span,
    ) -> Result<Expr, ParseError> {
        match open {
            Delimiter::Curly => {
                let fields = self.parse_list(elements)?;
                return Ok(Expr::new(ExprKind::RecordLiteral(fields), span));
            }
            Delimiter::Square => {
                let items = self.parse_list(elements)?;
                return Ok(Expr::new(ExprKind::VectorLiteral(items), span));
            }
            Delimiter::Paren => {}
        }

        let Some(head) = elements.first() else {
            return Err(ParseError::new(ErrorCode::E1001, "syntax error", span)
                .with_context("empty form"));
        };

        let form = head.as_name().and_then(|name| self.forms.classify(name));
        debug!(
            span_start = span.start,
            line = span.line,
            form = ?form,
            len = elements.len(),
            "parse_tuple"
        );
        match form {
            Some(SpecialForm::Seq) => {
                trace!("parse_tuple -> Seq");
                let statements = self.parse_list(&elements[1..])?;
                Ok(Expr::new(ExprKind::Block(statements), span))
            }
            Some(SpecialForm::If) => self.parse_if(elements, span),
            Some(SpecialForm::Define) => self.parse_define(elements, span),
            Some(SpecialForm::Set) => self.parse_assign(elements, span),
            Some(SpecialForm::Declare) => self.parse_declare(elements, span),
            Some(SpecialForm::Fun) => self.parse_fun(elements, span),
            Some(SpecialForm::Record) => self.parse_record(elements, span),
            None => {
                trace!("parse_tuple -> Call");
                let func = self.parse_node(head)?;
                let args = self.parse_list(&elements[1..])?;
                Ok(Expr::new(
                    ExprKind::Call {
                        func: Box::new(func),
                        args,
                    },
                    span,
                ))
            }
        }
    }

    /// Source-like rendering of a pre-AST node for error messages.
    fn show_pre(&self, node: &PreNode) -> String {
        print_pre(node, self.interner)
    }

    /// Source-like rendering of an AST node for error messages.
    fn show_expr(&self, expr: &Expr) -> String {
        print_expr(expr, self.interner)
    }
}
