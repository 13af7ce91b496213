//! Record type definitions.
//!
//! ```text
//! (record Animal [name String])
//! (record Dog (Animal) [name String] [age Int :default 0])
//! ```

use tracing::trace;
use yin_diagnostic::ErrorCode;
use yin_ir::{Delimiter, Expr, ExprKind, Ident, PreNode, Span};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `(record Name (Parent...)? fields...)`
    pub(super) fn parse_record(
        &self,
        elements: &[PreNode],
        span: Span,
    ) -> Result<Expr, ParseError> {
        trace!("parse_tuple -> Record");
        let [_, name_node, rest @ ..] = elements else {
            return Err(record_arity_error(span));
        };
        let Some(after_name) = rest.first() else {
            return Err(record_arity_error(span));
        };

        let Some(name) = name_node.as_name() else {
            return Err(ParseError::new(
                ErrorCode::E1012,
                format!("syntax error in record name: {}", self.show_pre(name_node)),
                name_node.span,
            )
            .with_context("expected a record name"));
        };

        let (parents, fields) = match after_name.as_tuple() {
            Some((Delimiter::Paren, parent_nodes)) => {
                (Some(self.parse_parents(parent_nodes)?), &rest[1..])
            }
            _ => (None, rest),
        };

        let properties = self.parse_properties(fields)?;
        Ok(Expr::new(
            ExprKind::RecordDef {
                name: Ident::new(name, name_node.span),
                parents,
                properties,
            },
            span,
        ))
    }

    fn parse_parents(&self, parent_nodes: &[PreNode]) -> Result<Vec<Ident>, ParseError> {
        parent_nodes
            .iter()
            .map(|parent| match parent.as_name() {
                Some(name) => Ok(Ident::new(name, parent.span)),
                None => Err(ParseError::new(
                    ErrorCode::E1013,
                    format!("parents can only be names: {}", self.show_pre(parent)),
                    parent.span,
                )
                .with_context("expected a parent record name")),
            })
            .collect()
    }
}

#[cold]
fn record_arity_error(span: Span) -> ParseError {
    ParseError::new(
        ErrorCode::E1011,
        "syntax error in record type definition",
        span,
    )
    .with_context("expected a name and at least one parent list or field")
}
