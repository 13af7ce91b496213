//! Function literals and parameter lists.
//!
//! ```text
//! (fun (x y) body...)               names only, no properties table
//! (fun ([x Int] [y Int]) body...)   typed, table built from the tuples
//! (fun ([x Int] [-> Int]) body...)  `->` declares the return type
//! ```
//!
//! The two parameter styles cannot be mixed.

use tracing::trace;
use yin_diagnostic::ErrorCode;
use yin_ir::{Expr, ExprKind, Ident, PreKind, PreNode, Properties, Span};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `(fun params body...)`
    pub(super) fn parse_fun(&self, elements: &[PreNode], span: Span) -> Result<Expr, ParseError> {
        trace!("parse_tuple -> Fun");
        let [_, pre_params, statements @ ..] = elements else {
            return Err(fun_arity_error(elements, span));
        };
        let (Some(first), Some(last)) = (statements.first(), statements.last()) else {
            return Err(fun_arity_error(elements, span));
        };

        let Some((_, param_nodes)) = pre_params.as_tuple() else {
            return Err(ParseError::new(
                ErrorCode::E1007,
                format!("incorrect format of parameters: {}", self.show_pre(pre_params)),
                pre_params.span,
            )
            .with_context("expected a parameter list"));
        };
        let (params, param_properties) = self.resolve_params(pre_params, param_nodes)?;

        let body = self.parse_list(statements)?;
        // Line and column come from the first statement, not from `(fun`.
        let body_span = first.span.merge(last.span);
        Ok(Expr::new(
            ExprKind::Fun {
                params,
                param_properties,
                body: Box::new(Expr::new(ExprKind::Block(body), body_span)),
            },
            span,
        ))
    }

    /// Split a parameter list into names and an optional properties table.
    ///
    /// Plain names give names only. Tuples give a name from their first
    /// element (the return-type marker `->` excepted) and feed the
    /// properties table.
    fn resolve_params(
        &self,
        pre_params: &PreNode,
        param_nodes: &[PreNode],
    ) -> Result<(Vec<Ident>, Option<Properties>), ParseError> {
        let mut params = Vec::with_capacity(param_nodes.len());
        let mut typed = Vec::new();
        let mut has_name = false;

        for param in param_nodes {
            match &param.kind {
                PreKind::Name(name) => {
                    has_name = true;
                    params.push(Ident::new(*name, param.span));
                }
                PreKind::Tuple { elements, .. } => {
                    let Some(first) = elements.first() else {
                        return Err(self.illegal_param(param, "empty parameter"));
                    };
                    let Some(name) = first.as_name() else {
                        return Err(ParseError::new(
                            ErrorCode::E1009,
                            format!("illegal argument name: {}", self.show_pre(first)),
                            first.span,
                        )
                        .with_context("expected a parameter name"));
                    };
                    if name != self.forms.return_arrow {
                        params.push(Ident::new(name, first.span));
                    }
                    typed.push(param);
                }
                _ => return Err(self.illegal_param(param, "expected a name or a tuple")),
            }
        }

        if has_name && !typed.is_empty() {
            return Err(ParseError::new(
                ErrorCode::E1010,
                format!(
                    "parameters must be either all names or all tuples: {}",
                    self.show_pre(pre_params)
                ),
                pre_params.span,
            )
            .with_context("mixed parameter styles"));
        }

        if typed.is_empty() {
            return Ok((params, None));
        }
        let properties = self.build_properties(typed)?;
        Ok((params, Some(properties)))
    }

    #[cold]
    fn illegal_param(&self, param: &PreNode, context: &str) -> ParseError {
        ParseError::new(
            ErrorCode::E1008,
            format!("illegal argument format: {}", self.show_pre(param)),
            param.span,
        )
        .with_context(context)
    }
}

#[cold]
fn fun_arity_error(elements: &[PreNode], span: Span) -> ParseError {
    let context = if elements.len() < 2 {
        "missing parameter list and body"
    } else {
        "missing function body"
    };
    ParseError::new(ErrorCode::E1006, "syntax error in function definition", span)
        .with_context(context)
}
