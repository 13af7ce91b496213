//! Field specs and keyword maps.
//!
//! A field spec is a square tuple `[name Type :key value ...]`. The second
//! element becomes the `type` attribute; the rest is a keyword map merged on
//! top of it, so an explicit `:type` wins over the positional one.

use yin_diagnostic::ErrorCode;
use yin_ir::{Attributes, Delimiter, Expr, Ident, PreNode, Properties, Span};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Build a properties table from a sequence of field specs.
    ///
    /// Nodes that are not square tuples are skipped. Field names must be
    /// unique.
    pub fn parse_properties(&self, fields: &[PreNode]) -> Result<Properties, ParseError> {
        self.build_properties(fields)
    }

    pub(super) fn build_properties<'n>(
        &self,
        fields: impl IntoIterator<Item = &'n PreNode>,
    ) -> Result<Properties, ParseError> {
        let mut properties = Properties::new();
        for field in fields {
            let Some((Delimiter::Square, elements)) = field.as_tuple() else {
                continue;
            };
            let mut parsed = self.parse_list(elements)?.into_iter();
            let (Some(name_expr), Some(ty)) = (parsed.next(), parsed.next()) else {
                return Err(
                    ParseError::new(ErrorCode::E1014, "empty record slot not allowed", field.span)
                        .with_context("expected `[name Type ...]`"),
                );
            };

            let Some(name) = name_expr.as_ident() else {
                return Err(ParseError::new(
                    ErrorCode::E1015,
                    format!("expect field name, but got: {}", self.show_expr(&name_expr)),
                    name_expr.span,
                )
                .with_context("expected a field name"));
            };
            if properties.contains(name) {
                return Err(ParseError::new(
                    ErrorCode::E1016,
                    format!("duplicated field name: {}", self.interner.lookup(name)),
                    name_expr.span,
                )
                .with_context("duplicated field name"));
            }

            let rest: Vec<Expr> = parsed.collect();
            let mut attributes = Attributes::new();
            attributes.insert(self.forms.type_attr, ty);
            attributes.merge(self.parse_keyword_map(&rest, field.span)?);
            properties.extend_field(Ident::new(name, name_expr.span), attributes);
        }
        Ok(properties)
    }

    /// Decode `:key value` pairs into an attribute bag.
    ///
    /// `span` locates the whole sequence for the odd-length error. A repeated
    /// key replaces the earlier value in place.
    pub fn parse_keyword_map(&self, items: &[Expr], span: Span) -> Result<Attributes, ParseError> {
        if items.len() % 2 != 0 {
            return Err(ParseError::new(
                ErrorCode::E1017,
                format!(
                    "must be of the form (:key1 value1 :key2 value2), but got: {}",
                    self.show_sequence(items)
                ),
                span,
            )
            .with_context("every key needs a value"));
        }

        let mut attributes = Attributes::new();
        for pair in items.chunks_exact(2) {
            let [key, value] = pair else {
                continue;
            };
            let Some(key_name) = key.as_keyword() else {
                return Err(ParseError::new(
                    ErrorCode::E1018,
                    format!("key must be a keyword, but got: {}", self.show_expr(key)),
                    key.span,
                )
                .with_context("expected `:key`"));
            };
            attributes.insert(key_name, value.clone());
        }
        Ok(attributes)
    }

    fn show_sequence(&self, items: &[Expr]) -> String {
        let inner: Vec<String> = items.iter().map(|item| self.show_expr(item)).collect();
        format!("({})", inner.join(" "))
    }
}
