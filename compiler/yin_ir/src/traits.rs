//! Focused traits for interface segregation.
//!
//! Each trait provides one capability:
//! - `Spanned` - just span access
//! - `Named` - just name access

use super::{Name, Span};

/// Trait for types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Trait for types that have a name.
pub trait Named {
    /// Get the name.
    fn name(&self) -> Name;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileId, Ident, PreKind, PreNode};

    #[test]
    fn test_spanned_trait() {
        let span = Span::new(FileId::DUMMY, 0, 2, 1, 1);
        let node = PreNode::new(PreKind::Int(42), span);
        assert_eq!(node.span().start, 0);
        assert_eq!(node.span().end, 2);
    }

    #[test]
    fn test_named_trait() {
        let span = Span::new(FileId::DUMMY, 4, 9, 1, 5);
        let ident = Ident::new(Name::from_raw(42), span);
        assert_eq!(ident.name(), Name::from_raw(42));
        assert_eq!(ident.span(), span);
    }

    fn span_of<T: Spanned>(item: &T) -> Span {
        item.span()
    }

    #[test]
    fn test_spanned_generic_use() {
        let span = Span::new(FileId::DUMMY, 3, 7, 2, 1);
        let ident = Ident::new(Name::EMPTY, span);
        assert_eq!(span_of(&ident), span);
    }
}
