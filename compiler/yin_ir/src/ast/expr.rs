//! Expression Types
//!
//! Every node the parser can build. Each node keeps the span of the pre-AST
//! node it was built from; the only synthesized span is a function body
//! block, which covers its statements.

use std::fmt;

use super::Properties;
use crate::{Name, Named, Span, Spanned};

/// An identifier together with the span it was written at.
///
/// Used for parameter names, record names, parent names and attribute names.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    #[inline]
    pub const fn new(name: Name, span: Span) -> Self {
        Ident { name, span }
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.name, self.span)
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

impl Named for Ident {
    fn name(&self) -> Name {
        self.name
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// The identifier if this node is a bare `Ident`.
    #[inline]
    pub fn as_ident(&self) -> Option<Name> {
        match self.kind {
            ExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// The keyword name if this node is a `Keyword`.
    #[inline]
    pub fn as_keyword(&self) -> Option<Name> {
        match self.kind {
            ExprKind::Keyword(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Statement sequence: the program root, `(seq ...)`, or a function body.
    Block(Vec<Expr>),

    /// Conditional: `(if test conseq alt)`
    If {
        test: Box<Expr>,
        conseq: Box<Expr>,
        alt: Box<Expr>,
    },

    /// Definition: `(define pattern value)`
    Def {
        pattern: Box<Expr>,
        value: Box<Expr>,
    },

    /// Assignment: `(set! pattern value)`
    Assign {
        pattern: Box<Expr>,
        value: Box<Expr>,
    },

    /// Type declarations: `(declare [name Type ...] ...)`
    Declare(Properties),

    /// Function literal: `(fun (params...) body...)`
    ///
    /// `param_properties` is present only when every parameter is written as
    /// a typed `[name Type ...]` tuple. The return-type marker never appears
    /// in `params` but keeps its entry in `param_properties`.
    Fun {
        params: Vec<Ident>,
        param_properties: Option<Properties>,
        body: Box<Expr>,
    },

    /// Record type definition: `(record Name (Parents...)? [field Type ...]...)`
    RecordDef {
        name: Ident,
        parents: Option<Vec<Ident>>,
        properties: Properties,
    },

    /// Record literal: `{ ... }`
    RecordLiteral(Vec<Expr>),

    /// Vector literal: `[ ... ]`
    VectorLiteral(Vec<Expr>),

    /// Application: `(func args...)`
    Call { func: Box<Expr>, args: Vec<Expr> },

    /// Member access: `value.attr`
    Attr { value: Box<Expr>, attr: Ident },

    /// Variable reference
    Ident(Name),

    /// Keyword atom `:name`
    Keyword(Name),

    /// Integer literal
    Int(i64),

    /// Float literal (stored as bits for Hash)
    Float(u64),

    /// String literal (interned)
    Str(Name),
}
