//! Pre-AST: the reader's untyped tree.
//!
//! Everything in Yin source is a bracketed group, an attribute access, or an
//! atom. The reader produces this tree without assigning meaning to any list
//! shape; the parser later decides which construct each group denotes.

use std::fmt;

use crate::{Ident, Name, Span, Spanned};

/// Bracket kind of a tuple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Delimiter {
    /// `( ... )`: generic list or special form.
    Paren,
    /// `[ ... ]`: vector literal or field spec.
    Square,
    /// `{ ... }`: record literal.
    Curly,
}

impl Delimiter {
    /// The opening character.
    pub const fn open_char(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Square => '[',
            Delimiter::Curly => '{',
        }
    }

    /// The matching closing character.
    pub const fn close_char(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Square => ']',
            Delimiter::Curly => '}',
        }
    }

    /// Classify an opening character.
    pub const fn from_open(c: char) -> Option<Delimiter> {
        match c {
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Square),
            '{' => Some(Delimiter::Curly),
            _ => None,
        }
    }

    /// Classify a closing character.
    pub const fn from_close(c: char) -> Option<Delimiter> {
        match c {
            ')' => Some(Delimiter::Paren),
            ']' => Some(Delimiter::Square),
            '}' => Some(Delimiter::Curly),
            _ => None,
        }
    }
}

/// A pre-AST node with its source span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PreNode {
    pub kind: PreKind,
    pub span: Span,
}

/// Pre-AST node variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PreKind {
    /// Whole program: top-level statements in source order.
    Block(Vec<PreNode>),

    /// Bracketed group.
    Tuple {
        open: Delimiter,
        elements: Vec<PreNode>,
    },

    /// Member access: `value.attr`
    Attr { value: Box<PreNode>, attr: Ident },

    /// Bare identifier.
    Name(Name),

    /// Map-key atom written `:name`; the colon is not part of the name.
    Keyword(Name),

    /// Integer literal.
    Int(i64),

    /// Float literal (stored as bits for Hash).
    Float(u64),

    /// String literal contents (interned, escapes already resolved).
    Str(Name),
}

impl PreNode {
    pub fn new(kind: PreKind, span: Span) -> Self {
        PreNode { kind, span }
    }

    /// Build a tuple node.
    pub fn tuple(open: Delimiter, elements: Vec<PreNode>, span: Span) -> Self {
        PreNode::new(PreKind::Tuple { open, elements }, span)
    }

    /// The identifier if this node is a bare `Name`.
    #[inline]
    pub fn as_name(&self) -> Option<Name> {
        match self.kind {
            PreKind::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The delimiter and elements if this node is a tuple.
    #[inline]
    pub fn as_tuple(&self) -> Option<(Delimiter, &[PreNode])> {
        match &self.kind {
            PreKind::Tuple { open, elements } => Some((*open, elements)),
            _ => None,
        }
    }

    /// True if this node is a tuple opened with `delim`.
    #[inline]
    pub fn is_tuple_with(&self, delim: Delimiter) -> bool {
        matches!(&self.kind, PreKind::Tuple { open, .. } if *open == delim)
    }

    /// Short human-readable description of the node kind.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            PreKind::Block(_) => "block",
            PreKind::Tuple { open, .. } => match open {
                Delimiter::Paren => "list",
                Delimiter::Square => "vector",
                Delimiter::Curly => "record literal",
            },
            PreKind::Attr { .. } => "attribute access",
            PreKind::Name(_) => "name",
            PreKind::Keyword(_) => "keyword",
            PreKind::Int(_) => "integer",
            PreKind::Float(_) => "float",
            PreKind::Str(_) => "string",
        }
    }
}

impl fmt::Debug for PreNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for PreNode {
    fn span(&self) -> Span {
        self.span
    }
}
