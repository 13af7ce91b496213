//! Parser for Yin: pre-AST to typed AST.
//!
//! The reader leaves every bracketed group as an anonymous tuple. The parser
//! decides what each one means: a special form when its head names one
//! (`seq`, `if`, `define`, `set!`, `declare`, `fun`, `record`), a vector or
//! record literal by its brackets, and a call otherwise.
//!
//! Parsing is fail-fast: the first malformed form aborts with a
//! [`ParseError`] and no partial tree is returned.

mod error;
mod grammar;

pub use error::{ErrorCategory, ParseError};

use tracing::debug;
use yin_ir::{Expr, FileId, PreNode, SpecialForms, StringInterner};

/// Parser state.
///
/// Holds only the interner and the pre-interned special form names; every
/// call builds a fresh tree.
pub struct Parser<'a> {
    interner: &'a StringInterner,
    forms: SpecialForms,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(interner: &'a StringInterner) -> Self {
        Parser {
            interner,
            forms: SpecialForms::new(interner),
        }
    }

    /// Get access to the string interner.
    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// The pre-interned reserved names this parser dispatches on.
    #[inline]
    pub fn forms(&self) -> &SpecialForms {
        &self.forms
    }
}

/// Read and parse a whole source file.
///
/// Returns the root `Block`. Reader failures are reported as a
/// [`ParseError`] in the [`ErrorCategory::Lexical`] category.
pub fn parse(source: &str, file: FileId, interner: &StringInterner) -> Result<Expr, ParseError> {
    debug!(file = file.raw(), bytes = source.len(), "parse");
    let pre = yin_reader::read(source, file, interner)?;
    Parser::new(interner).parse_node(&pre)
}

/// Parse a single pre-AST node.
pub fn parse_node(pre: &PreNode, interner: &StringInterner) -> Result<Expr, ParseError> {
    Parser::new(interner).parse_node(pre)
}

#[cfg(test)]
mod tests;
