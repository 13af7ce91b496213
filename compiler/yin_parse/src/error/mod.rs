//! Parse error types.
//!
//! Every parser failure is a `ParseError` carrying an [`ErrorCode`], a
//! message naming the offending form, and the span of the node that caused
//! it. Reader failures surfaced through [`crate::parse`] keep the original
//! [`ReadError`] so its richer diagnostic survives the conversion.

use std::fmt;

use yin_diagnostic::{Diagnostic, ErrorCode};
use yin_ir::Span;
use yin_reader::ReadError;

/// Coarse classification of a parse failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Wrong number of elements: arity, empty form, empty field slot, odd
    /// keyword map.
    Shape,
    /// An element of the wrong kind where a name, tuple or keyword was
    /// required.
    Kind,
    /// Elements that are individually fine but conflict: mixed parameter
    /// styles, duplicated fields.
    SemanticShape,
    /// The source text could not be read.
    Lexical,
}

impl ErrorCategory {
    /// Classify an error code.
    pub fn of(code: ErrorCode) -> Self {
        match code {
            c if c.is_reader_error() => ErrorCategory::Lexical,
            ErrorCode::E1010 | ErrorCode::E1016 => ErrorCategory::SemanticShape,
            ErrorCode::E1007
            | ErrorCode::E1008
            | ErrorCode::E1009
            | ErrorCode::E1012
            | ErrorCode::E1013
            | ErrorCode::E1015
            | ErrorCode::E1018 => ErrorCategory::Kind,
            _ => ErrorCategory::Shape,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorCategory::Shape => "shape",
            ErrorCategory::Kind => "kind",
            ErrorCategory::SemanticShape => "semantic shape",
            ErrorCategory::Lexical => "lexical",
        };
        f.write_str(text)
    }
}

/// Parse error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Optional label text for the primary span.
    pub context: Option<String>,
    /// The reader error this was converted from, if any.
    read_error: Option<Box<ReadError>>,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            read_error: None,
        }
    }

    /// Add context for better error messages.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Which family of mistake this is.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::of(self.code)
    }

    /// The underlying reader error, for errors raised before parsing began.
    pub fn read_error(&self) -> Option<&ReadError> {
        self.read_error.as_deref()
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        if let Some(read_error) = &self.read_error {
            return read_error.to_diagnostic();
        }
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"))
    }
}

impl From<ReadError> for ParseError {
    fn from(err: ReadError) -> Self {
        ParseError {
            code: err.code(),
            message: err.message(),
            span: err.span,
            context: None,
            read_error: Some(Box::new(err)),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: error[{}]: {}",
            self.span.line, self.span.col, self.code, self.message
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.read_error
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests;
