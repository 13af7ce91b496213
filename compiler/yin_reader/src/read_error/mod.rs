//! Reader error types.
//!
//! A `ReadError` says where reading stopped (`span`) and what was wrong
//! (`kind`). The reader stops at the first error.

use std::fmt;

use yin_diagnostic::{Diagnostic, ErrorCode};
use yin_ir::{Delimiter, Span};

/// What kind of reader error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReadErrorKind {
    /// Missing closing `"` for a string literal.
    UnterminatedString,
    /// Unknown escape in a string literal (e.g., `\q`).
    InvalidEscape { escape: char },
    /// A number-like token that is not a valid integer or float.
    InvalidNumber { text: String, overflow: bool },
    /// End of input with a group still open.
    UnclosedDelimiter { open: Delimiter },
    /// A closing delimiter with no open group.
    UnexpectedCloser { close: Delimiter },
    /// A closing delimiter that does not match the innermost open group.
    MismatchedCloser {
        open: Delimiter,
        open_span: Span,
        close: Delimiter,
    },
    /// `:` with no keyword name.
    EmptyKeyword,
    /// `.` with no attribute name, or `.` after something other than a name
    /// or a closing delimiter.
    DanglingAttr,
}

impl ReadErrorKind {
    /// The diagnostic code for this kind.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ReadErrorKind::UnterminatedString => ErrorCode::E0001,
            ReadErrorKind::InvalidEscape { .. } => ErrorCode::E0002,
            ReadErrorKind::InvalidNumber { .. } => ErrorCode::E0003,
            ReadErrorKind::UnclosedDelimiter { .. } => ErrorCode::E0004,
            ReadErrorKind::UnexpectedCloser { .. } => ErrorCode::E0005,
            ReadErrorKind::MismatchedCloser { .. } => ErrorCode::E0006,
            ReadErrorKind::EmptyKeyword => ErrorCode::E0007,
            ReadErrorKind::DanglingAttr => ErrorCode::E0008,
        }
    }

    /// The headline message.
    pub fn message(&self) -> String {
        match self {
            ReadErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            ReadErrorKind::InvalidEscape { escape } => {
                format!("invalid escape sequence `\\{}`", escape.escape_debug())
            }
            ReadErrorKind::InvalidNumber {
                text,
                overflow: true,
            } => format!("number literal `{text}` is out of range"),
            ReadErrorKind::InvalidNumber { text, .. } => {
                format!("invalid number literal `{text}`")
            }
            ReadErrorKind::UnclosedDelimiter { open } => {
                format!("unclosed delimiter `{}`", open.open_char())
            }
            ReadErrorKind::UnexpectedCloser { close } => {
                format!("unexpected closing delimiter `{}`", close.close_char())
            }
            ReadErrorKind::MismatchedCloser { open, close, .. } => format!(
                "mismatched closing delimiter: expected `{}`, found `{}`",
                open.close_char(),
                close.close_char()
            ),
            ReadErrorKind::EmptyKeyword => "keyword has no name after `:`".to_string(),
            ReadErrorKind::DanglingAttr => "expected attribute name after `.`".to_string(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReadErrorKind::UnterminatedString => "string starts here",
            ReadErrorKind::InvalidEscape { .. } => "unknown escape",
            ReadErrorKind::InvalidNumber { .. } => "not a number",
            ReadErrorKind::UnclosedDelimiter { .. } => "opened here and never closed",
            ReadErrorKind::UnexpectedCloser { .. } => "nothing to close",
            ReadErrorKind::MismatchedCloser { .. } => "mismatched closer",
            ReadErrorKind::EmptyKeyword => "empty keyword",
            ReadErrorKind::DanglingAttr => "dangling `.`",
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            ReadErrorKind::UnterminatedString => Some("add closing `\"`"),
            ReadErrorKind::InvalidEscape { .. } => {
                Some(r#"valid escapes are: \n, \t, \r, \\, \", \0"#)
            }
            _ => None,
        }
    }
}

/// A reader error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ReadError {
    pub kind: ReadErrorKind,
    pub span: Span,
}

impl ReadError {
    #[cold]
    pub fn new(kind: ReadErrorKind, span: Span) -> Self {
        ReadError { kind, span }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, self.kind.label());

        if let ReadErrorKind::MismatchedCloser {
            open, open_span, ..
        } = &self.kind
        {
            diag = diag.with_secondary_label(
                *open_span,
                format!("`{}` opened here", open.open_char()),
            );
        }

        if let Some(help) = self.kind.suggestion() {
            diag = diag.with_suggestion(help);
        }

        diag
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.span.line, self.span.col, self.message())
    }
}

impl std::error::Error for ReadError {}
