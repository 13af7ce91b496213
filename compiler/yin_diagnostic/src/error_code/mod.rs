//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `yin explain` lookups and documentation.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Reader errors (source text to pre-AST)
/// - E1xxx: Parser errors (pre-AST to AST)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid escape sequence
    E0002,
    /// Invalid number literal
    E0003,
    /// Unclosed delimiter
    E0004,
    /// Unexpected closing delimiter
    E0005,
    /// Mismatched closing delimiter
    E0006,
    /// Empty keyword
    E0007,
    /// Dangling attribute access
    E0008,

    // Parser Errors (E1xxx)
    /// Empty parenthesized form
    E1001,
    /// Incorrect format of `if`
    E1002,
    /// Incorrect format of definition
    E1003,
    /// Incorrect format of assignment
    E1004,
    /// Incorrect format of declaration
    E1005,
    /// Incorrect format of function literal
    E1006,
    /// Parameter list is not a tuple
    E1007,
    /// Illegal argument format
    E1008,
    /// Illegal argument name
    E1009,
    /// Mixed parameter styles
    E1010,
    /// Incorrect format of record definition
    E1011,
    /// Record name is not a name
    E1012,
    /// Record parent is not a name
    E1013,
    /// Empty record slot
    E1014,
    /// Expected field name
    E1015,
    /// Duplicated field name
    E1016,
    /// Keyword map has odd length
    E1017,
    /// Key is not a keyword
    E1018,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        ErrorCode::E1016,
        ErrorCode::E1017,
        ErrorCode::E1018,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E1018 => "E1018",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid escape sequence in string literal",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "unclosed delimiter",
            ErrorCode::E0005 => "unexpected closing delimiter",
            ErrorCode::E0006 => "mismatched closing delimiter",
            ErrorCode::E0007 => "keyword has no name after `:`",
            ErrorCode::E0008 => "attribute access has no attribute name after `.`",
            ErrorCode::E1001 => "empty parenthesized form",
            ErrorCode::E1002 => "incorrect format of `if`",
            ErrorCode::E1003 => "incorrect format of definition",
            ErrorCode::E1004 => "incorrect format of assignment",
            ErrorCode::E1005 => "incorrect format of declaration",
            ErrorCode::E1006 => "incorrect format of function literal",
            ErrorCode::E1007 => "function parameter list is not a tuple",
            ErrorCode::E1008 => "illegal argument format",
            ErrorCode::E1009 => "illegal argument name",
            ErrorCode::E1010 => "parameters mix plain names and typed tuples",
            ErrorCode::E1011 => "incorrect format of record definition",
            ErrorCode::E1012 => "record name is not a name",
            ErrorCode::E1013 => "record parent is not a name",
            ErrorCode::E1014 => "empty record slot",
            ErrorCode::E1015 => "field spec does not start with a field name",
            ErrorCode::E1016 => "duplicated field name",
            ErrorCode::E1017 => "keyword map has an odd number of elements",
            ErrorCode::E1018 => "keyword map key is not a keyword",
        }
    }

    /// Check if this is a reader error (E0xxx range).
    pub fn is_reader_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E0003
                | ErrorCode::E0004
                | ErrorCode::E0005
                | ErrorCode::E0006
                | ErrorCode::E0007
                | ErrorCode::E0008
        )
    }

    /// Check if this is a parser/syntax error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        !self.is_reader_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1016"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
