//! Recursive reader from source text to the pre-AST.
//!
//! One function per node shape. Tuples recurse through [`Reader::read_node`],
//! which grows the stack on demand, so nesting depth is bounded only by
//! memory.

use std::num::IntErrorKind;

use tracing::{debug, trace};
use yin_ir::{Delimiter, FileId, Ident, PreKind, PreNode, Span, StringInterner};
use yin_stack::ensure_sufficient_stack;

use crate::cursor::{Cursor, Mark};
use crate::{ReadError, ReadErrorKind};

/// Characters that may appear in a name or keyword.
///
/// `.` is excluded so that `a.b` splits into attribute access.
#[inline]
fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | '"' | '.')
}

pub(crate) struct Reader<'a> {
    cursor: Cursor<'a>,
    file: FileId,
    interner: &'a StringInterner,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a str, file: FileId, interner: &'a StringInterner) -> Self {
        Reader {
            cursor: Cursor::new(source),
            file,
            interner,
        }
    }

    /// Read the whole input as a top-level `Block`.
    pub fn read_program(mut self) -> Result<PreNode, ReadError> {
        debug!(file = self.file.raw(), bytes = self.cursor.source_len(), "read_program");
        let start = self.cursor.mark();
        let mut statements = Vec::new();
        loop {
            self.skip_trivia();
            let Some(c) = self.cursor.current() else {
                break;
            };
            if let Some(close) = Delimiter::from_close(c) {
                let span = self.char_span(self.cursor.mark(), c);
                return Err(ReadError::new(ReadErrorKind::UnexpectedCloser { close }, span));
            }
            statements.push(self.read_node(c)?);
        }
        debug!(statements = statements.len(), "read_program done");
        Ok(PreNode::new(
            PreKind::Block(statements),
            self.cursor.span_from(self.file, start),
        ))
    }

    /// Skip whitespace and `--` line comments.
    fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_while(char::is_whitespace);
            if self.cursor.current() == Some('-') && self.cursor.peek_nth(1) == Some('-') {
                self.cursor.skip_line();
            } else {
                break;
            }
        }
    }

    /// Read one node starting at `first`, which is neither whitespace nor a
    /// closing delimiter.
    fn read_node(&mut self, first: char) -> Result<PreNode, ReadError> {
        ensure_sufficient_stack(|| self.read_node_inner(first))
    }

    fn read_node_inner(&mut self, first: char) -> Result<PreNode, ReadError> {
        let start = self.cursor.mark();
        if let Some(open) = Delimiter::from_open(first) {
            let tuple = self.read_tuple(open)?;
            return self.read_postfix(tuple, start);
        }
        match first {
            '"' => self.read_string(),
            ':' => self.read_keyword(),
            '.' => {
                self.cursor.bump();
                Err(ReadError::new(
                    ReadErrorKind::DanglingAttr,
                    self.cursor.span_from(self.file, start),
                ))
            }
            c if self.starts_number(c) => self.read_number(),
            _ => {
                self.cursor.eat_while(is_name_char);
                let name = self.interner.intern(self.cursor.slice_from(start));
                let node = PreNode::new(PreKind::Name(name), self.cursor.span_from(self.file, start));
                self.read_postfix(node, start)
            }
        }
    }

    #[inline]
    fn starts_number(&self, c: char) -> bool {
        c.is_ascii_digit()
            || (matches!(c, '+' | '-') && self.cursor.peek_nth(1).is_some_and(|d| d.is_ascii_digit()))
    }

    fn read_tuple(&mut self, open: Delimiter) -> Result<PreNode, ReadError> {
        let start = self.cursor.mark();
        trace!(delimiter = ?open, line = start.line, col = start.col, "read_tuple");
        self.cursor.bump();
        let mut elements = Vec::new();
        loop {
            self.skip_trivia();
            let Some(c) = self.cursor.current() else {
                return Err(ReadError::new(
                    ReadErrorKind::UnclosedDelimiter { open },
                    self.char_span(start, open.open_char()),
                ));
            };
            if let Some(close) = Delimiter::from_close(c) {
                if close != open {
                    let span = self.char_span(self.cursor.mark(), c);
                    return Err(ReadError::new(
                        ReadErrorKind::MismatchedCloser {
                            open,
                            open_span: self.char_span(start, open.open_char()),
                            close,
                        },
                        span,
                    ));
                }
                self.cursor.bump();
                break;
            }
            elements.push(self.read_node(c)?);
        }
        Ok(PreNode::tuple(open, elements, self.cursor.span_from(self.file, start)))
    }

    /// Apply any `.name` suffixes to `node`, which began at `start`.
    fn read_postfix(&mut self, mut node: PreNode, start: Mark) -> Result<PreNode, ReadError> {
        while self.cursor.current() == Some('.') {
            let dot = self.cursor.mark();
            self.cursor.bump();
            let attr_start = self.cursor.mark();
            self.cursor.eat_while(is_name_char);
            if attr_start == self.cursor.mark() {
                return Err(ReadError::new(
                    ReadErrorKind::DanglingAttr,
                    self.cursor.span_from(self.file, dot),
                ));
            }
            let attr = Ident::new(
                self.interner.intern(self.cursor.slice_from(attr_start)),
                self.cursor.span_from(self.file, attr_start),
            );
            node = PreNode::new(
                PreKind::Attr {
                    value: Box::new(node),
                    attr,
                },
                self.cursor.span_from(self.file, start),
            );
        }
        Ok(node)
    }

    fn read_keyword(&mut self) -> Result<PreNode, ReadError> {
        let start = self.cursor.mark();
        self.cursor.bump();
        let name_start = self.cursor.mark();
        self.cursor.eat_while(is_name_char);
        if name_start == self.cursor.mark() {
            return Err(ReadError::new(
                ReadErrorKind::EmptyKeyword,
                self.cursor.span_from(self.file, start),
            ));
        }
        let name = self.interner.intern(self.cursor.slice_from(name_start));
        Ok(PreNode::new(
            PreKind::Keyword(name),
            self.cursor.span_from(self.file, start),
        ))
    }

    fn read_number(&mut self) -> Result<PreNode, ReadError> {
        let start = self.cursor.mark();
        self.cursor.bump();
        loop {
            match self.cursor.current() {
                Some(c) if is_name_char(c) => {
                    self.cursor.bump();
                }
                Some('.') if self.cursor.peek_nth(1).is_some_and(|d| d.is_ascii_digit()) => {
                    self.cursor.bump();
                }
                _ => break,
            }
        }
        let text = self.cursor.slice_from(start);
        let span = self.cursor.span_from(self.file, start);
        let digits: String = text.chars().filter(|&c| c != '_').collect();
        let invalid = |overflow: bool| {
            ReadError::new(
                ReadErrorKind::InvalidNumber {
                    text: text.to_string(),
                    overflow,
                },
                span,
            )
        };

        let kind = if digits.contains(['.', 'e', 'E']) {
            let value: f64 = digits.parse().map_err(|_| invalid(false))?;
            if value.is_infinite() {
                return Err(invalid(true));
            }
            PreKind::Float(value.to_bits())
        } else {
            let value: i64 = digits.parse().map_err(|e: std::num::ParseIntError| {
                invalid(matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ))
            })?;
            PreKind::Int(value)
        };
        Ok(PreNode::new(kind, span))
    }

    fn read_string(&mut self) -> Result<PreNode, ReadError> {
        let start = self.cursor.mark();
        self.cursor.bump();
        let mut value = String::new();
        loop {
            let segment = self.cursor.mark();
            let found = self.cursor.skip_to_string_delim();
            value.push_str(self.cursor.slice_from(segment));
            match found {
                Some(b'"') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {
                    let escape_start = self.cursor.mark();
                    self.cursor.bump();
                    let unescaped = match self.cursor.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('\\') => '\\',
                        Some('"') => '"',
                        Some('0') => '\0',
                        Some(escape) => {
                            return Err(ReadError::new(
                                ReadErrorKind::InvalidEscape { escape },
                                self.cursor.span_from(self.file, escape_start),
                            ));
                        }
                        None => return Err(self.unterminated_string(start)),
                    };
                    value.push(unescaped);
                }
                None => return Err(self.unterminated_string(start)),
            }
        }
        let name = self.interner.intern(&value);
        Ok(PreNode::new(
            PreKind::Str(name),
            self.cursor.span_from(self.file, start),
        ))
    }

    #[cold]
    fn unterminated_string(&self, start: Mark) -> ReadError {
        ReadError::new(
            ReadErrorKind::UnterminatedString,
            self.cursor.span_from(self.file, start),
        )
    }

    /// Span of the single character `c` at `at`.
    #[inline]
    fn char_span(&self, at: Mark, c: char) -> Span {
        at.span(self.file, c.len_utf8())
    }
}
