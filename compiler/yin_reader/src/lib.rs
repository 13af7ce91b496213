//! Yin reader: source text to pre-AST.
//!
//! The reader knows only brackets, atoms and attribute access. It does not
//! know about special forms; `(if a b c)` and `(f a b c)` read to the same
//! shape. Giving lists meaning is the parser's job.
//!
//! Reading stops at the first error.

mod cursor;
mod read_error;
mod reader;

pub use read_error::{ReadError, ReadErrorKind};

use yin_ir::{FileId, PreNode, StringInterner};

/// Read a whole source file into a pre-AST `Block`.
///
/// The block spans the entire file. Names, keywords and string contents are
/// interned into `interner`.
pub fn read(source: &str, file: FileId, interner: &StringInterner) -> Result<PreNode, ReadError> {
    reader::Reader::new(source, file, interner).read_program()
}
