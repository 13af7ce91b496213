//! Yin IR - Intermediate Representation Types
//!
//! This crate contains the core data structures shared by the Yin front end:
//! - Spans for source locations (file, byte range, line and column)
//! - Names for interned identifiers
//! - The pre-AST produced by the reader
//! - The typed AST produced by the parser, including property tables
//! - Pre-interned special-form names
//! - An S-expression printer for both trees
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers, keywords and string contents are `Name(u32)`
//! - **Own the Tree**: children are boxed or held in `Vec`s; the parser builds
//!   each tree once and never mutates it afterwards
//! - **Interface Segregation**: Focused traits (Spanned, Named)
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod pre_ast;
mod printer;
mod span;
mod special_forms;
mod traits;

pub use ast::{Attributes, Expr, ExprKind, Ident, Properties};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use pre_ast::{Delimiter, PreKind, PreNode};
pub use printer::{print_expr, print_pre};
pub use span::{FileId, Span, SpanError};
pub use special_forms::{SpecialForm, SpecialForms};
pub use traits::{Named, Spanned};
