//! Typed AST produced by the parser.
//!
//! # Module Structure
//!
//! - `expr`: Core expression types (`Expr`, `ExprKind`, `Ident`)
//! - `properties`: Ordered field/parameter tables (`Properties`, `Attributes`)

mod expr;
mod properties;

pub use expr::{Expr, ExprKind, Ident};
pub use properties::{Attributes, Properties};
