//! Diagnostic system for Yin front-end errors.
//!
//! Every reader and parser failure becomes a [`Diagnostic`] carrying:
//! - an [`ErrorCode`] for searchability and `yin explain`
//! - a message saying what went wrong
//! - a primary label pointing at the offending source
//! - optional secondary labels and suggestions
//!
//! Emitters in [`emitter`] render diagnostics; [`ErrorDocs`] holds the long
//! form explanation of each code.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
