//! Diagnostic Emitters
//!
//! Each emitter implements the `DiagnosticEmitter` trait. The terminal
//! emitter is the only output format; it renders colored, human-readable
//! reports with a source snippet when the file content is available.

mod terminal;

pub use terminal::{ColorMode, SourceInfo, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing "aborting due to" line.
    fn emit_summary(&mut self, error_count: usize);
}
