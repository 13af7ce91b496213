//! Command handlers for the Yin CLI.
//!
//! Shared utilities like `read_file` and `report_error` live here in the
//! module root.

use std::io::IsTerminal;

use yin_diagnostic::emitter::{ColorMode, DiagnosticEmitter, SourceInfo, TerminalEmitter};
use yin_diagnostic::Diagnostic;

mod debug;
mod explain;

pub use debug::{parse_file, read_file_command};
pub use explain::explain_error;

/// Pick the color mode from trailing options.
///
/// Exits with a usage message on an unknown option or mode.
pub fn parse_color_flag(options: &[String]) -> ColorMode {
    let mut mode = ColorMode::Auto;
    for option in options {
        let Some(value) = option.strip_prefix("--color=") else {
            eprintln!("error: unknown option '{option}'");
            std::process::exit(1);
        };
        let Some(parsed) = ColorMode::from_flag(value) else {
            eprintln!("error: invalid color mode '{value}' (expected auto, always or never)");
            std::process::exit(1);
        };
        mode = parsed;
    }
    mode
}

/// Read a source file, exiting with an error message if it can't be read.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render one diagnostic against its source file and exit with status 1.
fn report_error(diagnostic: &Diagnostic, path: &str, content: &str, color: ColorMode) -> ! {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter =
        TerminalEmitter::stderr(color, is_tty).with_source(SourceInfo::new(path, content));
    emitter.emit(diagnostic);
    emitter.emit_summary(1);
    emitter.flush();
    std::process::exit(1);
}
