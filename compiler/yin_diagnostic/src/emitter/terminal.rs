//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E1016]: duplicated field name: x
//!   --> shapes.yin:1:24
//!   |
//! 1 | (record Point [x Int] [x Int])
//!   |                        ^ duplicated field name
//! ```

use std::io::{self, Write};

use yin_ir::Span;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Path and content of the file diagnostics point into.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceInfo {
    /// Path as shown to the user.
    pub path: String,
    /// Full file content.
    pub content: String,
}

impl SourceInfo {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        SourceInfo {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The full text of the line containing `span.start`, if in range.
    fn line_of(&self, span: Span) -> Option<&str> {
        let start = span.start as usize;
        let before = self.content.get(..start)?;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let rest = &self.content[line_start..];
        let line_end = rest.find('\n').unwrap_or(rest.len());
        Some(rest[..line_end].trim_end_matches('\r'))
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceInfo>,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is whether `writer` is a terminal, used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file so labels render with a snippet.
    #[must_use]
    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_gutter(&mut self, width: usize, line: Option<u32>) {
        let number = line.map(|n| n.to_string()).unwrap_or_default();
        let text = format!("{number:>width$} |");
        self.write_colored(&text, colors::SECONDARY);
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { ":::" };
        let location = match &self.source {
            Some(src) => format!("{}:{}", src.path, label.span),
            None => label.span.to_string(),
        };
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let line_text = self
            .source
            .as_ref()
            .and_then(|src| src.line_of(label.span))
            .map(str::to_owned);

        let Some(line_text) = line_text else {
            let _ = write!(self.writer, "  {marker} {location}: ");
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let width = label.span.line.to_string().len().max(1);
        let _ = writeln!(self.writer, "{:pad$}{marker} {location}", "", pad = width + 1);
        self.write_gutter(width, None);
        let _ = writeln!(self.writer);
        self.write_gutter(width, Some(label.span.line));
        let _ = writeln!(self.writer, " {line_text}");
        self.write_gutter(width, None);

        // Underline starts at the label's column; tabs are kept so the
        // carets line up with the source line above.
        let col = label.span.col.saturating_sub(1) as usize;
        let pad: String = line_text
            .chars()
            .take(col)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let mut budget = label.span.len() as usize;
        let underline_len = line_text
            .chars()
            .skip(col)
            .take_while(|c| {
                let more = budget > 0;
                budget = budget.saturating_sub(c.len_utf8());
                more
            })
            .count()
            .max(1);
        let mark = if label.is_primary { "^" } else { "-" };
        let _ = write!(self.writer, " {pad}");
        self.write_colored(&mark.repeat(underline_len), color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}

#[cfg(test)]
mod tests;
