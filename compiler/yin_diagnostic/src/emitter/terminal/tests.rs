#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use yin_ir::FileId;

const SOURCE: &str = "(record Point [x Int] [x Int])\n(print 1)\n";

fn sp(start: u32, end: u32, line: u32, col: u32) -> Span {
    Span::new(FileId::DUMMY, start, end, line, col)
}

fn duplicate_field() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1016)
        .with_message("duplicated field name: x")
        .with_label(sp(22, 29, 1, 23), "duplicated field name")
}

fn render(mode: ColorMode, is_tty: bool, source: Option<SourceInfo>, diag: &Diagnostic) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, is_tty);
        if let Some(source) = source {
            emitter = emitter.with_source(source);
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_snippet_rendering() {
    let text = render(
        ColorMode::Never,
        false,
        Some(SourceInfo::new("shapes.yin", SOURCE)),
        &duplicate_field(),
    );
    let expected = "\
error[E1016]: duplicated field name: x
  --> shapes.yin:1:23
  |
1 | (record Point [x Int] [x Int])
  |                       ^^^^^^^ duplicated field name

";
    assert_eq!(text, expected);
}

#[test]
fn test_snippet_on_later_line() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("syntax error")
        .with_label(sp(38, 39, 2, 8), "");
    let text = render(
        ColorMode::Never,
        false,
        Some(SourceInfo::new("a.yin", SOURCE)),
        &diag,
    );
    assert!(text.contains("--> a.yin:2:8"), "got:\n{text}");
    assert!(text.contains("2 | (print 1)"), "got:\n{text}");
    assert!(text.contains("  |        ^\n"), "got:\n{text}");
}

#[test]
fn test_without_source_prints_location_inline() {
    let text = render(ColorMode::Never, false, None, &duplicate_field());
    assert_eq!(
        text,
        "error[E1016]: duplicated field name: x\n  --> 1:23: duplicated field name\n\n"
    );
}

#[test]
fn test_out_of_range_span_falls_back_to_inline() {
    let diag = Diagnostic::error(ErrorCode::E0004)
        .with_message("unclosed delimiter")
        .with_label(sp(500, 501, 40, 1), "opened here");
    let text = render(
        ColorMode::Never,
        false,
        Some(SourceInfo::new("a.yin", SOURCE)),
        &diag,
    );
    assert!(text.contains("--> a.yin:40:1: opened here"), "got:\n{text}");
}

#[test]
fn test_secondary_label_marker() {
    let diag = duplicate_field().with_secondary_label(sp(15, 16, 1, 16), "first defined here");
    let text = render(ColorMode::Never, false, None, &diag);
    assert!(text.contains("::: 1:16: first defined here"), "got:\n{text}");
}

#[test]
fn test_suggestions() {
    let diag = duplicate_field().with_suggestion("rename the second `x`");
    let text = render(ColorMode::Never, false, None, &diag);
    assert!(text.contains("  = help: rename the second `x`"));
}

#[test]
fn test_emit_summary_single_error() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(1);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "error: aborting due to previous error\n");
}

#[test]
fn test_emit_summary_several_errors() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "error: aborting due to 2 previous errors
");
}

#[test]
fn test_emit_summary_nothing() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(0);
    emitter.flush();
    assert!(output.is_empty());
}

// --- ColorMode Tests ---

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_from_flag() {
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::from_flag("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
}

#[test]
fn test_with_color_mode_always() {
    let text = render(ColorMode::Always, false, None, &duplicate_field());
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1016"));
}

#[test]
fn test_with_color_mode_never_on_tty() {
    let text = render(ColorMode::Never, true, None, &duplicate_field());
    assert!(!text.contains("\x1b["));
}
