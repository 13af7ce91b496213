//! Inspection commands: `read` and `parse`.

use tracing::debug;
use yin_diagnostic::emitter::ColorMode;
use yin_ir::{print_expr, print_pre, ExprKind, FileId, StringInterner};

use super::{read_file, report_error};

/// The only file a single invocation works on.
const MAIN_FILE: FileId = FileId::new(1);

/// Read a file and print its pre-AST, one top-level form per line.
pub fn read_file_command(path: &str, color: ColorMode) {
    let content = read_file(path);
    let interner = StringInterner::new();
    match yin_reader::read(&content, MAIN_FILE, &interner) {
        Ok(pre) => {
            let printed = print_pre(&pre, &interner);
            if !printed.is_empty() {
                println!("{printed}");
            }
        }
        Err(err) => report_error(&err.to_diagnostic(), path, &content, color),
    }
}

/// Parse a file and print its AST, one top-level form per line.
pub fn parse_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let interner = StringInterner::new();
    match yin_parse::parse(&content, MAIN_FILE, &interner) {
        Ok(root) => {
            let ExprKind::Block(statements) = &root.kind else {
                println!("{}", print_expr(&root, &interner));
                return;
            };
            debug!(path, statements = statements.len(), "parsed");
            for statement in statements {
                println!("{}", print_expr(statement, &interner));
            }
        }
        Err(err) => {
            debug!(path, code = %err.code, category = %err.category(), "parse failed");
            report_error(&err.to_diagnostic(), path, &content, color);
        }
    }
}
