//! Yin front-end CLI.
//!
//! Reads and parses Yin source files and explains error codes.

mod commands;

use std::sync::Once;

use commands::{explain_error, parse_color_flag, parse_file, read_file_command};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Enable with e.g. `RUST_LOG=yin_parse=debug` or `RUST_LOG=yin_reader=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "read" | "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: yin {command} <file.yin> [--color=auto|always|never]");
                std::process::exit(1);
            }
            let color = parse_color_flag(&args[3..]);
            if command == "read" {
                read_file_command(&args[2], color);
            } else {
                parse_file(&args[2], color);
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: yin explain <ERROR_CODE>");
                eprintln!("Example: yin explain E1016");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Yin front end {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Yin front end");
    println!();
    println!("Usage: yin <command> [options]");
    println!();
    println!("Commands:");
    println!("  read <file.yin>      Read a file and print its pre-AST");
    println!("  parse <file.yin>     Parse a file and print its AST");
    println!("  explain <code>       Explain an error code (e.g., E1016)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=yin_parse=debug");
    println!();
    println!("Examples:");
    println!("  yin parse main.yin");
    println!("  yin read main.yin --color=never");
    println!("  yin explain E1010               # Explain mixed parameter styles");
}
