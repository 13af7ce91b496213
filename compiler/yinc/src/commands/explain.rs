//! The `explain` command: display documentation for error codes.

use yin_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Reader errors are E0001-E0008, parser errors E1001-E1018.");
        std::process::exit(1);
    };

    match ErrorDocs::get(code) {
        Some(doc) => println!("{doc}"),
        None => println!("{code}: {}", code.description()),
    }
}
