use std::fmt;

use crate::cli::output;

/// Print an informational message via the standard output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_section(title: impl fmt::Display) {
    output::section(title);
}

/// Prints pre-rendered text such as tables and charts verbatim.
pub fn println_text(text: &str) {
    println!("{}", text);
}
