use std::fmt;

use colored::Colorize;

/// Message categories used by the shell output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Enables or disables ANSI colours for every subsequent message.
pub fn configure(use_color: bool) {
    colored::control::set_override(use_color);
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Success => "[ok] ",
        MessageKind::Warning => "[!] ",
        MessageKind::Error => "[x] ",
        MessageKind::Section => "",
    }
}

pub(crate) fn render(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    if kind == MessageKind::Section {
        return format!("=== {} ===", text.trim()).bold().to_string();
    }
    let formatted = format!("{}{}", label(kind), text);
    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Info | MessageKind::Section => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let rendered = render(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", rendered),
        MessageKind::Error => eprintln!("{}", rendered),
        _ => println!("{}", rendered),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
