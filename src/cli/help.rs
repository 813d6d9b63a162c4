use crate::cli::io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::table::{Table, TableColumn};

pub fn print_overview(registry: &CommandRegistry) {
    let mut table = Table::new(
        Some("Available commands"),
        vec![TableColumn::new("Command"), TableColumn::new("Description")],
    );
    for entry in registry.list() {
        table.add_row(vec![entry.name, entry.description]);
    }
    io::println_text(&table.render());
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    io::print_section(format!("Help: {}", entry.name));
    io::print_info(format!("  description: {}", entry.description));
    io::print_info(format!("  usage      : {}", entry.usage));
}
