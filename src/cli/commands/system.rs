use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn};
use crate::utils::build_info::CURRENT as BUILD;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "List commands, or explain one",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new(
            "version",
            "Print version and build details",
            "version",
            cmd_version,
        ),
        CommandEntry::new(
            "exit",
            "Leave the shell (the session is not kept)",
            "exit",
            cmd_exit,
        ),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(&name) = args.first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.command(&name.to_lowercase()) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(name),
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut table = Table::new(
        Some(format!("House Ledger {}", BUILD.version)),
        vec![TableColumn::new("Field"), TableColumn::new("Value")],
    );
    for (label, value) in BUILD.fields() {
        table.add_row(vec![label.to_string(), value]);
    }
    io::println_text(&table.render());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
