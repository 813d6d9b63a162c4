use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::CategoryService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List or add expense categories",
        "category [list|add <name>]",
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|sub| sub.to_ascii_lowercase()).as_deref() {
        None | Some("list") => {
            io::print_section("Expense categories");
            for name in context.session.categories().names() {
                io::print_info(format!("  {}", name));
            }
            Ok(())
        }
        Some("add") => {
            let name = args[1..].join(" ");
            let added = CategoryService::add(context.session.categories_mut(), &name)?;
            io::print_success(format!("Category `{}` added.", added));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`; use `list` or `add <name>`",
            other
        ))),
    }
}
