use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change household defaults",
        "config [show|set <key> <value>|save]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|sub| sub.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            show_config(context);
            Ok(())
        }
        Some("set") => {
            let (Some(key), Some(_)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <key> <value> (keys: {})",
                    CONFIG_KEYS.join(", ")
                )));
            };
            let value = args[2..].join(" ");
            let mut updated = context.config.clone();
            updated.set_value(key, &value)?;
            context.session.apply_config(&updated)?;
            context.config = updated;
            io::print_success(format!("{} set to {}.", key, value));
            Ok(())
        }
        Some("save") => {
            context.config.categories = context.session.categories().names().to_vec();
            context.config_manager.save(&context.config)?;
            io::print_success(format!(
                "Configuration saved to {}.",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`; use `show`, `set` or `save`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    io::print_section("Configuration");
    io::print_info(format!("  currency_symbol      : {}", config.currency_symbol));
    io::print_info(format!("  savings_rate         : {}", config.savings_rate));
    io::print_info(format!(
        "  default_rent         : {}",
        context.format_amount(config.default_rent)
    ));
    io::print_info(format!("  roommate_count       : {}", config.roommate_count));
    io::print_info(format!(
        "  roommate_contribution: {}",
        context.format_amount(config.roommate_contribution)
    ));
    io::print_info(format!("  categories           : {}", config.categories.join(", ")));
    io::print_info(format!(
        "  file                 : {}",
        context.config_manager.path().display()
    ));
}
