use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms::{self, IncomeFormData};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::currency::format_percent;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "income",
        "Add weekly income and set aside savings",
        "income <amount> [payday YYYY-MM-DD]",
        cmd_income,
    )]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let form = if context.wants_form(args) {
        forms::income_form(context.theme(), context.today())?
    } else {
        let raw = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("usage: income <amount> [payday]".into())
        })?;
        IncomeFormData {
            amount: forms::parse_amount(raw, "weekly income")?,
            date: forms::date_arg(args, 1, context.today())?,
        }
    };

    let receipt = context.session.add_income(form.date, form.amount);
    let allocation_rate = context.session.rules().allocation_rate();
    io::print_success(format!(
        "Weekly income of {} added for {}.",
        context.format_amount(receipt.weekly_income),
        form.date
    ));
    io::print_info(format!(
        "Amount available for expenses ({}): {}",
        format_percent(allocation_rate),
        context.format_amount(receipt.expenses_budget)
    ));
    Ok(())
}
