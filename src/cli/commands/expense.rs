use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms::{self, ExpenseFormData};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::CategoryService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expense",
        "Add an expense under one of the listed categories",
        "expense <amount> <category> [description] [date YYYY-MM-DD]",
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let form = if context.wants_form(args) {
        let categories = context.session.categories().names().to_vec();
        forms::expense_form(context.theme(), &categories, context.today())?
    } else {
        if args.len() < 2 {
            return Err(CommandError::InvalidArguments(
                "usage: expense <amount> <category> [description] [date]".into(),
            ));
        }
        let amount = forms::parse_amount(args[0], "expense amount")?;
        let categories = context.session.categories();
        let category = match CategoryService::resolve(categories, args[1]) {
            Ok(category) => category.to_string(),
            Err(err) => {
                if let Some(candidate) = CategoryService::suggest(categories, args[1]) {
                    io::print_warning(format!("Did you mean `{}`?", candidate));
                }
                return Err(err.into());
            }
        };
        ExpenseFormData {
            amount,
            category,
            description: args.get(2).map(|value| value.to_string()).unwrap_or_default(),
            date: forms::date_arg(args, 3, context.today())?,
        }
    };

    context
        .session
        .add_expense(form.date, form.description, form.amount, form.category.as_str());
    io::print_success(format!(
        "Expense of {} added to {} category.",
        context.format_amount(form.amount),
        form.category
    ));
    Ok(())
}
