use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::forms::{self, RentFormData};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "rent",
        "Split the monthly rent and move any excess into the house pool",
        "rent [total] [due date YYYY-MM-DD]",
        cmd_rent,
    )]
}

fn cmd_rent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let default_rent = context.config.default_rent;
    let form = if context.wants_form(args) {
        forms::rent_form(context.theme(), default_rent, context.first_of_month())?
    } else {
        RentFormData {
            total_rent: match args.first() {
                Some(raw) => forms::parse_amount(raw, "total rent")?,
                None => default_rent,
            },
            date: forms::date_arg(args, 1, context.first_of_month())?,
        }
    };

    let receipt = context.session.split_rent(form.date, form.total_rent)?;
    let split = receipt.split;
    io::print_info(format!(
        "Individual share: {}",
        context.format_amount(split.individual_share)
    ));
    io::print_info(format!("Your share: {}", context.format_amount(split.your_share)));
    io::print_info(format!(
        "Excess for house pool: {}",
        context.format_amount(split.excess)
    ));
    io::print_success(format!(
        "Rent of {} recorded for {}. House pool balance: {}",
        context.format_amount(split.total_rent),
        form.date,
        context.format_amount(receipt.house_pool_balance)
    ));
    Ok(())
}
