//! Read-only views over the session: history, pool, summary, breakdown and
//! the JSON export.

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{BarChart, Table, TableColumn};
use crate::currency::{format_date, format_percent};

const CHART_WIDTH: usize = 30;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "history",
            "List every recorded transaction",
            "history",
            cmd_history,
        ),
        CommandEntry::new("pool", "Show the house pool balance", "pool", cmd_pool),
        CommandEntry::new(
            "summary",
            "Show totals, balance and the remaining budget",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "breakdown",
            "Chart expenses per category",
            "breakdown",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "export",
            "Print the session as JSON",
            "export",
            cmd_export,
        ),
    ]
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transactions = context.session.transactions();
    if transactions.is_empty() {
        io::print_info("No transactions recorded yet.");
        return Ok(());
    }
    let mut table = Table::new(
        Some("Transaction History"),
        vec![
            TableColumn::new("Date"),
            TableColumn::new("Description"),
            TableColumn::numeric("Amount"),
            TableColumn::new("Category"),
        ],
    );
    for txn in transactions {
        table.add_row(vec![
            format_date(txn.date),
            txn.description.clone(),
            context.format_amount(txn.amount),
            txn.category.clone(),
        ]);
    }
    io::println_text(&table.render());
    Ok(())
}

fn cmd_pool(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!(
        "House pool balance: {}",
        context.format_amount(context.session.house_pool())
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summarize();
    let allocation = format_percent(context.session.rules().allocation_rate());

    io::print_section("Summary");
    io::print_info(format!(
        "Total Income: {}",
        context.format_amount(summary.total_income)
    ));
    io::print_info(format!(
        "Total Expenses: {}",
        context.format_amount(summary.total_expenses)
    ));
    io::print_info(format!(
        "Current Balance: {}",
        context.format_amount(summary.balance)
    ));

    io::print_section("Budget Status");
    io::print_info(format!(
        "Total {} Allocation: {}",
        allocation,
        context.format_amount(summary.total_allocation)
    ));
    io::print_info(format!(
        "Total Expenses: {}",
        context.format_amount(summary.allocation_spent())
    ));
    io::print_info(format!(
        "Remaining Budget: {}",
        context.format_amount(summary.remaining_budget)
    ));
    Ok(())
}

fn cmd_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summarize();
    if summary.expense_breakdown.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }
    let mut chart = BarChart::new(CHART_WIDTH);
    for (category, amount) in &summary.expense_breakdown {
        chart.add_bar(category.as_str(), *amount);
    }
    io::print_section("Expense Breakdown");
    io::println_text(&chart.render(|value| context.format_amount(value)));
    Ok(())
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.session.snapshot())?;
    io::println_text(&json);
    Ok(())
}
