//! Field parsers and interactive forms for the three ledger actions.
//!
//! Amounts are clamped at this boundary: negative input is rejected here so
//! the core only ever sees non-negative figures.

use std::str::FromStr;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cli::core::CommandError;
use crate::currency::{format_currency, format_date, DEFAULT_SYMBOL};

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Largest amount accepted for a single entry.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// Parses a non-negative amount up to [`MAX_AMOUNT`], tolerating a leading
/// `$` and `,` separators.
pub fn parse_amount(raw: &str, field: &str) -> Result<Decimal, CommandError> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    let value = Decimal::from_str(&cleaned).map_err(|_| {
        CommandError::InvalidArguments(format!("{} must be a number, got `{}`", field, raw))
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CommandError::InvalidArguments(format!(
            "{} must not be negative",
            field
        )));
    }
    if value > MAX_AMOUNT {
        return Err(CommandError::InvalidArguments(format!(
            "{} must not exceed {}",
            field,
            format_currency(MAX_AMOUNT, DEFAULT_SYMBOL)
        )));
    }
    Ok(value)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (expected YYYY-MM-DD)", raw))
    })
}

/// Parses the optional date argument at `index`, falling back to `default`.
pub fn date_arg(
    args: &[&str],
    index: usize,
    default: NaiveDate,
) -> Result<NaiveDate, CommandError> {
    args.get(index)
        .map(|raw| parse_date(raw))
        .unwrap_or(Ok(default))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeFormData {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFormData {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentFormData {
    pub date: NaiveDate,
    pub total_rent: Decimal,
}

pub fn income_form(
    theme: &ColorfulTheme,
    default_date: NaiveDate,
) -> Result<IncomeFormData, CommandError> {
    let date = prompt_date(theme, "Payday", default_date)?;
    let amount = prompt_amount(theme, "Weekly income", Decimal::ZERO)?;
    Ok(IncomeFormData { date, amount })
}

pub fn expense_form(
    theme: &ColorfulTheme,
    categories: &[String],
    default_date: NaiveDate,
) -> Result<ExpenseFormData, CommandError> {
    if categories.is_empty() {
        return Err(CommandError::InvalidArguments(
            "no expense categories available; add one with `category add <name>`".into(),
        ));
    }
    let date = prompt_date(theme, "Expense date", default_date)?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Expense description")
        .allow_empty(true)
        .interact_text()?;
    let amount = prompt_amount(theme, "Expense amount", Decimal::ZERO)?;
    let index = Select::with_theme(theme)
        .with_prompt("Expense category")
        .items(categories)
        .default(0)
        .interact()?;
    Ok(ExpenseFormData {
        date,
        description,
        amount,
        category: categories[index].clone(),
    })
}

pub fn rent_form(
    theme: &ColorfulTheme,
    default_rent: Decimal,
    default_date: NaiveDate,
) -> Result<RentFormData, CommandError> {
    let date = prompt_date(theme, "Rent due date", default_date)?;
    let total_rent = prompt_amount(theme, "Total rent", default_rent)?;
    Ok(RentFormData { date, total_rent })
}

fn prompt_amount(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Decimal,
) -> Result<Decimal, CommandError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(format!("{:.2}", default))
        .validate_with(|input: &String| -> Result<(), String> {
            parse_amount(input, prompt)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;
    parse_amount(&raw, prompt)
}

fn prompt_date(
    theme: &ColorfulTheme,
    prompt: &str,
    default: NaiveDate,
) -> Result<NaiveDate, CommandError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
        .default(format_date(default))
        .validate_with(|input: &String| -> Result<(), String> {
            parse_date(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    parse_date(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_accept_symbols_and_separators() {
        assert_eq!(parse_amount("$3,299.29", "rent").unwrap(), dec!(3299.29));
        assert_eq!(parse_amount(" 0 ", "income").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = parse_amount("-5", "expense amount").unwrap_err();
        assert_eq!(err.to_string(), "expense amount must not be negative");
    }

    #[test]
    fn amounts_above_the_cap_are_rejected() {
        assert_eq!(parse_amount("1000000000", "income").unwrap(), MAX_AMOUNT);
        let err = parse_amount("79228162514264337593543950335", "weekly income").unwrap_err();
        assert_eq!(
            err.to_string(),
            "weekly income must not exceed $1,000,000,000.00"
        );
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        assert!(parse_amount("ten", "income").is_err());
    }

    #[test]
    fn date_arg_defaults_when_missing() {
        let fallback = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_arg(&["100"], 1, fallback).unwrap(), fallback);
        assert_eq!(
            date_arg(&["100", "2024-02-29"], 1, fallback).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(date_arg(&["100", "29/02/2024"], 1, fallback).is_err());
    }
}
