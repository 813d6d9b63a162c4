//! Fixed-point dollar formatting for display.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_SYMBOL: &str = "$";
const DISPLAY_PRECISION: u32 = 2;
const GROUPING_SEPARATOR: char = ',';

/// Formats `amount` as `$1,234.56`, with a leading `-` for negatives.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.prec$}", rounded.abs(), prec = DISPLAY_PRECISION as usize);
    let (int_part, fraction) = body.split_once('.').unwrap_or((body.as_str(), ""));
    let grouped = group_digits(int_part, GROUPING_SEPARATOR);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{sign}{symbol}{grouped}")
    } else {
        format!("{sign}{symbol}{grouped}.{fraction}")
    }
}

/// Renders a rate such as `0.3` as `30%`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
