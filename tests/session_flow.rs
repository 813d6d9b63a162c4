mod common;

use house_ledger::core::services::{BudgetRules, RentService, RentTerms, SummaryService};
use house_ledger::core::Session;
use house_ledger::errors::BudgetError;
use house_ledger::ledger::{Ledger, INCOME, RENT, SAVINGS};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::date;

fn sample_session() -> Session {
    let mut session = Session::new();
    session.add_income(date(2024, 10, 4), dec!(1000));
    session.add_expense(date(2024, 10, 5), "Market", dec!(54.20), "Groceries");
    session.add_expense(date(2024, 10, 6), "Bus pass", dec!(30), "Transportation");
    session
        .split_rent(date(2024, 10, 1), dec!(3299.29))
        .unwrap();
    session.add_income(date(2024, 10, 11), dec!(1000));
    session
}

#[test]
fn balance_is_income_minus_expenses() {
    let summary = sample_session().summarize();
    assert_eq!(summary.total_income, dec!(3700));
    assert_eq!(summary.total_expenses, dec!(3983.49));
    assert_eq!(summary.balance, summary.total_income - summary.total_expenses);
}

#[test]
fn breakdown_matches_total_expenses() {
    let summary = sample_session().summarize();
    let breakdown_total: Decimal = summary.expense_breakdown.values().copied().sum();
    assert_eq!(breakdown_total, summary.total_expenses);
    assert_eq!(summary.expense_breakdown[SAVINGS], dec!(600));
    assert_eq!(summary.expense_breakdown[RENT], dec!(3299.29));
    assert!(!summary.expense_breakdown.contains_key(INCOME));
}

#[test]
fn remaining_budget_ignores_savings() {
    let summary = sample_session().summarize();
    assert_eq!(summary.total_allocation, dec!(1400));
    assert_eq!(summary.expenses_from_allocation, dec!(-3383.49));
    assert_eq!(summary.remaining_budget, dec!(-1983.49));
    assert_eq!(summary.allocation_spent(), dec!(3383.49));
}

#[test]
fn summaries_do_not_depend_on_transaction_order() {
    let session = sample_session();
    let mut reversed = Ledger::new();
    for txn in session.transactions().iter().rev() {
        reversed.add_transaction(txn.clone());
    }
    let rules = BudgetRules::default();
    assert_eq!(
        SummaryService::summarize(&reversed, &rules),
        SummaryService::summarize(session.ledger(), &rules)
    );
}

#[test]
fn summarizing_twice_gives_the_same_result() {
    let session = sample_session();
    assert_eq!(session.summarize(), session.summarize());
    assert_eq!(session.ledger().len(), 8);
}

#[test]
fn empty_session_summarizes_to_zero() {
    let summary = Session::new().summarize();
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert_eq!(summary.balance, Decimal::ZERO);
    assert!(summary.expense_breakdown.is_empty());
    assert_eq!(summary.remaining_budget, Decimal::ZERO);
}

#[test]
fn rent_split_feeds_the_house_pool() {
    let mut session = Session::new();
    let first = session.split_rent(date(2024, 10, 1), dec!(3299.29)).unwrap();
    assert_eq!(first.split.excess, dec!(50.355));
    let second = session.split_rent(date(2024, 11, 1), dec!(4000)).unwrap();
    assert_eq!(second.split.excess, Decimal::ZERO);
    assert_eq!(session.house_pool(), dec!(50.355));
    let third = session.split_rent(date(2024, 12, 1), dec!(1600)).unwrap();
    assert_eq!(third.house_pool_balance, dec!(950.355));
}

#[test]
fn rejected_rent_split_records_nothing() {
    let terms = RentTerms::new(0, dec!(1700));
    assert!(matches!(
        RentService::split(dec!(3000), &terms),
        Err(BudgetError::InvalidArgument(_))
    ));

    let mut session =
        Session::with_rules(BudgetRules::default(), terms, Default::default());
    assert!(session.split_rent(date(2024, 10, 1), dec!(3000)).is_err());
    assert!(session.ledger().is_empty());
    assert_eq!(session.house_pool(), Decimal::ZERO);
}
