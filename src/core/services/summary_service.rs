//! Aggregation helpers for income, expense and budget summaries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::errors::{BudgetError, Result};
use crate::ledger::{Ledger, Transaction, SAVINGS, WEEKLY_INCOME};

/// Splits each weekly income into a savings deduction and an expense allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetRules {
    savings_rate: Decimal,
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self {
            savings_rate: dec!(0.3),
        }
    }
}

impl BudgetRules {
    pub fn new(savings_rate: Decimal) -> Result<Self> {
        if savings_rate < Decimal::ZERO || savings_rate > Decimal::ONE {
            return Err(BudgetError::InvalidArgument(format!(
                "savings rate must be between 0 and 1, got {}",
                savings_rate
            )));
        }
        Ok(Self { savings_rate })
    }

    pub fn savings_rate(&self) -> Decimal {
        self.savings_rate
    }

    /// Share of weekly income available for expenses.
    pub fn allocation_rate(&self) -> Decimal {
        Decimal::ONE - self.savings_rate
    }
}

/// Snapshot of every derived figure shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    /// Outflows per category, as positive amounts.
    pub expense_breakdown: BTreeMap<String, Decimal>,
    pub total_allocation: Decimal,
    /// Non-savings outflows; zero or negative.
    pub expenses_from_allocation: Decimal,
    pub remaining_budget: Decimal,
}

impl BudgetSummary {
    /// Amount of the allocation already spent, as a positive figure.
    pub fn allocation_spent(&self) -> Decimal {
        self.expenses_from_allocation.abs()
    }
}

/// Read-only aggregation over a [`Ledger`]. Every call recomputes from the
/// full transaction list.
pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger, rules: &BudgetRules) -> BudgetSummary {
        let total_income = Self::total_income(ledger);
        let total_expenses = Self::total_expenses(ledger);
        let total_allocation = Self::total_allocation(ledger, rules);
        let expenses_from_allocation = Self::expenses_from_allocation(ledger);
        BudgetSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            expense_breakdown: Self::expense_breakdown(ledger),
            total_allocation,
            expenses_from_allocation,
            remaining_budget: total_allocation + expenses_from_allocation,
        }
    }

    pub fn total_income(ledger: &Ledger) -> Decimal {
        ledger.sum_where(Transaction::is_inflow)
    }

    pub fn total_expenses(ledger: &Ledger) -> Decimal {
        ledger.sum_where(Transaction::is_outflow).abs()
    }

    pub fn expense_breakdown(ledger: &Ledger) -> BTreeMap<String, Decimal> {
        ledger
            .group_sum_by_category(Transaction::is_outflow)
            .into_iter()
            .map(|(category, total)| (category, -total))
            .collect()
    }

    /// Expense allocation earned across every weekly income recorded so far.
    pub fn total_allocation(ledger: &Ledger, rules: &BudgetRules) -> Decimal {
        ledger.sum_where(|txn| txn.has_description(WEEKLY_INCOME)) * rules.allocation_rate()
    }

    pub fn expenses_from_allocation(ledger: &Ledger) -> Decimal {
        ledger.sum_where(|txn| txn.is_outflow() && !txn.in_category(SAVINGS))
    }
}
