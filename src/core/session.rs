//! Explicit per-run state and the command handlers that mutate it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{
    BudgetRules, BudgetSummary, RentService, RentSplit, RentTerms, SummaryService,
};
use crate::currency::format_percent;
use crate::errors::{BudgetError, Result};
use crate::ledger::{
    CategoryList, HousePool, Ledger, Transaction, INCOME, RENT, RENT_PAYMENT,
    ROOMMATES_CONTRIBUTION, SAVINGS, WEEKLY_INCOME,
};

/// Outcome of recording a weekly income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeReceipt {
    pub income_id: Uuid,
    pub savings_id: Uuid,
    pub weekly_income: Decimal,
    pub savings: Decimal,
    /// Portion of this income available for expenses.
    pub expenses_budget: Decimal,
}

/// Outcome of a rent split, including the ledger entries it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentReceipt {
    pub split: RentSplit,
    pub payment_id: Uuid,
    pub contribution_id: Uuid,
    pub house_pool_balance: Decimal,
}

/// Serializable view of everything the presentation layer displays.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub transactions: &'a [Transaction],
    pub house_pool: Decimal,
    pub categories: &'a [String],
    pub summary: BudgetSummary,
}

/// Ledger, house pool and category list for one interactive run.
///
/// Created empty when the run starts and discarded with it; nothing is
/// written to disk.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    house_pool: HousePool,
    categories: CategoryList,
    rules: BudgetRules,
    rent_terms: RentTerms,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: BudgetRules, rent_terms: RentTerms, categories: CategoryList) -> Self {
        Self {
            ledger: Ledger::new(),
            house_pool: HousePool::new(),
            categories,
            rules,
            rent_terms,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_rules(
            config.budget_rules()?,
            config.rent_terms(),
            CategoryList::from_names(config.categories.iter().cloned()),
        ))
    }

    /// Replaces the budget rules and rent terms; recorded transactions,
    /// the pool and the category list are kept.
    ///
    /// The savings rate is frozen once a weekly income has been recorded,
    /// since the allocation is derived from income already split at the old
    /// rate. Nothing changes when the update is refused.
    pub fn apply_config(&mut self, config: &Config) -> Result<()> {
        let rules = config.budget_rules()?;
        if rules.savings_rate() != self.rules.savings_rate() && self.has_weekly_income() {
            warn!(
                current = %self.rules.savings_rate(),
                requested = %rules.savings_rate(),
                "refused savings rate change after income was recorded"
            );
            return Err(BudgetError::InvalidArgument(format!(
                "savings rate is fixed at {} once weekly income is recorded",
                format_percent(self.rules.savings_rate())
            )));
        }
        self.rules = rules;
        self.rent_terms = config.rent_terms();
        Ok(())
    }

    fn has_weekly_income(&self) -> bool {
        self.ledger
            .iter()
            .any(|txn| txn.has_description(WEEKLY_INCOME))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn house_pool(&self) -> Decimal {
        self.house_pool.balance()
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut CategoryList {
        &mut self.categories
    }

    pub fn rules(&self) -> &BudgetRules {
        &self.rules
    }

    pub fn rent_terms(&self) -> &RentTerms {
        &self.rent_terms
    }

    /// Records a weekly income and the matching savings deduction.
    pub fn add_income(&mut self, date: NaiveDate, weekly_income: Decimal) -> IncomeReceipt {
        let savings = weekly_income * self.rules.savings_rate();
        let expenses_budget = weekly_income * self.rules.allocation_rate();
        let income_id = self
            .ledger
            .append(date, WEEKLY_INCOME, weekly_income, INCOME);
        let savings_label = format!("Savings ({})", format_percent(self.rules.savings_rate()));
        let savings_id = self.ledger.append(date, savings_label, -savings, SAVINGS);
        info!(%date, %weekly_income, %savings, "recorded weekly income");
        IncomeReceipt {
            income_id,
            savings_id,
            weekly_income,
            savings,
            expenses_budget,
        }
    }

    /// Records `amount` as an outflow under `category`.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Uuid {
        self.ledger.append(date, description, -amount, category)
    }

    /// Splits the rent, records the payment and the roommates' contribution,
    /// and moves the excess into the house pool. Nothing is recorded when the
    /// split is rejected.
    pub fn split_rent(&mut self, date: NaiveDate, total_rent: Decimal) -> Result<RentReceipt> {
        let split = RentService::split(total_rent, &self.rent_terms)?;
        let payment_id = self.ledger.append(date, RENT_PAYMENT, -total_rent, RENT);
        let contribution_id = self.ledger.append(
            date,
            ROOMMATES_CONTRIBUTION,
            split.roommates_contribution,
            INCOME,
        );
        let house_pool_balance = self.house_pool.deposit(split.excess);
        info!(
            %date,
            %total_rent,
            excess = %split.excess,
            pool = %house_pool_balance,
            "split monthly rent"
        );
        Ok(RentReceipt {
            split,
            payment_id,
            contribution_id,
            house_pool_balance,
        })
    }

    pub fn summarize(&self) -> BudgetSummary {
        SummaryService::summarize(&self.ledger, &self.rules)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            transactions: self.ledger.transactions(),
            house_pool: self.house_pool.balance(),
            categories: self.categories.names(),
            summary: self.summarize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BudgetError;
    use rust_decimal_macros::dec;

    fn payday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 6).unwrap()
    }

    #[test]
    fn add_income_records_income_and_savings() {
        let mut session = Session::new();
        let receipt = session.add_income(payday(), dec!(1000));
        assert_eq!(receipt.savings, dec!(300));
        assert_eq!(receipt.expenses_budget, dec!(700));

        let txns = session.transactions();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "Weekly Income");
        assert_eq!(txns[0].amount, dec!(1000));
        assert_eq!(txns[0].category, "Income");
        assert_eq!(txns[1].description, "Savings (30%)");
        assert_eq!(txns[1].amount, dec!(-300));
        assert_eq!(txns[1].category, "Savings");
        assert_eq!(session.summarize().total_allocation, dec!(700));
    }

    #[test]
    fn add_expense_stores_negative_amount() {
        let mut session = Session::new();
        let id = session.add_expense(payday(), "Electric", dec!(82.10), "Utilities");
        let txn = session.ledger().transaction(id).unwrap();
        assert_eq!(txn.amount, dec!(-82.10));
        assert_eq!(txn.category, "Utilities");
    }

    #[test]
    fn split_rent_records_entries_and_fills_pool() {
        let mut session = Session::new();
        let receipt = session.split_rent(payday(), dec!(3299.29)).unwrap();
        assert_eq!(receipt.house_pool_balance, dec!(50.355));
        assert_eq!(session.house_pool(), dec!(50.355));

        let payment = session.ledger().transaction(receipt.payment_id).unwrap();
        assert_eq!(payment.description, "Rent Payment");
        assert_eq!(payment.amount, dec!(-3299.29));
        assert_eq!(payment.category, "Rent");

        let contribution = session
            .ledger()
            .transaction(receipt.contribution_id)
            .unwrap();
        assert_eq!(contribution.description, "Roommates Contribution");
        assert_eq!(contribution.amount, dec!(1700));
        assert_eq!(contribution.category, "Income");
    }

    #[test]
    fn rejected_split_leaves_state_untouched() {
        let mut session = Session::with_rules(
            BudgetRules::default(),
            RentTerms::new(0, dec!(1700)),
            CategoryList::default(),
        );
        let err = session.split_rent(payday(), dec!(3299.29)).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidArgument(_)));
        assert!(session.ledger().is_empty());
        assert_eq!(session.house_pool(), Decimal::ZERO);
    }

    #[test]
    fn custom_savings_rate_changes_label_and_allocation() {
        let mut session = Session::with_rules(
            BudgetRules::new(dec!(0.25)).unwrap(),
            RentTerms::default(),
            CategoryList::default(),
        );
        session.add_income(payday(), dec!(800));
        assert_eq!(session.transactions()[1].description, "Savings (25%)");
        assert_eq!(session.transactions()[1].amount, dec!(-200));
        assert_eq!(session.summarize().total_allocation, dec!(600));
    }

    #[test]
    fn snapshot_carries_pool_and_summary() {
        let mut session = Session::new();
        session.split_rent(payday(), dec!(1600)).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.house_pool, dec!(900));
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.summary.total_expenses, dec!(1600));
    }

    #[test]
    fn savings_rate_is_frozen_after_income() {
        let mut session = Session::new();
        let mut config = Config::default();
        config.set_value("savings_rate", "0.5").unwrap();
        config.set_value("roommate_count", "3").unwrap();
        session.apply_config(&config).unwrap();
        assert_eq!(session.rules().savings_rate(), dec!(0.5));

        session.add_income(payday(), dec!(1000));
        config.set_value("savings_rate", "0.2").unwrap();
        config.set_value("roommate_count", "5").unwrap();
        let err = session.apply_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: savings rate is fixed at 50% once weekly income is recorded"
        );
        assert_eq!(session.rules().savings_rate(), dec!(0.5));
        assert_eq!(session.rent_terms().roommate_count, 3);
        assert_eq!(session.summarize().total_allocation, dec!(500));

        config.set_value("savings_rate", "0.5").unwrap();
        session.apply_config(&config).unwrap();
        assert_eq!(session.rent_terms().roommate_count, 5);
    }

    #[test]
    fn oversized_income_still_summarizes() {
        let mut session = Session::new();
        session.add_income(payday(), Decimal::MAX);
        session.add_income(payday(), Decimal::MAX);
        let summary = session.summarize();
        assert_eq!(summary.total_income, Decimal::MAX);
        assert!(summary.total_expenses > Decimal::ZERO);
        assert!(summary.remaining_budget > Decimal::ZERO);
    }
}
