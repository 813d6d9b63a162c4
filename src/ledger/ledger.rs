use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::transaction::Transaction;

/// Append-only, insertion-ordered list of transactions with aggregate queries.
///
/// There is no way to edit or remove a transaction once it has been added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new transaction and returns its identifier. Never fails;
    /// callers are responsible for the sign convention.
    pub fn append(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Uuid {
        self.add_transaction(Transaction::new(date, description, amount, category))
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        debug!(
            %id,
            date = %transaction.date,
            description = %transaction.description,
            amount = %transaction.amount,
            category = %transaction.category,
            "appended transaction"
        );
        self.transactions.push(transaction);
        id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Sums `amount` over every transaction matching `predicate`.
    /// An empty match set sums to zero; totals saturate at the `Decimal` bounds.
    pub fn sum_where<P>(&self, predicate: P) -> Decimal
    where
        P: Fn(&Transaction) -> bool,
    {
        self.transactions
            .iter()
            .filter(|txn| predicate(*txn))
            .fold(Decimal::ZERO, |total, txn| total.saturating_add(txn.amount))
    }

    /// Sums matching transactions per category, keyed by category name.
    pub fn group_sum_by_category<P>(&self, predicate: P) -> BTreeMap<String, Decimal>
    where
        P: Fn(&Transaction) -> bool,
    {
        self.transactions
            .iter()
            .filter(|txn| predicate(*txn))
            .fold(BTreeMap::new(), |mut groups, txn| {
                let total = groups.entry(txn.category.clone()).or_insert(Decimal::ZERO);
                *total = total.saturating_add(txn.amount);
                groups
            })
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn sample_entries() -> Vec<Transaction> {
        vec![
            Transaction::new(day(1), "Weekly Income", dec!(1000), "Income"),
            Transaction::new(day(1), "Savings (30%)", dec!(-300), "Savings"),
            Transaction::new(day(2), "Market", dec!(-84.15), "Groceries"),
            Transaction::new(day(4), "Bus pass", dec!(-45), "Transportation"),
            Transaction::new(day(6), "Market", dec!(-20.05), "Groceries"),
        ]
    }

    fn ledger_from(entries: &[Transaction]) -> Ledger {
        let mut ledger = Ledger::new();
        for entry in entries {
            ledger.add_transaction(entry.clone());
        }
        ledger
    }

    #[test]
    fn empty_ledger_sums_to_zero() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.sum_where(|_| true), Decimal::ZERO);
        assert!(ledger.group_sum_by_category(|_| true).is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        let first = ledger.append(day(9), "Later date first", dec!(-1), "Other");
        let second = ledger.append(day(2), "Earlier date second", dec!(-2), "Other");
        let ids: Vec<Uuid> = ledger.iter().map(|txn| txn.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(ledger.transaction(second).unwrap().amount, dec!(-2));
    }

    #[test]
    fn sum_where_filters_by_predicate() {
        let ledger = ledger_from(&sample_entries());
        assert_eq!(ledger.sum_where(Transaction::is_inflow), dec!(1000));
        assert_eq!(ledger.sum_where(Transaction::is_outflow), dec!(-449.20));
        assert_eq!(
            ledger.sum_where(|txn| txn.has_description("Market")),
            dec!(-104.20)
        );
    }

    #[test]
    fn group_sum_by_category_merges_same_category() {
        let ledger = ledger_from(&sample_entries());
        let groups = ledger.group_sum_by_category(Transaction::is_outflow);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups["Groceries"], dec!(-104.20));
        assert_eq!(groups["Savings"], dec!(-300));
        assert_eq!(groups["Transportation"], dec!(-45));
    }

    #[test]
    fn aggregates_ignore_append_order() {
        let entries = sample_entries();
        let mut reversed = entries.clone();
        reversed.reverse();
        let forward = ledger_from(&entries);
        let backward = ledger_from(&reversed);
        assert_eq!(
            forward.sum_where(Transaction::is_outflow),
            backward.sum_where(Transaction::is_outflow)
        );
        assert_eq!(
            forward.group_sum_by_category(|_| true),
            backward.group_sum_by_category(|_| true)
        );
    }

    #[test]
    fn oversized_totals_saturate_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        ledger.append(day(1), "Weekly Income", Decimal::MAX, "Income");
        ledger.append(day(8), "Weekly Income", Decimal::MAX, "Income");
        ledger.append(day(8), "Refund", Decimal::MIN, "Other");
        ledger.append(day(9), "Refund", Decimal::MIN, "Other");
        assert_eq!(ledger.sum_where(Transaction::is_inflow), Decimal::MAX);
        assert_eq!(ledger.sum_where(Transaction::is_outflow), Decimal::MIN);
        let groups = ledger.group_sum_by_category(|_| true);
        assert_eq!(groups["Income"], Decimal::MAX);
        assert_eq!(groups["Other"], Decimal::MIN);
    }
}
