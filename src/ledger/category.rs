use serde::{Deserialize, Serialize};

/// Category written for every inflow recorded by the income and rent handlers.
pub const INCOME: &str = "Income";
/// Category of the savings deduction taken from each weekly income.
pub const SAVINGS: &str = "Savings";
/// Category of the monthly rent payment.
pub const RENT: &str = "Rent";

/// Expense categories offered when a session starts.
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 6] = [
    RENT,
    "Utilities",
    "Credit Card",
    "Groceries",
    "Transportation",
    "Other",
];

/// Ordered set of expense category labels that can grow during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    names: Vec<String>,
}

impl Default for CategoryList {
    fn default() -> Self {
        Self::from_names(DEFAULT_EXPENSE_CATEGORIES)
    }
}

impl CategoryList {
    /// Builds a list from `names`, trimming each entry and dropping blanks
    /// and case-insensitive duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self { names: Vec::new() };
        for name in names {
            let name: String = name.into();
            let name = name.trim();
            if !name.is_empty() && !list.contains(name) {
                list.names.push(name.to_string());
            }
        }
        list
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the stored spelling of `name`, matched case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let needle = name.trim();
        self.names
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(needle))
            .map(String::as_str)
    }

    /// Appends without validation; see `CategoryService::add` for the checked path.
    pub(crate) fn push(&mut self, name: String) {
        self.names.push(name);
    }
}
