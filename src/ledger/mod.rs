//! Ledger domain models: transactions, the append-only ledger, the
//! expense category list and the house pool.

pub mod category;
pub mod house_pool;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::{CategoryList, DEFAULT_EXPENSE_CATEGORIES, INCOME, RENT, SAVINGS};
pub use house_pool::HousePool;
pub use ledger::Ledger;
pub use transaction::{Transaction, RENT_PAYMENT, ROOMMATES_CONTRIBUTION, WEEKLY_INCOME};
