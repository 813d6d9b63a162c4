use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Description written by the weekly income handler.
pub const WEEKLY_INCOME: &str = "Weekly Income";
/// Description of the outflow recorded for the full monthly rent.
pub const RENT_PAYMENT: &str = "Rent Payment";
/// Description of the inflow recorded for the roommates' fixed payment.
pub const ROOMMATES_CONTRIBUTION: &str = "Roommates Contribution";

/// A dated inflow or outflow. The sign of `amount` is the only thing that
/// separates income from expenses: positive flows in, negative flows out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_outflow(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }

    pub fn has_description(&self, description: &str) -> bool {
        self.description == description
    }
}
