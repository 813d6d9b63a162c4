use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running total of rent paid by roommates beyond their even share.
/// The balance only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousePool {
    balance: Decimal,
}

impl HousePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credits `amount` and returns the new balance. Negative amounts are
    /// ignored so the pool never shrinks.
    pub fn deposit(&mut self, amount: Decimal) -> Decimal {
        self.balance += amount.max(Decimal::ZERO);
        self.balance
    }
}
