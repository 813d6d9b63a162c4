//! Monthly rent arithmetic.
//!
//! The roommates pay a fixed combined amount regardless of the rent, and the
//! primary tenant covers whatever is left. When the fixed payment is larger
//! than two even shares the difference goes to the house pool.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};

/// Number of roommates covered by the fixed contribution.
const CONTRIBUTING_ROOMMATES: Decimal = dec!(2);

/// Household parameters used to split the rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentTerms {
    /// Number of people the rent is evenly divided by.
    pub roommate_count: u32,
    /// Combined fixed payment made by the other roommates.
    pub roommate_contribution: Decimal,
}

impl Default for RentTerms {
    fn default() -> Self {
        Self {
            roommate_count: 4,
            roommate_contribution: dec!(1700),
        }
    }
}

impl RentTerms {
    pub fn new(roommate_count: u32, roommate_contribution: Decimal) -> Self {
        Self {
            roommate_count,
            roommate_contribution,
        }
    }
}

/// Result of splitting one month's rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentSplit {
    pub total_rent: Decimal,
    pub individual_share: Decimal,
    pub roommates_contribution: Decimal,
    /// Informational only; never recorded in the ledger.
    pub your_share: Decimal,
    pub excess: Decimal,
}

pub struct RentService;

impl RentService {
    /// Splits `total_rent` under `terms`. Any rent figure is accepted,
    /// including zero or negative values; only a zero roommate count fails.
    pub fn split(total_rent: Decimal, terms: &RentTerms) -> Result<RentSplit> {
        if terms.roommate_count == 0 {
            return Err(BudgetError::InvalidArgument(
                "roommate count must be at least 1".into(),
            ));
        }
        let individual_share = total_rent / Decimal::from(terms.roommate_count);
        let roommates_contribution = terms.roommate_contribution;
        let your_share = total_rent - roommates_contribution;
        let excess = (roommates_contribution - individual_share * CONTRIBUTING_ROOMMATES)
            .max(Decimal::ZERO);
        Ok(RentSplit {
            total_rent,
            individual_share,
            roommates_contribution,
            your_share,
            excess,
        })
    }
}
