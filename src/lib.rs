#![doc(test(attr(deny(warnings))))]

//! House Ledger records income and expenses for a shared household, splits
//! the monthly rent between roommates, tracks the house pool of overpaid
//! rent, and derives running budget summaries from the ledger.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("House Ledger tracing initialized.");
    });
}
