use chrono::{Datelike, Local, NaiveDate};

/// Clock abstracts access to the current date so form defaults remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local date.
    fn today(&self) -> NaiveDate;

    /// First day of the current month, the default rent due date.
    fn first_of_month(&self) -> NaiveDate {
        let today = self.today();
        today.with_day(1).unwrap_or(today)
    }
}

/// Real clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
