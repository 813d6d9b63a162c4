//! Budget arithmetic, command handlers and the session state they operate on.

pub mod clock;
pub mod services;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use session::{IncomeReceipt, RentReceipt, Session, SessionSnapshot};
