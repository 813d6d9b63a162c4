pub mod category_service;
pub mod rent_service;
pub mod summary_service;

pub use category_service::CategoryService;
pub use rent_service::{RentService, RentSplit, RentTerms};
pub use summary_service::{BudgetRules, BudgetSummary, SummaryService};
