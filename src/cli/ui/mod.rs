pub mod chart;
pub mod table;

pub use chart::BarChart;
pub use table::{Alignment, Table, TableColumn};
