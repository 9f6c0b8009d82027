//! Custom widget components

mod calculator;
mod coverage;
mod header;
mod summary;

pub use calculator::CalculatorPanel;
pub use coverage::{cells_for, CoverageView, PIXELS_PER_COLUMN, PIXELS_PER_ROW};
pub use header::MainHeader;
pub use summary::{BudgetSummary, CLIENT_PLACEHOLDER};
