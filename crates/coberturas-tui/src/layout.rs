//! Screen layout definitions for the TUI
//!
//! Header across the top, the calculator and the coverage drawing stacked
//! on the left, the budget summary on the right.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Calculator panel height: two inputs, area, material list, cost line
pub const CALCULATOR_HEIGHT: u16 = 12;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + key hints
    pub header: Rect,

    /// Dimension inputs and material selector
    pub calculator: Rect,

    /// Scaled drawing of the covered rectangle
    pub coverage: Rect,

    /// Quote and cost breakdown
    pub summary: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(5)]).areas(area);

    let [left, summary] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    let [calculator, coverage] =
        Layout::vertical([Constraint::Length(CALCULATOR_HEIGHT), Constraint::Min(3)]).areas(left);

    ScreenAreas {
        header,
        calculator,
        coverage,
        summary,
    }
}
