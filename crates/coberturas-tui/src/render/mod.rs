//! Main render/view function (View in TEA pattern)


use coberturas_app::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Reads state only. The summary panel draws a fresh quote stamp each call.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(), areas.header);
    frame.render_widget(
        widgets::CalculatorPanel::new(&state.calculator),
        areas.calculator,
    );
    frame.render_widget(
        widgets::CoverageView::new(&state.coverage).show_grid(state.settings.ui.show_grid),
        areas.coverage,
    );
    frame.render_widget(widgets::BudgetSummary::new(&state.coverage), areas.summary);
}
