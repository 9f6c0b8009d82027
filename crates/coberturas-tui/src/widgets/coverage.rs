//! Scaled drawing of the covered rectangle

use coberturas_app::Coverage;
use coberturas_core::{
    format_area, format_meters, scale_shape, ScaledShape, LENGTH_CAP_PX, LENGTH_FACTOR,
    WIDTH_CAP_PX, WIDTH_FACTOR,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Horizontal pixels represented by one terminal column
pub const PIXELS_PER_COLUMN: f64 = 4.0;
/// Vertical pixels represented by one terminal row
pub const PIXELS_PER_ROW: f64 = 10.0;

const FILL_SOLID: &str = "█";
const FILL_GRID: &str = "▒";

/// Cell size of a scaled shape, before clamping to the panel
///
/// Any positive dimension occupies at least one cell.
pub fn cells_for(shape: ScaledShape) -> (u16, u16) {
    fn to_cells(px: f64, per_cell: f64) -> u16 {
        if px <= 0.0 {
            0
        } else {
            ((px / per_cell).round() as u16).max(1)
        }
    }

    (
        to_cells(shape.width_px, PIXELS_PER_COLUMN),
        to_cells(shape.height_px, PIXELS_PER_ROW),
    )
}

pub struct CoverageView<'a> {
    coverage: &'a Coverage,
    show_grid: bool,
}

impl<'a> CoverageView<'a> {
    pub fn new(coverage: &'a Coverage) -> Self {
        Self {
            coverage,
            show_grid: true,
        }
    }

    pub fn show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    fn render_shape(&self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = cells_for(scale_shape(self.coverage.width, self.coverage.length));
        let cols = cols.min(area.width);
        let rows = rows.min(area.height);

        if cols == 0 || rows == 0 {
            let empty = Line::from(Span::styled("Informe as dimensões", styles::text_muted()));
            Paragraph::new(empty)
                .alignment(Alignment::Center)
                .render(Rect { height: 1, ..area }, buf);
            return;
        }

        let x0 = area.x + (area.width - cols) / 2;
        let y0 = area.y + (area.height - rows) / 2;
        let style = Style::default().fg(palette::material_color(self.coverage.material));
        let symbol = if self.show_grid { FILL_GRID } else { FILL_SOLID };

        for y in y0..y0 + rows {
            for x in x0..x0 + cols {
                buf[(x, y)].set_symbol(symbol).set_style(style);
            }
        }
    }
}

impl Widget for CoverageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Visualização da Cobertura", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let labels = Line::from(vec![
            Span::styled("Largura: ", styles::text_secondary()),
            Span::styled(format_meters(self.coverage.width), styles::text_primary()),
            Span::raw("  "),
            Span::styled("Comprimento: ", styles::text_secondary()),
            Span::styled(format_meters(self.coverage.length), styles::text_primary()),
            Span::raw("  "),
            Span::styled("Área: ", styles::text_secondary()),
            Span::styled(format_area(self.coverage.area, 1), styles::accent_bold()),
        ]);
        let legend = Line::from(Span::styled(
            format!(
                "Escala {} px/m × {} px/m, máx. {}×{} px",
                WIDTH_FACTOR, LENGTH_FACTOR, WIDTH_CAP_PX, LENGTH_CAP_PX
            ),
            styles::text_muted(),
        ));

        if inner.height < 3 {
            Paragraph::new(labels).render(inner, buf);
            return;
        }

        let drawing = Rect {
            height: inner.height - 2,
            ..inner
        };
        self.render_shape(drawing, buf);

        let footer = Rect {
            y: inner.y + inner.height - 2,
            height: 2,
            ..inner
        };
        Paragraph::new(vec![labels, legend])
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}
