//! Calculator panel: dimension inputs, live area and material selector

use coberturas_app::{CalculatorField, CalculatorState};
use coberturas_core::{format_area, format_brl, MaterialType};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 18;
const INPUT_WIDTH: usize = 12;

pub struct CalculatorPanel<'a> {
    state: &'a CalculatorState,
}

impl<'a> CalculatorPanel<'a> {
    pub fn new(state: &'a CalculatorState) -> Self {
        Self { state }
    }

    fn input_line(&self, label: &'static str, text: &str, field: CalculatorField) -> Line<'a> {
        let focused = self.state.focus == field;
        let cursor = if focused { "▏" } else { " " };
        let shown = format!(" {}{}", text, cursor);

        Line::from(vec![
            Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                if focused {
                    styles::accent()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(
                format!("{:<width$}", shown, width = INPUT_WIDTH),
                styles::input(focused),
            ),
        ])
    }

    fn material_line(&self, material: MaterialType) -> Line<'a> {
        let selected = self.state.material == material;
        let (marker, name_style) = if selected {
            ("●", styles::heading().fg(palette::material_color(material)))
        } else {
            ("○", styles::text_secondary())
        };

        Line::from(vec![
            Span::raw(" "),
            Span::styled(marker, name_style),
            Span::raw(" "),
            Span::styled(format!("{}.", material.index() + 1), styles::text_muted()),
            Span::raw(" "),
            Span::styled(material.display_name(), name_style),
            Span::styled(" - ", styles::text_muted()),
            Span::styled(format!("{}/m²", format_brl(material.unit_price())), styles::price()),
        ])
    }
}

impl Widget for CalculatorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Calculadora de Área", self.state.focus.is_dimension());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let state = self.state;
        let selector_focused = state.focus == CalculatorField::Material;
        let material_cost = state.area() * state.material.unit_price();

        let mut lines = vec![
            self.input_line("Largura (m)", &state.width_input, CalculatorField::Width),
            self.input_line("Comprimento (m)", &state.length_input, CalculatorField::Length),
            Line::from(vec![
                Span::styled("Área Total: ", styles::text_secondary()),
                Span::styled(format_area(state.area(), 2), styles::accent_bold()),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Tipo de Cobertura",
                if selector_focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            )),
        ];
        lines.extend(MaterialType::ALL.iter().map(|m| self.material_line(*m)));
        lines.push(Line::from(vec![
            Span::styled("Custo do material: ", styles::text_secondary()),
            Span::styled(format_brl(material_cost), styles::price()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
