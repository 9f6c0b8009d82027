//! Budget summary panel
//!
//! Pure function of the shared coverage values. The quote stamp is
//! regenerated every time the panel is drawn unless one is supplied.

use coberturas_app::Coverage;
use coberturas_core::{
    format_area, format_brl, format_date_br, format_meters, QuoteStamp, INSTALLATION_RATE,
    MAX_INSTALLMENTS,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Placeholder shown until quotes carry real customer data
pub const CLIENT_PLACEHOLDER: &str = "Cliente Exemplo";

const INCLUSION_NOTE: &str =
    "Incluso: material, instalação, estrutura de suporte e garantia de 2 anos.";
const DELIVERY_NOTE: &str = "Prazo de entrega: 5-7 dias após confirmação do pedido.";

pub struct BudgetSummary<'a> {
    coverage: &'a Coverage,
    stamp: Option<QuoteStamp>,
}

impl<'a> BudgetSummary<'a> {
    pub fn new(coverage: &'a Coverage) -> Self {
        Self {
            coverage,
            stamp: None,
        }
    }

    /// Use a fixed stamp instead of generating one
    pub fn stamp(mut self, stamp: QuoteStamp) -> Self {
        self.stamp = Some(stamp);
        self
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn cost_row(label: String, amount: f64) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(label, styles::text_secondary())),
        Line::from(Span::styled(format_brl(amount), styles::price())).right_aligned(),
    ]
}

impl Widget for BudgetSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Resumo do Orçamento", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let coverage = self.coverage;
        let stamp = self.stamp.unwrap_or_else(QuoteStamp::generate);
        let budget = coverage.budget();
        let unit_price = coverage.material.unit_price();
        let area_text = format_area(coverage.area, 2);

        let mut lines = vec![
            field("Orçamento: ", stamp.id.clone()),
            field("Data: ", format_date_br(stamp.issued_on)),
            field("Válido até: ", format_date_br(stamp.valid_until)),
            field("Cliente: ", CLIENT_PLACEHOLDER.to_string()),
            Line::default(),
            Line::from(Span::styled("Detalhes do Projeto", styles::heading())),
            field(
                "Dimensões: ",
                format!(
                    "{} × {}",
                    format_meters(coverage.width),
                    format_meters(coverage.length)
                ),
            ),
            field("Área total: ", area_text.clone()),
            field("Material: ", coverage.material.display_name().to_string()),
            Line::default(),
            Line::from(Span::styled("Discriminação de Custos", styles::heading())),
        ];

        lines.extend(cost_row(
            format!(
                "{} ({} × {})",
                coverage.material.display_name(),
                area_text,
                format_brl(unit_price)
            ),
            budget.material_subtotal,
        ));
        lines.extend(cost_row(
            format!(
                "Instalação ({} × {})",
                area_text,
                format_brl(INSTALLATION_RATE)
            ),
            budget.installation_subtotal,
        ));
        lines.extend(cost_row("Subtotal".to_string(), budget.total));

        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled("Valor Total: ", styles::heading()),
                Span::styled(format_brl(budget.financed_total), styles::price_total()),
            ])
            .right_aligned(),
        );
        lines.push(
            Line::from(Span::styled(
                format!(
                    "Parcelas em até {}x sem juros no cartão ({}x de {})",
                    MAX_INSTALLMENTS,
                    MAX_INSTALLMENTS,
                    format_brl(budget.installment_value())
                ),
                styles::text_muted(),
            ))
            .right_aligned(),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(INCLUSION_NOTE, styles::text_muted())));
        lines.push(Line::from(Span::styled(DELIVERY_NOTE, styles::text_muted())));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
