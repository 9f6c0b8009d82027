//! Header bar widget
//!
//! App title on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app title and keybindings
#[derive(Default)]
pub struct MainHeader;

impl MainHeader {
    pub fn new() -> Self {
        Self
    }

    fn shortcut(key: &'static str, label: &'static str) -> [Span<'static>; 4] {
        [
            Span::styled("[", styles::text_muted()),
            Span::styled(key, Style::default().fg(palette::ACCENT)),
            Span::styled("] ", styles::text_muted()),
            Span::styled(label, styles::text_muted()),
        ]
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("CoberturasPro", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled("Calculadora de Orçamentos", styles::text_secondary()),
        ]);
        let title_width = title.width() as u16;

        let mut hints: Vec<Span> = Vec::new();
        for (i, (key, label)) in [
            ("Tab", "Campo"),
            ("←/→", "Material"),
            ("r", "Restaurar"),
            ("q", "Sair"),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                hints.push(Span::raw("  "));
            }
            hints.extend(Self::shortcut(key, label));
        }
        hints.push(Span::raw(" "));
        let hints = Line::from(hints);
        let hints_width = hints.width() as u16;

        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Hints only when they fit beside the title
        if title_width + hints_width + 2 <= inner.width {
            let hints_x = inner.x + inner.width - hints_width;
            buf.set_line(hints_x, inner.y, &hints, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("CoberturasPro"));
        assert!(term.buffer_contains("Calculadora de Orçamentos"));
    }

    #[test]
    fn test_header_renders_shortcuts_when_wide() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new(), term.area());

        assert!(term.line_contains(1, "Sair"));
        assert!(term.line_contains(1, "Restaurar"));
    }

    #[test]
    fn test_header_hides_shortcuts_when_narrow() {
        let mut term = TestTerminal::with_size(50, 3);
        term.render_widget(MainHeader::new(), term.area());

        assert!(term.buffer_contains("CoberturasPro"));
        assert!(!term.buffer_contains("Sair"));
    }

    #[test]
    fn test_header_zero_height_does_not_panic() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(), Rect::new(0, 0, 80, 0));
    }
}
