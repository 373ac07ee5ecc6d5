//! Dev info panel
//!
//! Modal table of diagnostic label/value rows collected from the SDK
//! manager. Labels are padded by display width so values line up even
//! when a label contains wide glyphs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

use super::modal_overlay;

/// Dev info table over rows of `(label, value)` pairs
pub struct DevInfoPanel<'a> {
    rows: &'a [(String, String)],
}

impl<'a> DevInfoPanel<'a> {
    pub fn new(rows: &'a [(String, String)]) -> Self {
        Self { rows }
    }
}

/// Pad `label` with spaces up to `width` display columns
fn pad_label(label: &str, width: usize) -> String {
    let pad = width.saturating_sub(label.width());
    format!("{}{}", label, " ".repeat(pad))
}

impl Widget for DevInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal_area = modal_overlay::centered_rect_percent(70, 60, area);
        modal_overlay::clear_area(buf, modal_area);
        modal_overlay::render_shadow(buf, modal_area);

        let block = styles::modal_block(" Dev Info ");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = Vec::new();

        if self.rows.is_empty() {
            lines.push(Line::from(Span::styled(
                " No dev info available",
                styles::text_muted(),
            )));
        }

        for (label, value) in self.rows {
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(pad_label(label, label_width), styles::text_muted()),
                Span::raw("  "),
                Span::styled(value.clone(), styles::text_primary()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" [", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled("] Close", styles::text_muted()),
        ]));

        let paragraph = Paragraph::new(lines).style(Style::default().bg(palette::POPUP_BG));
        paragraph.render(inner, buf);
    }
}
