//! Dev support dialog
//!
//! Modal action picker listing the registered dev actions. Navigation and
//! selection are handled in the app layer; this widget only draws.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use twarden_app::state::DevDialogState;

use crate::theme::{icons, palette, styles};

use super::modal_overlay;

const DIALOG_WIDTH: u16 = 44;

/// Dev support action picker rendering a [`DevDialogState`]
pub struct DevDialog<'a> {
    state: &'a DevDialogState,
}

impl<'a> DevDialog<'a> {
    pub fn new(state: &'a DevDialogState) -> Self {
        Self { state }
    }

    fn dialog_height(&self) -> u16 {
        // Borders (2) + action rows + spacer + hint row
        (self.state.titles.len() as u16).saturating_add(4)
    }
}

impl Widget for DevDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal_area = modal_overlay::centered_rect(DIALOG_WIDTH, self.dialog_height(), area);
        modal_overlay::clear_area(buf, modal_area);
        modal_overlay::render_shadow(buf, modal_area);

        let block = styles::modal_block(" Dev Support ");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();

        for (idx, title) in self.state.titles.iter().enumerate() {
            let selected = idx == self.state.selected;
            let line = if selected {
                Line::from(vec![
                    Span::styled(format!(" {} ", icons::PROMPT), styles::focused_selected()),
                    Span::styled(format!("{:<width$}", title, width = 38), styles::focused_selected()),
                ])
            } else {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(title.clone(), styles::text_primary()),
                ])
            };
            lines.push(line);
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("↑↓", styles::keybinding()),
            Span::styled("] Move  [", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Select  [", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled("] Close", styles::text_muted()),
        ]));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .style(Style::default().bg(palette::POPUP_BG));
        paragraph.render(inner, buf);
    }
}
