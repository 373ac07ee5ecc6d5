//! Launch failure screen
//!
//! Shown when the launch pipeline reports an error. Offers retry and quit.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{icons, palette, styles};

use super::modal_overlay;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 9;

/// Launch error screen with the failure message and a retry hint
pub struct LaunchErrorView<'a> {
    message: &'a str,
}

impl<'a> LaunchErrorView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for LaunchErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::status_red())
            .style(Style::default().bg(palette::DEEPEST_BG));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                format!("{} Launch failed", icons::CROSS),
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(self.message, styles::text_secondary())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled("r", styles::keybinding()),
                Span::styled("] Retry  [", styles::text_muted()),
                Span::styled("q", styles::keybinding()),
                Span::styled("] Quit", styles::text_muted()),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        paragraph.render(inner, buf);
    }
}
