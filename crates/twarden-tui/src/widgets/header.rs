//! Header bar widget
//!
//! Provides the main header with app display name and keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use twarden_app::state::ShellState;

use crate::theme::{palette, styles};

/// Main header showing app title, display name, keybindings, and the
/// signed-in user pill
pub struct ShellHeader<'a> {
    display_name: &'a str,
    state: &'a ShellState,
}

impl<'a> ShellHeader<'a> {
    pub fn new(display_name: &'a str, state: &'a ShellState) -> Self {
        Self {
            display_name,
            state,
        }
    }
}

impl Widget for ShellHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Render glass container with rounded borders
        let block = styles::glass_block(false).style(Style::default().bg(palette::SURFACE));

        // Get inner content area (inside borders) before rendering
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_title_row(inner, buf);
    }
}

impl ShellHeader<'_> {
    /// Render the title row with status dot, display name, shortcuts, and
    /// optional user pill
    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Status dot from the most recent lifecycle transition
        let (status_icon, status_style) = match self.state.lifecycle_log.back() {
            Some((_, event)) => {
                let (icon, _label, style) = styles::lifecycle_indicator(event);
                (icon, style)
            }
            None => ("○", Style::default().fg(palette::TEXT_MUTED)),
        };

        // Build left section: status dot + "Terminal Warden" + "/" + display name
        let left_spans = vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(
                "Terminal Warden",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(
                self.display_name,
                Style::default().fg(palette::TEXT_SECONDARY),
            ),
        ];

        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        // Build shortcut hints (center section)
        let shortcuts = vec![
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("d", Style::default().fg(palette::STATUS_YELLOW)),
            Span::styled("] Dev  ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("i", Style::default().fg(palette::STATUS_YELLOW)),
            Span::styled("] Info  ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("b", Style::default().fg(palette::STATUS_YELLOW)),
            Span::styled("] Background  ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("l", Style::default().fg(palette::STATUS_YELLOW)),
            Span::styled("] Logout  ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("[", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled("q", Style::default().fg(palette::STATUS_YELLOW)),
            Span::styled("] Quit", Style::default().fg(palette::TEXT_MUTED)),
        ];
        let shortcuts_line = Line::from(shortcuts);
        let shortcuts_width = shortcuts_line.width() as u16;

        // Build user pill (right section) when signed in
        let user_content = self.state.current_user.as_ref().map(|user| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled("●", Style::default().fg(palette::STATUS_GREEN)),
                Span::raw(" "),
                Span::styled(user.username.clone(), Style::default().fg(palette::ACCENT)),
                Span::raw(" "),
            ])
        });
        let user_width = user_content.as_ref().map(|l| l.width() as u16).unwrap_or(0);

        let total_content_width = left_width + shortcuts_width + user_width + 4;

        if total_content_width <= area.width {
            // Everything fits: left | center | right layout
            buf.set_line(area.x, area.y, &left_line, area.width);

            let shortcuts_x = area.x + left_width + 2;
            if shortcuts_x + shortcuts_width <= area.x + area.width {
                buf.set_line(shortcuts_x, area.y, &shortcuts_line, shortcuts_width);
            }

            // Right-align user pill
            if let Some(user_line) = user_content {
                let user_x = area.x + area.width - user_width;
                if user_x >= area.x + left_width + shortcuts_width + 4 {
                    buf.set_line(user_x, area.y, &user_line, user_width);
                }
            }
        } else if left_width + user_width + 2 <= area.width {
            // Shortcuts don't fit, but left + user pill does
            buf.set_line(area.x, area.y, &left_line, area.width);

            if let Some(user_line) = user_content {
                let user_x = area.x + area.width - user_width;
                if user_x >= area.x + left_width + 2 {
                    buf.set_line(user_x, area.y, &user_line, user_width);
                }
            }
        } else {
            // Only left section fits
            buf.set_line(area.x, area.y, &left_line, area.width);
        }
    }
}
