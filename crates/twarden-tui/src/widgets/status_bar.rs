//! Status bar widget
//!
//! Displays the last lifecycle transition, snapshot state, and the launch
//! actions of the current session.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use twarden_app::state::ShellState;

use crate::theme::styles;

/// Status bar widget showing shell state
pub struct StatusBar<'a> {
    state: &'a ShellState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a ShellState) -> Self {
        Self { state }
    }

    /// Get the lifecycle indicator with appropriate styling
    fn lifecycle_indicator(&self) -> Span<'static> {
        let (icon, label, style) = match self.state.lifecycle_log.back() {
            Some((_, event)) => styles::lifecycle_indicator(event),
            None => ("○", "Idle", Style::default().fg(Color::DarkGray)),
        };
        Span::styled(format!("{} {}", icon, label), style)
    }

    /// Snapshot indicator span, present only while the overlay is raised
    fn snapshot_indicator(&self) -> Option<Span<'static>> {
        if self.state.snapshot_active {
            Some(Span::styled(
                "▒ Snapshot",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            None
        }
    }

    /// Launch actions of the established session, if any
    fn launch_summary(&self) -> Option<Span<'static>> {
        self.state
            .last_launch_actions
            .map(|actions| Span::styled(actions.describe(), Style::default().fg(Color::DarkGray)))
    }

    /// Signed-in user span
    fn user(&self) -> Option<Span<'static>> {
        self.state.current_user.as_ref().map(|user| {
            Span::styled(
                user.username.clone(),
                Style::default().fg(Color::Gray),
            )
        })
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut segments = Vec::new();

        // Left padding and lifecycle indicator (always show)
        segments.push(Span::raw(" "));
        segments.push(self.lifecycle_indicator());

        if let Some(snapshot) = self.snapshot_indicator() {
            segments.push(separator.clone());
            segments.push(snapshot);
        }

        if let Some(user) = self.user() {
            segments.push(separator.clone());
            segments.push(user);
        }

        if let Some(summary) = self.launch_summary() {
            segments.push(separator.clone());
            segments.push(summary);
        }

        segments.push(Span::raw(" ")); // Right padding

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Create block with top border (looks like separator)
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let segments = self.build_segments();
        let line = Line::from(segments);

        Paragraph::new(line).render(inner, buf);
    }
}

/// Compact status bar for narrow terminals (< 60 columns)
pub struct StatusBarCompact<'a> {
    state: &'a ShellState,
}

impl<'a> StatusBarCompact<'a> {
    pub fn new(state: &'a ShellState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarCompact<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let (icon, _label, style) = match self.state.lifecycle_log.back() {
            Some((_, event)) => styles::lifecycle_indicator(event),
            None => ("○", "Idle", Style::default().fg(Color::DarkGray)),
        };

        let mut spans = vec![Span::raw(" "), Span::styled(icon, style)];

        if self.state.snapshot_active {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                "▒",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}
