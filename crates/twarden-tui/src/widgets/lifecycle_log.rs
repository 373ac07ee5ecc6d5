//! Lifecycle log widget
//!
//! Scrolling list of recent lifecycle transitions, newest at the bottom.
//! The main content area in normal mode.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use twarden_core::LifecycleEvent;

use crate::theme::styles;

/// Lifecycle transition list over the shell's retained history
pub struct LifecycleLog<'a> {
    entries: &'a VecDeque<(DateTime<Local>, LifecycleEvent)>,
}

impl<'a> LifecycleLog<'a> {
    pub fn new(entries: &'a VecDeque<(DateTime<Local>, LifecycleEvent)>) -> Self {
        Self { entries }
    }
}

impl Widget for LifecycleLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Lifecycle ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.entries.is_empty() {
            let hint = Paragraph::new(Line::from(vec![
                Span::styled(" No lifecycle transitions yet. Press ", styles::text_muted()),
                Span::styled("b", styles::keybinding()),
                Span::styled(" to simulate backgrounding.", styles::text_muted()),
            ]));
            hint.render(inner, buf);
            return;
        }

        // Tail of the history that fits the inner area, newest last
        let visible = inner.height as usize;
        let skip = self.entries.len().saturating_sub(visible);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .skip(skip)
            .map(|(at, event)| {
                let (icon, label, style) = styles::lifecycle_indicator(event);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(at.format("%H:%M:%S").to_string(), styles::text_muted()),
                    Span::raw("  "),
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(label, style),
                    Span::raw("  "),
                    Span::styled(event.as_str(), styles::text_muted()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn history(events: &[LifecycleEvent]) -> VecDeque<(DateTime<Local>, LifecycleEvent)> {
        events.iter().map(|e| (Local::now(), *e)).collect()
    }

    #[test]
    fn test_empty_log_shows_hint() {
        let mut term = TestTerminal::new();
        let entries = VecDeque::new();

        term.render_widget(LifecycleLog::new(&entries), term.area());

        assert!(term.buffer_contains("No lifecycle transitions yet"));
    }

    #[test]
    fn test_log_renders_events_with_labels() {
        let mut term = TestTerminal::new();
        let entries = history(&[
            LifecycleEvent::WillResignActive,
            LifecycleEvent::DidEnterBackground,
        ]);

        term.render_widget(LifecycleLog::new(&entries), term.area());

        assert!(term.buffer_contains("Inactive"));
        assert!(term.buffer_contains("Background"));
    }

    #[test]
    fn test_log_shows_canonical_event_names() {
        let mut term = TestTerminal::new();
        let entries = history(&[LifecycleEvent::WillEnterForeground]);

        term.render_widget(LifecycleLog::new(&entries), term.area());

        assert!(term.buffer_contains(LifecycleEvent::WillEnterForeground.as_str()));
    }

    #[test]
    fn test_log_clamps_to_visible_tail() {
        let mut term = TestTerminal::with_size(60, 6); // 4 inner rows
        let mut events = Vec::new();
        for _ in 0..10 {
            events.push(LifecycleEvent::DidBecomeActive);
        }
        events.push(LifecycleEvent::DidEnterBackground);
        let entries = history(&events);

        term.render_widget(LifecycleLog::new(&entries), term.area());

        // Newest entry must stay visible when history exceeds the area
        assert!(term.buffer_contains("Background"));
    }
}
