//! Loading view widget
//!
//! Centered modal with an animated spinner, drawn over whatever screen is
//! active while a launch or other long operation runs.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use twarden_app::loading::LoadingViewState;

use crate::theme::{icons, palette};

use super::modal_overlay;

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 7;

/// Loading view modal rendering a [`LoadingViewState`]
pub struct LoadingView<'a> {
    state: &'a LoadingViewState,
}

impl<'a> LoadingView<'a> {
    pub fn new(state: &'a LoadingViewState) -> Self {
        Self { state }
    }

    /// Current spinner frame. The frame counter wraps through the frame
    /// set, one full pass per configured rotation.
    fn spinner_char(&self) -> &'static str {
        let idx = (self.state.animation_frame as usize) % icons::SPINNER_FRAMES.len();
        icons::SPINNER_FRAMES[idx]
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);

        // Only clear the modal area, not the entire screen
        modal_overlay::clear_area(buf, modal_area);
        modal_overlay::render_shadow(buf, modal_area);

        let mut lines = vec![];

        lines.push(Line::from(vec![Span::styled(
            self.state.title.clone(),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )]));

        lines.push(Line::from("")); // Spacing

        // Spinner and subtitle. A stopped spinner holds its last frame.
        let mut spans = vec![];
        if self.state.is_rotating() {
            spans.push(Span::styled(
                self.spinner_char(),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        if !self.state.subtitle.is_empty() {
            spans.push(Span::styled(
                self.state.subtitle.clone(),
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
        }
        lines.push(Line::from(spans));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::BORDER_DIM))
            .style(Style::default().bg(palette::DEEPEST_BG));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        paragraph.render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::time::Duration;

    #[test]
    fn test_loading_view_renders_title() {
        let mut term = TestTerminal::new();
        let state = LoadingViewState::new("Launching", "contacting login host");

        term.render_widget(LoadingView::new(&state), term.area());

        assert!(term.buffer_contains("Launching"));
        assert!(term.buffer_contains("contacting login host"));
    }

    #[test]
    fn test_loading_view_shows_spinner_while_rotating() {
        let mut term = TestTerminal::new();
        let mut state = LoadingViewState::new("Launching", "");
        state.start_rotating(Duration::from_millis(800));

        term.render_widget(LoadingView::new(&state), term.area());

        assert!(
            term.buffer_contains(icons::SPINNER_FRAMES[0]),
            "First frame should show before any ticks"
        );
    }

    #[test]
    fn test_loading_view_frame_advances_with_counter() {
        let mut term = TestTerminal::new();
        let mut state = LoadingViewState::new("Launching", "");
        state.start_rotating(Duration::from_millis(800));
        state.animation_frame = 3;

        term.render_widget(LoadingView::new(&state), term.area());

        assert!(term.buffer_contains(icons::SPINNER_FRAMES[3]));
    }

    #[test]
    fn test_loading_view_frame_counter_wraps() {
        let mut term = TestTerminal::new();
        let mut state = LoadingViewState::new("Launching", "");
        state.start_rotating(Duration::from_millis(800));
        state.animation_frame = icons::SPINNER_FRAMES.len() as u64 + 2;

        term.render_widget(LoadingView::new(&state), term.area());

        assert!(term.buffer_contains(icons::SPINNER_FRAMES[2]));
    }

    #[test]
    fn test_loading_view_no_spinner_when_stopped() {
        let mut term = TestTerminal::new();
        let state = LoadingViewState::new("Waiting", "press r to retry");

        term.render_widget(LoadingView::new(&state), term.area());

        for frame in icons::SPINNER_FRAMES {
            assert!(!term.buffer_contains(frame));
        }
        assert!(term.buffer_contains("press r to retry"));
    }

    #[test]
    fn test_loading_view_compact_terminal() {
        let mut term = TestTerminal::compact();
        let state = LoadingViewState::new("Launching", "");

        term.render_widget(LoadingView::new(&state), term.area());

        assert!(term.buffer_contains("Launching"));
    }
}
