//! Semantic style builders for the shell TUI.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use twarden_core::LifecycleEvent;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// Kept for high-emphasis text in upcoming widgets
#[allow(dead_code)]
pub fn text_bright() -> Style {
    Style::default().fg(palette::TEXT_BRIGHT)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Lifecycle indicator mapping ---

/// Indicator for lifecycle log rows and the status bar.
///
/// Returns `(icon_char, label, Style)` for the given LifecycleEvent.
/// The label is the human-readable transition text (e.g., "Active").
pub fn lifecycle_indicator(event: &LifecycleEvent) -> (&'static str, &'static str, Style) {
    match event {
        LifecycleEvent::DidBecomeActive => (
            "●",
            "Active",
            Style::default()
                .fg(palette::EVENT_ACTIVE)
                .add_modifier(Modifier::BOLD),
        ),
        LifecycleEvent::WillResignActive => (
            "○",
            "Inactive",
            Style::default().fg(palette::EVENT_INACTIVE),
        ),
        LifecycleEvent::WillEnterForeground => (
            "↑",
            "Foreground",
            Style::default().fg(palette::EVENT_FOREGROUND),
        ),
        LifecycleEvent::DidEnterBackground => (
            "↓",
            "Background",
            Style::default()
                .fg(palette::EVENT_BACKGROUND)
                .add_modifier(Modifier::BOLD),
        ),
    }
}
