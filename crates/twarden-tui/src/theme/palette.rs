//! Color palette for the shell TUI.

// Allow dead_code since the palette is consumed selectively by widgets
#![allow(dead_code)]

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds
pub const SURFACE: Color = Color::Black; // Elevated surface

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_DIM: Color = Color::DarkGray;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Foreground over ACCENT backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Lifecycle event colors ---
pub const EVENT_ACTIVE: Color = Color::Green;
pub const EVENT_INACTIVE: Color = Color::DarkGray;
pub const EVENT_FOREGROUND: Color = Color::Blue;
pub const EVENT_BACKGROUND: Color = Color::Yellow;

// --- Snapshot overlay ---
pub const SNAPSHOT_BG: Color = Color::Rgb(12, 14, 20);
pub const SNAPSHOT_TITLE: Color = Color::Cyan;

// --- Modal backgrounds ---
pub const MODAL_DIALOG_BG: Color = Color::Rgb(30, 30, 40);
pub const MODAL_INFO_BG: Color = Color::Rgb(40, 40, 50);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        // Verify a few representative constants compile and are the expected type
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = STATUS_GREEN;
    }

    #[test]
    fn test_lifecycle_event_colors_complete() {
        // All four lifecycle transitions should have colors
        let _: Color = EVENT_ACTIVE;
        let _: Color = EVENT_INACTIVE;
        let _: Color = EVENT_FOREGROUND;
        let _: Color = EVENT_BACKGROUND;
    }

    #[test]
    fn test_modal_backgrounds_are_rgb() {
        match MODAL_DIALOG_BG {
            Color::Rgb(_, _, _) => {}
            _ => panic!("MODAL_DIALOG_BG should be RGB"),
        }
        match SNAPSHOT_BG {
            Color::Rgb(_, _, _) => {}
            _ => panic!("SNAPSHOT_BG should be RGB"),
        }
    }
}
