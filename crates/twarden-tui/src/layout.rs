//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + display name + keybindings)
    pub header: Rect,

    /// Main content area (lifecycle log)
    pub content: Rect,

    /// Status bar area (top border + status line)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Lifecycle log (glass container)
        Constraint::Length(2), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        // Header is always 3 rows (top border + content + bottom border)
        assert_eq!(layout.header.height, 3);
        // Status bar takes 2 rows at the bottom
        assert_eq!(layout.status.height, 2);
        // Content gets the rest
        assert_eq!(layout.content.height, 19);
        assert_eq!(layout.content.y, 3);
    }

    #[test]
    fn test_create_layout_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 6);
        let layout = create(area);

        // Still hands out non-overlapping rows without panicking
        assert!(layout.header.height <= 3);
        assert!(layout.status.y >= layout.content.y);
    }
}
