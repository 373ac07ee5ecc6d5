//! Abstract input key event, independent of terminal library.
//!
//! Keyboard input is converted from crossterm events at the TUI boundary,
//! so the shell state machine and its tests never touch terminal types.
//! Headless hosts feed `InputKey` values directly.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    /// Up arrow key
    Up,
    /// Down arrow key
    Down,

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}
