//! Icon constants for the TUI.
//!
//! Plain unicode characters chosen to render in any terminal.

// Allow dead_code since icons are consumed selectively by widgets
#![allow(dead_code)]

pub const PROMPT: &str = "\u{276f}"; // ❯
pub const DOT: &str = "\u{25cf}"; // ●
pub const CIRCLE: &str = "\u{25cb}"; // ○
pub const ALERT: &str = "\u{26a0}"; // ⚠
pub const CHECK: &str = "\u{2713}"; // ✓
pub const CROSS: &str = "\u{2717}"; // ✗
pub const CHEVRON_RIGHT: &str = "\u{203a}"; // ›
pub const INFO: &str = "\u{2139}"; // ℹ
pub const SHADE: &str = "\u{2592}"; // ▒ snapshot fill

/// Braille spinner frames. Must stay in step with the loading view's
/// frame counter so one rotation covers the configured cycle.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
