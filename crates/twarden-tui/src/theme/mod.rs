//! Theme support for the shell TUI.
//!
//! Raw colors live in `palette`, semantic style builders in `styles`.
//! Widgets take their glyphs from `icons`.

pub mod icons;
pub mod palette;
pub mod styles;
