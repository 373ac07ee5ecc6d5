//! Terminal setup and restoration

use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use twarden_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableFocusChange);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Ask the terminal to report focus in/out events
pub fn enable_focus_reporting() -> Result<()> {
    execute!(std::io::stdout(), EnableFocusChange)?;
    Ok(())
}

/// Stop focus reporting before handing the terminal back
pub fn disable_focus_reporting() -> Result<()> {
    execute!(std::io::stdout(), DisableFocusChange)?;
    Ok(())
}
