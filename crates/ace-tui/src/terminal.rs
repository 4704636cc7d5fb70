//! Terminal setup and restoration

use std::io::stdout;

use ace_core::prelude::*;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report pointer and focus events; the canvas is driven by the mouse
pub fn enable_pointer_events() -> Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .map_err(|e| Error::TerminalInit(format!("cannot enable mouse capture: {}", e)))
}

pub fn disable_pointer_events() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
        warn!("Failed to disable mouse capture: {}", e);
    }
}
