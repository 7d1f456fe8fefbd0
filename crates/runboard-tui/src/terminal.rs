//! Terminal takeover and restoration

use ratatui::DefaultTerminal;
use tracing::{debug, error};

/// Enter raw mode and the alternate screen.
///
/// A panic anywhere after this point restores the terminal and records the
/// panic in the log file before the default report is printed.
pub fn enter() -> DefaultTerminal {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("runboard panicked: {}", panic_info);
        previous_hook(panic_info);
    }));

    debug!("Entering alternate screen");
    ratatui::init()
}

/// Leave the alternate screen and drop raw mode
pub fn leave() {
    ratatui::restore();
    debug!("Terminal restored");
}
