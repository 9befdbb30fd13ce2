//! Runtime server settings shared with command handlers.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{LevelFilter, info};

/// Mutable server wide settings.
///
/// Shared by every dispatch, so all fields are atomics.
#[derive(Debug, Default)]
pub struct ServerState {
    debug: AtomicBool,
}

impl ServerState {
    pub fn new(debug: bool) -> Self {
        ServerState {
            debug: AtomicBool::new(debug),
        }
    }

    pub fn debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Toggles debug output.
    ///
    /// The process log level follows the flag: `debug` when enabled, `info`
    /// otherwise.
    pub fn set_debug(&self, debug: bool) {
        self.debug.store(debug, Ordering::Relaxed);

        let level = if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
        info!("debug output {}", if debug { "enabled" } else { "disabled" });
    }
}
