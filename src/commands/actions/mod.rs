//! Built-in command handlers.
//!
//! Each handler receives a [`CommandContext`](crate::commands::CommandContext)
//! and the tokens following the trigger, and returns the text to answer with.
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Validate the number and shape of the arguments, answering
//!    `"Invalid syntax."` before any lookup or side effect
//! 2. Resolve the players involved, answering
//!    `"Could not find a user by that name."` when a name is unknown
//! 3. Act through the player capabilities and answer with a short message
//!
//! # Available Handlers
//!
//! | Trigger    | Handler                      | Privilege   | Public |
//! |------------|------------------------------|-------------|--------|
//! | `!roll`    | [`handle_roll`]              | `NORMAL`    | yes    |
//! | `!last`    | [`handle_last`]              | `NORMAL`    | yes    |
//! | `!alert`   | [`handle_alert`]             | `ADMIN`     | no     |
//! | `!alertu`  | [`handle_alert_user`]        | `ADMIN`     | no     |
//! | `!mpforce` | [`handle_mpforce`]           | `ADMIN`     | no     |
//! | `!rtx`     | [`handle_rtx`]               | `DANGEROUS` | no     |
//! | `!spack`   | [`handle_send_empty_packet`] | `DANGEROUS` | no     |
//! | `!sbytes`  | [`handle_send_bytes`]        | `DANGEROUS` | no     |
//! | `!debug`   | [`handle_debug`]             | `DANGEROUS` | no     |

mod alert;
mod debug;
mod last;
mod mpforce;
mod roll;
mod rtx;
mod sbytes;
mod spack;

use log::info;

pub use crate::commands::actions::{
    alert::{handle_alert, handle_alert_user},
    debug::handle_debug,
    last::handle_last,
    mpforce::handle_mpforce,
    roll::{DEFAULT_ROLL, MAX_ROLL, handle_roll, roll_bound},
    rtx::handle_rtx,
    sbytes::handle_send_bytes,
    spack::handle_send_empty_packet,
};
use crate::{
    commands::{CommandRegistry, Commands},
    privileges::Privileges,
};

/// Registers the built-in commands and freezes them.
///
/// The registration order is the dispatch priority, it never changes between
/// runs.
pub fn default_commands() -> Commands {
    let mut registry = CommandRegistry::new();

    // Player commands, granted to any unrestricted player
    registry.register("roll", Privileges::NORMAL, true, handle_roll);
    registry.register("last", Privileges::NORMAL, true, handle_last);

    // Admin commands, for managing players
    registry.register("alert", Privileges::ADMIN, false, handle_alert);
    registry.register_as("!alertu", Privileges::ADMIN, false, handle_alert_user);
    registry.register("mpforce", Privileges::ADMIN, false, handle_mpforce);

    // Developer commands
    registry.register("rtx", Privileges::DANGEROUS, false, handle_rtx);
    registry.register_as("!spack", Privileges::DANGEROUS, false, handle_send_empty_packet);
    registry.register_as("!sbytes", Privileges::DANGEROUS, false, handle_send_bytes);
    registry.register("debug", Privileges::DANGEROUS, false, handle_debug);

    let commands = registry.build();
    info!("registered {} commands", commands.len());
    commands
}

/// Returns `true` for a non-empty string of ASCII digits.
pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
