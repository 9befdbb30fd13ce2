//! Command dispatch.
//!
//! This module provides the [`Commander`] struct, the entry point the chat
//! pipeline calls for every message a player sends.
//!
//! # Flow
//!
//! ```text
//! message → trim → split on ' ' → first matching command → handler → CommandResponse
//! ```
//!
//! Tokens are split on single spaces: `"!alert  hi"` yields the arguments
//! `["", "hi"]`. Clients rely on this exact splitting, runs of spaces are not
//! collapsed.
//!
//! # Examples
//!
//! ```
//! # use std::sync::Arc;
//! # use chatcmd::commands::{Commander, CommandResponse, default_commands};
//! # use chatcmd::players::{Lobby, OnlinePlayer, Target};
//! # use chatcmd::privileges::Privileges;
//! # use chatcmd::server::ServerState;
//! let mut lobby = Lobby::new();
//! let sender = lobby.add(OnlinePlayer::new("Aika", Privileges::NORMAL));
//! let commander = Commander::new(
//!     default_commands(),
//!     Arc::new(lobby),
//!     Arc::new(ServerState::default()),
//! );
//! let channel = Target::Channel("#osu".to_owned());
//!
//! // Ordinary chat
//! assert!(commander.process(sender.as_ref(), &channel, "hello").is_none());
//!
//! // A command
//! let response = commander.process(sender.as_ref(), &channel, "!roll 10").unwrap();
//! assert!(response.text().unwrap().starts_with("Aika rolls "));
//! assert!(response.is_public());
//! ```

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    time::Instant,
};

use log::{debug, error};

use crate::{
    commands::{
        Command, CommandContext, CommandResponse, Commands,
        responses::{format_elapsed, format_invalid_syntax},
    },
    players::{Player, PlayerDirectory, Target},
    server::ServerState,
};

/// Dispatches chat messages to the registered commands.
///
/// The command list is frozen, so a `Commander` can be shared between
/// threads and used concurrently without locking.
pub struct Commander {
    /// Commands in priority order
    commands: Commands,
    /// Online players, handed to handlers
    players: Arc<dyn PlayerDirectory>,
    /// Server settings, handed to handlers
    server: Arc<ServerState>,
}

impl Commander {
    pub fn new(
        commands: Commands,
        players: Arc<dyn PlayerDirectory>,
        server: Arc<ServerState>,
    ) -> Self {
        Commander {
            commands,
            players,
            server,
        }
    }

    /// Processes a chat message sent by `sender` to `target`.
    ///
    /// The first token of the trimmed message is compared to each trigger in
    /// registration order. The first command with that trigger whose
    /// privileges intersect the sender's runs with the remaining tokens, and
    /// later commands sharing the trigger are ignored.
    ///
    /// # Returns
    ///
    /// - `None` - No command matched, the message is ordinary chat
    /// - `Some(CommandResponse::Silent)` - A command ran and returned no text
    /// - `Some(CommandResponse::Reply { .. })` - A command answered, the text
    ///   ends with `" | Elapsed: <ms>ms"` and `public` comes from the command
    ///
    /// A handler that panics is answered with `"Invalid syntax."`. The panic is
    /// logged at `error` level, but the process panic hook still runs first and
    /// prints its own message to stderr unless it has been replaced with
    /// [`std::panic::set_hook`].
    pub fn process(
        &self,
        sender: &dyn Player,
        target: &Target,
        message: &str,
    ) -> Option<CommandResponse> {
        let tokens = message.trim().split(' ').collect::<Vec<&str>>();
        let (trigger, args) = tokens.split_first()?;

        let command = self.find(trigger, sender)?;

        debug!(
            "{} invoked {} in {} with {:?}",
            sender.name(),
            command.trigger(),
            target,
            args
        );

        let context = CommandContext {
            sender,
            target,
            players: self.players.as_ref(),
            server: self.server.as_ref(),
        };

        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| (command.handler())(&context, args)));
        let elapsed = start.elapsed();

        let text = match result {
            Ok(text) => text,
            Err(payload) => {
                error!(
                    "command {} from {} panicked: {}",
                    command.trigger(),
                    sender.name(),
                    panic_message(payload.as_ref())
                );
                Some(format_invalid_syntax())
            }
        };

        debug!("{} handled in {:?}", command.trigger(), elapsed);

        match text {
            Some(text) if !text.is_empty() => Some(CommandResponse::Reply {
                text: format_elapsed(&text, elapsed),
                public: command.is_public(),
            }),
            _ => Some(CommandResponse::Silent),
        }
    }

    /// First command with `trigger` that `sender` may invoke.
    fn find(&self, trigger: &str, sender: &dyn Player) -> Option<&Command> {
        if trigger.is_empty() {
            return None;
        }

        let privileges = sender.privileges();
        self.commands
            .all()
            .iter()
            .find(|command| command.trigger() == trigger && command.is_allowed(privileges))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
