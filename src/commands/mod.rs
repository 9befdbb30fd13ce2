//! In-band chat commands.
//!
//! This module turns chat messages into command invocations. A message whose
//! first token matches the trigger of a registered command, sent by a player
//! holding the command's privileges, is handed to the command's handler and
//! the handler's answer is sent back.
//!
//! # Architecture
//!
//! ```text
//! Chat message
//!      │
//!      ▼
//! ┌─────────────┐   scans, in registration order   ┌──────────────┐
//! │  Commander  │ ───────────────────────────────▶ │   Commands   │
//! └─────────────┘                                  └──────────────┘
//!      │                                                  ▲
//!      │ first trigger match with privileges              │ build()
//!      ▼                                                  │
//! ┌─────────────────────┐                       ┌─────────────────┐
//! │ Handler             │                       │ CommandRegistry │
//! │  - handle_roll      │                       └─────────────────┘
//! │  - handle_alert     │
//! │  - ...              │
//! └─────────────────────┘
//!      │
//!      ▼
//! Option<CommandResponse>
//! ```
//!
//! # Outcomes
//!
//! [`Commander::process`] distinguishes three outcomes:
//!
//! - `None`: no command matched, the message is ordinary chat
//! - `Some(CommandResponse::Silent)`: a command ran but had nothing to say
//! - `Some(CommandResponse::Reply { .. })`: a command ran and answered
//!
//! Senders without the required privileges get `None`, exactly as if the
//! command did not exist.
//!
//! # Module Organization
//!
//! - [`command`] - Command descriptors, registry and frozen command list
//! - [`commander`] - Message tokenizing and dispatch
//! - [`actions`] - The built-in command handlers
//! - [`responses`] - Fixed reply texts

pub mod actions;
pub mod command;
pub mod commander;
pub mod responses;

pub use crate::commands::{
    actions::default_commands,
    command::{Command, CommandRegistry, Commands},
    commander::Commander,
};
use crate::{
    players::{Player, PlayerDirectory, Target},
    server::ServerState,
};

/// Everything a handler can read or act upon.
pub struct CommandContext<'a> {
    /// Player who sent the command
    pub sender: &'a dyn Player,
    /// Channel or player the command was sent to
    pub target: &'a Target,
    /// Online players
    pub players: &'a dyn PlayerDirectory,
    /// Server wide settings
    pub server: &'a ServerState,
}

/// A command handler.
///
/// Receives the context and the tokens following the trigger. Returns the text
/// to answer with, `None` or an empty string to stay silent.
pub type Handler = fn(&CommandContext<'_>, &[&str]) -> Option<String>;

/// Outcome of a dispatched command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResponse {
    /// The command ran without answering.
    Silent,
    /// The command answered.
    Reply {
        /// Answer, suffixed with the handling time
        text: String,
        /// Whether to broadcast to the target or whisper to the sender
        public: bool,
    },
}

impl CommandResponse {
    /// Text to send back, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            CommandResponse::Silent => None,
            CommandResponse::Reply { text, .. } => Some(text),
        }
    }

    /// Visibility of the response.
    ///
    /// Silent responses report `true`.
    pub fn is_public(&self) -> bool {
        match self {
            CommandResponse::Silent => true,
            CommandResponse::Reply { public, .. } => *public,
        }
    }
}
