//! chatcmd - In-band chat commands for multiplayer game servers.
//!
//! Players type commands straight into chat, e.g. `!roll 50` or
//! `!alert server restart in 5 minutes`. This crate recognizes such messages,
//! checks the sender's privileges, runs the matching handler and tells the
//! caller what to send back and to whom.
//!
//! # Overview
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chatcmd::{
//!     commands::{Commander, CommandResponse, default_commands},
//!     players::{Lobby, OnlinePlayer, Target},
//!     privileges::Privileges,
//!     server::ServerState,
//! };
//!
//! let mut lobby = Lobby::new();
//! let sender = lobby.add(OnlinePlayer::new("Aika", Privileges::NORMAL));
//!
//! // Commands are registered once, before any message is processed
//! let commander = Commander::new(
//!     default_commands(),
//!     Arc::new(lobby),
//!     Arc::new(ServerState::default()),
//! );
//!
//! let channel = Target::Channel("#osu".to_owned());
//! match commander.process(sender.as_ref(), &channel, "!roll") {
//!     None => println!("ordinary chat"),
//!     Some(CommandResponse::Silent) => println!("handled"),
//!     Some(CommandResponse::Reply { text, public }) => println!("{} (public: {})", text, public),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`commands`] - Command registry, dispatch and built-in handlers
//! - [`players`] - Capability traits for players and the player directory
//! - [`privileges`] - Privilege bitmask
//! - [`packets`] - Outbound packet builders used by handlers
//! - [`server`] - Runtime server settings
//! - [`config`] - YAML configuration of the console binary
//! - [`utils`] - Escape decoding

pub mod commands;
pub mod config;
pub mod packets;
pub mod players;
pub mod privileges;
pub mod server;
pub mod utils;
