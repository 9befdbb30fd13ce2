//! Capability traits for the players a command talks to.
//!
//! The command engine never owns player state. It reads what it needs and
//! triggers side effects through two traits:
//!
//! - [`Player`]: a connected client, either the sender of a command or the
//!   player a command acts upon
//! - [`PlayerDirectory`]: the set of online players, used to resolve names and
//!   to broadcast packets
//!
//! Both traits are mockable with `mockall`, the session layer provides the real
//! implementations. [`Lobby`] is a simple in-memory directory used by the
//! console binary.

mod lobby;

use std::{fmt, sync::Arc};

use mockall::automock;
use serde::Deserialize;

use crate::privileges::Privileges;

pub use crate::players::lobby::{Lobby, OnlinePlayer};

/// Game modes a player can be playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Standard,
    Taiko,
    Catch,
    Mania,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::Standard => "standard",
            GameMode::Taiko => "taiko",
            GameMode::Catch => "catch",
            GameMode::Mania => "mania",
        };
        write!(f, "{}", name)
    }
}

/// A ranked score submitted by a player.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Score {
    /// Leaderboard position of the score on its map
    pub rank: u32,
    /// Identifier of the played beatmap
    pub map_id: u32,
    /// Performance points awarded
    pub pp: f64,
}

/// Identifier of a multiplayer match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct MatchId(pub u32);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a public reply is broadcast.
///
/// The command engine hands the target to handlers untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A chat channel, e.g. `#osu`
    Channel(String),
    /// A private conversation with a player
    Player(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Channel(name) | Target::Player(name) => write!(f, "{}", name),
        }
    }
}

/// A connected player.
#[automock]
pub trait Player: Send + Sync {
    /// Display name.
    fn name(&self) -> String;
    /// Privilege mask of the player.
    fn privileges(&self) -> Privileges;
    /// Mode the player is currently playing.
    fn game_mode(&self) -> GameMode;
    /// Most recent ranked score of the player in `mode`.
    fn recent_score(&self, mode: GameMode) -> Option<Score>;
    /// Multiplayer match the player is in, if any.
    fn current_match(&self) -> Option<MatchId>;
    /// Queues raw packet data for delivery to the player.
    fn enqueue(&self, data: Vec<u8>);
    /// Moves the player into `match_id`.
    fn join_match(&self, match_id: MatchId);
}

/// The online players of the server.
#[automock]
pub trait PlayerDirectory: Send + Sync {
    /// Resolves an online player by name.
    fn get_by_name(&self, name: &str) -> Option<Arc<dyn Player>>;
    /// Queues raw packet data for every online player.
    fn enqueue(&self, data: Vec<u8>);
}
