//! Configuration file structures for the chatcmd console.
//!
//! The configuration is a YAML file merged with environment variables
//! prefixed by `CHATCMD_`. Nested keys are separated by a double underscore,
//! e.g. `CHATCMD_CONSOLE__NAME` overrides `console.name`.
//!
//! # Configuration File Format
//!
//! ```yaml
//! server:
//!   # Start with debug logging enabled
//!   debug: false
//!   # Channel the console talks in
//!   channel: "#osu"
//!
//! console:
//!   name: "Aika"
//!   privileges: [normal, admin, dangerous]
//!
//! # Simulated online players
//! players:
//!   - name: "cookiezi"
//!     privileges: [normal]
//!     game_mode: standard
//!     match_id: 3
//!     recent_score:
//!       rank: 1
//!       map_id: 129891
//!       pp: 727.45
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::{
    players::{GameMode, MatchId, Score},
    privileges::Privileges,
};

/// Prefix of the environment variables overriding the file values.
const ENV_PREFIX: &str = "CHATCMD_";

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Server wide settings
    #[serde(default)]
    pub server: Server,
    /// Player typing in the console
    pub console: PlayerConfig,
    /// Players online when the console starts
    #[serde(default)]
    pub players: Vec<PlayerConfig>,
}

/// Server wide settings.
#[derive(Debug, Deserialize)]
pub struct Server {
    /// Initial value of the debug flag.
    ///
    /// Can be toggled at runtime with the `!debug` command.
    #[serde(default)]
    pub debug: bool,

    /// Channel used as the target of console messages.
    #[serde(default = "default_channel")]
    pub channel: String,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            debug: false,
            channel: default_channel(),
        }
    }
}

fn default_channel() -> String {
    "#osu".to_owned()
}

/// A simulated online player, or the console sender.
#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub privileges: Privileges,
    #[serde(default)]
    pub game_mode: GameMode,
    #[serde(default)]
    pub match_id: Option<MatchId>,
    /// Most recent score in `game_mode`
    #[serde(default)]
    pub recent_score: Option<Score>,
}

impl Config {
    /// Loads the configuration from a YAML file and the environment.
    ///
    /// Environment variables take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] when the file cannot be parsed or a
    /// required value is missing.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}
