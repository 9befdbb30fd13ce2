//! In-memory player directory.
//!
//! [`Lobby`] keeps a fixed list of [`OnlinePlayer`]s, each with its own
//! outbound queue. It backs the console binary, where no real session layer
//! exists, and lets tests inspect what commands sent to whom.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::debug;

use crate::{
    config::PlayerConfig,
    players::{GameMode, MatchId, Player, PlayerDirectory, Score},
    privileges::Privileges,
};

/// A player held by a [`Lobby`].
#[derive(Debug)]
pub struct OnlinePlayer {
    name: String,
    privileges: Privileges,
    game_mode: GameMode,
    recent_scores: HashMap<GameMode, Score>,
    current_match: Mutex<Option<MatchId>>,
    /// Packets waiting to be flushed to the client
    queue: Mutex<Vec<Vec<u8>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl OnlinePlayer {
    pub fn new(name: &str, privileges: Privileges) -> Self {
        OnlinePlayer {
            name: name.to_owned(),
            privileges,
            game_mode: GameMode::default(),
            recent_scores: HashMap::new(),
            current_match: Mutex::new(None),
            queue: Mutex::new(Vec::new()),
        }
    }

    /// Sets the mode the player is playing.
    pub fn with_game_mode(mut self, game_mode: GameMode) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Records `score` as the most recent score in `mode`.
    pub fn with_recent_score(mut self, mode: GameMode, score: Score) -> Self {
        self.recent_scores.insert(mode, score);
        self
    }

    /// Places the player in a multiplayer match.
    pub fn with_match(self, match_id: MatchId) -> Self {
        *lock(&self.current_match) = Some(match_id);
        self
    }

    /// Drains the outbound queue.
    pub fn dequeue(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut *lock(&self.queue))
    }
}

impl From<&PlayerConfig> for OnlinePlayer {
    fn from(config: &PlayerConfig) -> Self {
        let mut player =
            OnlinePlayer::new(&config.name, config.privileges).with_game_mode(config.game_mode);

        if let Some(score) = &config.recent_score {
            player = player.with_recent_score(config.game_mode, score.clone());
        }
        if let Some(match_id) = config.match_id {
            player = player.with_match(match_id);
        }

        player
    }
}

impl Player for OnlinePlayer {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn privileges(&self) -> Privileges {
        self.privileges
    }

    fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    fn recent_score(&self, mode: GameMode) -> Option<Score> {
        self.recent_scores.get(&mode).cloned()
    }

    fn current_match(&self) -> Option<MatchId> {
        *lock(&self.current_match)
    }

    fn enqueue(&self, data: Vec<u8>) {
        debug!("enqueue {} bytes for {}", data.len(), self.name);
        lock(&self.queue).push(data);
    }

    fn join_match(&self, match_id: MatchId) {
        debug!("{} joins match {}", self.name, match_id);
        *lock(&self.current_match) = Some(match_id);
    }
}

/// Directory of the players currently online.
#[derive(Debug, Default)]
pub struct Lobby {
    players: Vec<Arc<OnlinePlayer>>,
}

impl Lobby {
    pub fn new() -> Self {
        Lobby::default()
    }

    /// Adds a player and returns a handle to it.
    pub fn add(&mut self, player: OnlinePlayer) -> Arc<OnlinePlayer> {
        let player = Arc::new(player);
        self.players.push(Arc::clone(&player));
        player
    }

    /// All online players, in the order they joined.
    pub fn players(&self) -> &[Arc<OnlinePlayer>] {
        &self.players
    }
}

impl PlayerDirectory for Lobby {
    fn get_by_name(&self, name: &str) -> Option<Arc<dyn Player>> {
        self.players
            .iter()
            .find(|player| player.name == name)
            .map(|player| Arc::clone(player) as Arc<dyn Player>)
    }

    fn enqueue(&self, data: Vec<u8>) {
        for player in &self.players {
            player.enqueue(data.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_lobby() -> Lobby {
        let mut lobby = Lobby::new();
        lobby.add(OnlinePlayer::new("Alice", Privileges::NORMAL));
        lobby.add(OnlinePlayer::new("Bob Smith", Privileges::NORMAL));
        lobby
    }

    #[test]
    fn test_get_by_name() {
        let lobby = create_test_lobby();
        let player = lobby.get_by_name("Bob Smith").unwrap();
        assert_eq!(player.name(), "Bob Smith");
    }

    #[test]
    fn test_get_by_name_is_exact() {
        let lobby = create_test_lobby();
        assert!(lobby.get_by_name("alice").is_none());
        assert!(lobby.get_by_name("Bob").is_none());
    }

    #[test]
    fn test_enqueue_broadcasts() {
        let lobby = create_test_lobby();
        lobby.enqueue(vec![1, 2, 3]);

        for player in lobby.players() {
            assert_eq!(player.dequeue(), vec![vec![1, 2, 3]]);
        }
    }

    #[test]
    fn test_dequeue_drains() {
        let player = OnlinePlayer::new("Alice", Privileges::NORMAL);
        player.enqueue(vec![1]);
        player.enqueue(vec![2]);
        assert_eq!(player.dequeue(), vec![vec![1], vec![2]]);
        assert!(player.dequeue().is_empty());
    }

    #[test]
    fn test_join_match() {
        let player = OnlinePlayer::new("Alice", Privileges::NORMAL);
        assert_eq!(player.current_match(), None);
        player.join_match(MatchId(4));
        assert_eq!(player.current_match(), Some(MatchId(4)));
    }

    #[test]
    fn test_recent_score_per_mode() {
        let score = Score {
            rank: 3,
            map_id: 42,
            pp: 100.0,
        };
        let player = OnlinePlayer::new("Alice", Privileges::NORMAL)
            .with_recent_score(GameMode::Mania, score.clone());

        assert_eq!(player.recent_score(GameMode::Mania), Some(score));
        assert_eq!(player.recent_score(GameMode::Standard), None);
    }

    #[test]
    fn test_from_player_config() {
        let config = PlayerConfig {
            name: "cookiezi".to_string(),
            privileges: Privileges::NORMAL,
            game_mode: GameMode::Taiko,
            match_id: Some(MatchId(9)),
            recent_score: Some(Score {
                rank: 1,
                map_id: 7,
                pp: 1.5,
            }),
        };
        let player = OnlinePlayer::from(&config);

        assert_eq!(player.game_mode(), GameMode::Taiko);
        assert_eq!(player.current_match(), Some(MatchId(9)));
        assert!(player.recent_score(GameMode::Taiko).is_some());
    }
}
