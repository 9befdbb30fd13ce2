//! Last score command handler.
//!
//! Shows the sender's most recent ranked score in the mode they are playing.

use log::debug;

use crate::commands::CommandContext;

/// Formats the sender's most recent score.
///
/// Syntax: `!last`
pub fn handle_last(context: &CommandContext<'_>, _args: &[&str]) -> Option<String> {
    let mode = context.sender.game_mode();
    debug!("handling last command, mode={}", mode);

    let Some(score) = context.sender.recent_score(mode) else {
        return Some("No recent score found for current mode!".to_owned());
    };

    Some(format!("[#{} @ {}] {:.2}pp", score.rank, score.map_id, score.pp))
}
