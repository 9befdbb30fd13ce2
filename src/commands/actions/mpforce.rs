//! Multiplayer force join command handler.

use log::debug;

use crate::commands::{
    CommandContext,
    responses::{format_invalid_syntax, format_user_not_found},
};

/// Moves a player into the sender's multiplayer match.
///
/// Syntax: `!mpforce <username>`, the name may contain spaces.
pub fn handle_mpforce(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling mpforce command: {:?}", args);

    if args.is_empty() {
        return Some(format_invalid_syntax());
    }

    let Some(target) = context.players.get_by_name(&args.join(" ")) else {
        return Some(format_user_not_found());
    };

    let Some(match_id) = context.sender.current_match() else {
        return Some("You must be in a multiplayer match to use this.".to_owned());
    };

    target.join_match(match_id);
    Some("Welcome.".to_owned())
}
