//! Alert command handlers.
//!
//! Send a notification popup either to everyone online (`!alert`) or to a
//! single player (`!alertu`).

use log::debug;

use crate::{
    commands::{
        CommandContext,
        responses::{format_invalid_syntax, format_user_not_found},
    },
    packets,
};

/// Sends a notification to every online player.
///
/// Syntax: `!alert <message>`
pub fn handle_alert(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling alert command: {:?}", args);

    if args.is_empty() {
        return Some(format_invalid_syntax());
    }

    context.players.enqueue(packets::notification(&args.join(" ")));
    Some("Alert sent.".to_owned())
}

/// Sends a notification to one player.
///
/// Syntax: `!alertu <username> <message>`
pub fn handle_alert_user(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling alert user command: {:?}", args);

    if args.len() < 2 {
        return Some(format_invalid_syntax());
    }

    let Some(target) = context.players.get_by_name(args[0]) else {
        return Some(format_user_not_found());
    };

    target.enqueue(packets::notification(&args[1..].join(" ")));
    Some("Alert sent.".to_owned())
}
