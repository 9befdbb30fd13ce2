//! Empty packet command handler.
//!
//! Writes a packet without payload to a player's queue. Mostly useful to
//! poke at client behaviour while developing.

use log::debug;

use crate::{
    commands::{
        CommandContext,
        actions::is_numeric,
        responses::{format_invalid_syntax, format_user_not_found},
    },
    packets::{self, PacketId},
};

/// Sends an empty packet with the given id to a player.
///
/// Syntax: `!spack <username> <packet_id>`, the name may contain spaces.
pub fn handle_send_empty_packet(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling spack command: {:?}", args);

    let Some((last, name)) = args.split_last() else {
        return Some(format_invalid_syntax());
    };
    if name.is_empty() || !is_numeric(last) {
        return Some(format_invalid_syntax());
    }
    let Ok(id) = last.parse::<u16>() else {
        return Some(format_invalid_syntax());
    };

    let Some(target) = context.players.get_by_name(&name.join(" ")) else {
        return Some(format_user_not_found());
    };

    let packet = PacketId(id);
    target.enqueue(packets::write(packet));
    Some(format!("Wrote {} to {}.", packet, target.name()))
}
