//! RTX command handler.

use log::debug;

use crate::{
    commands::{
        CommandContext,
        responses::{format_invalid_syntax, format_user_not_found},
    },
    packets,
};

/// Sends an RTX packet with a message to a player.
///
/// Syntax: `!rtx <username> <message>`, the message is a single word.
pub fn handle_rtx(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling rtx command: {:?}", args);

    if args.len() != 2 {
        return Some(format_invalid_syntax());
    }

    let Some(target) = context.players.get_by_name(args[0]) else {
        return Some(format_user_not_found());
    };

    target.enqueue(packets::rtx(args[1]));
    Some("pong".to_owned())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        commands::testing::run,
        players::{MockPlayer, MockPlayerDirectory, Player},
    };

    #[test]
    fn test_handle_rtx() {
        let mut target = MockPlayer::new();
        target
            .expect_enqueue()
            .with(eq(packets::rtx("boo")))
            .times(1)
            .return_const(());
        let target: Arc<dyn Player> = Arc::new(target);

        let mut players = MockPlayerDirectory::new();
        players
            .expect_get_by_name()
            .with(eq("Bob"))
            .returning(move |_| Some(Arc::clone(&target)));

        let reply = run(handle_rtx, &MockPlayer::new(), &players, &["Bob", "boo"]);
        assert_eq!(reply, Some("pong".to_string()));
    }

    #[test]
    fn test_handle_rtx_wrong_argument_count() {
        for args in [vec!["Bob"], vec!["Bob", "boo", "again"]] {
            let mut players = MockPlayerDirectory::new();
            players.expect_get_by_name().times(0);

            let reply = run(handle_rtx, &MockPlayer::new(), &players, &args);
            assert_eq!(reply, Some("Invalid syntax.".to_string()));
        }
    }

    #[test]
    fn test_handle_rtx_unknown_player() {
        let mut players = MockPlayerDirectory::new();
        players.expect_get_by_name().returning(|_| None);

        let reply = run(handle_rtx, &MockPlayer::new(), &players, &["Bob", "boo"]);
        assert_eq!(
            reply,
            Some("Could not find a user by that name.".to_string())
        );
    }
}
