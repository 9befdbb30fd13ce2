//! Raw bytes command handler.
//!
//! Writes arbitrary data to a player's queue. The input is strictly matched
//! before anything is decoded or sent.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::{
    commands::{
        CommandContext,
        responses::{format_invalid_syntax, format_user_not_found},
    },
    utils::unescape_bytes,
};

/// `<username> '<escaped bytes>'`
static SEND_BYTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[\w \[\]-]{2,15}) '(?P<bytes>[\w \\\[\]-]+)'$")
        .expect("send bytes pattern is valid")
});

/// Sends escape-decoded bytes to a player.
///
/// Syntax: `!sbytes <username> '<bytes>'`, e.g. `!sbytes Bob '\x05\x00\x00\x00\x00\x00\x00'`
pub fn handle_send_bytes(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling sbytes command: {:?}", args);

    if args.len() < 2 {
        return Some(format_invalid_syntax());
    }

    let content = args.join(" ");
    let Some(captures) = SEND_BYTES_RE.captures(&content) else {
        return Some(format_invalid_syntax());
    };

    let data = match unescape_bytes(&captures["bytes"]) {
        Ok(data) => data,
        Err(e) => {
            warn!("rejected sbytes payload: {}", e);
            return Some(format_invalid_syntax());
        }
    };

    let Some(target) = context.players.get_by_name(&captures["name"]) else {
        return Some(format_user_not_found());
    };

    target.enqueue(data);
    Some(format!("Wrote data to {}.", target.name()))
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
    fn test_handle_send_bytes() {
        let mut target = MockPlayer::new();
        target.expect_name().return_const("Bob Smith".to_string());
        target
            .expect_enqueue()
            .with(eq(vec![0x05u8, 0x00, b'a', b'\n']))
            .times(1)
            .return_const(());
        let target: Arc<dyn Player> = Arc::new(target);

        let mut players = MockPlayerDirectory::new();
        players
            .expect_get_by_name()
            .with(eq("Bob Smith"))
            .times(1)
            .returning(move |_| Some(Arc::clone(&target)));

        let reply = run(
            handle_send_bytes,
            &MockPlayer::new(),
            &players,
            &["Bob", "Smith", r"'\x05\x00a\n'"],
        );
        assert_eq!(reply, Some("Wrote data to Bob Smith.".to_string()));
    }

    #[test]
    fn test_handle_send_bytes_invalid_syntax() {
        let cases: [&[&str]; 6] = [
            &[],
            &["Bob"],
            // Missing quotes
            &["Bob", r"\x05"],
            // Name too short
            &["B", r"'\x05'"],
            // Characters outside of the allowed set
            &["Bob", r"'\x05;'"],
            // Malformed escape
            &["Bob", r"'\xZ1'"],
        ];

        for args in cases {
            let mut players = MockPlayerDirectory::new();
            players.expect_get_by_name().times(0);

            let reply = run(handle_send_bytes, &MockPlayer::new(), &players, args);
            assert_eq!(reply, Some("Invalid syntax.".to_string()), "{:?}", args);
        }
    }

    #[test]
    fn test_handle_send_bytes_unknown_player() {
        let mut players = MockPlayerDirectory::new();
        players
            .expect_get_by_name()
            .with(eq("Nobody"))
            .returning(|_| None);

        let reply = run(
            handle_send_bytes,
            &MockPlayer::new(),
            &players,
            &["Nobody", "'abc'"],
        );
        assert_eq!(
            reply,
            Some("Could not find a user by that name.".to_string())
        );
    }
}
