//! Roll command handler.
//!
//! Draws a random number of points. The optional first argument is the upper
//! bound, capped to keep players from spamming huge numbers in the channel.

use log::debug;
use rand::Rng;

use crate::commands::{CommandContext, actions::is_numeric};

/// Highest bound a player can ask for.
pub const MAX_ROLL: u32 = 32767;

/// Bound used when none, zero or garbage is given.
pub const DEFAULT_ROLL: u32 = 100;

/// Rolls a number in `[0, bound)`.
///
/// Syntax: `!roll [max]`
pub fn handle_roll(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    let bound = roll_bound(args);
    debug!("handling roll command, bound={}", bound);

    let points = rand::thread_rng().gen_range(0..bound);
    Some(format!("{} rolls {} points!", context.sender.name(), points))
}

/// Upper bound requested by the arguments, clamped to [`MAX_ROLL`].
///
/// Falls back to [`DEFAULT_ROLL`] when the first argument is missing, not made
/// of digits, or zero. The result is never zero.
pub fn roll_bound(args: &[&str]) -> u32 {
    let bound = match args.first() {
        // Only overflow can make an all-digit string fail to parse
        Some(arg) if is_numeric(arg) => arg
            .parse::<u32>()
            .map_or(MAX_ROLL, |bound| bound.min(MAX_ROLL)),
        _ => 0,
    };

    match bound {
        0 => DEFAULT_ROLL,
        bound => bound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::testing::run,
        players::{MockPlayer, MockPlayerDirectory},
    };

    fn create_sender() -> MockPlayer {
        let mut sender = MockPlayer::new();
        sender.expect_name().return_const("Alice".to_string());
        sender
    }

    fn rolled_points(reply: &str) -> u32 {
        reply
            .strip_prefix("Alice rolls ")
            .and_then(|rest| rest.strip_suffix(" points!"))
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_roll_bound_default() {
        assert_eq!(roll_bound(&[]), 100);
    }

    #[test]
    fn test_roll_bound_from_argument() {
        assert_eq!(roll_bound(&["6"]), 6);
        assert_eq!(roll_bound(&["32767"]), 32767);
    }

    #[test]
    fn test_roll_bound_clamped() {
        assert_eq!(roll_bound(&["32768"]), MAX_ROLL);
        assert_eq!(roll_bound(&["999999999"]), MAX_ROLL);
        assert_eq!(roll_bound(&["99999999999999999999999999"]), MAX_ROLL);
    }

    #[test]
    fn test_roll_bound_zero_defaults() {
        assert_eq!(roll_bound(&["0"]), 100);
        assert_eq!(roll_bound(&["000"]), 100);
    }

    #[test]
    fn test_roll_bound_non_numeric_defaults() {
        assert_eq!(roll_bound(&["abc"]), 100);
        assert_eq!(roll_bound(&["-5"]), 100);
        assert_eq!(roll_bound(&["1.5"]), 100);
        assert_eq!(roll_bound(&[""]), 100);
    }

    #[test]
    fn test_roll_bound_ignores_extra_arguments() {
        assert_eq!(roll_bound(&["10", "20"]), 10);
    }

    #[test]
    fn test_handle_roll_default_range() {
        let sender = create_sender();
        let players = MockPlayerDirectory::new();

        for _ in 0..200 {
            let reply = run(handle_roll, &sender, &players, &[]).unwrap();
            assert!(rolled_points(&reply) < 100);
        }
    }

    #[test]
    fn test_handle_roll_bound_of_one() {
        let sender = create_sender();
        let players = MockPlayerDirectory::new();

        let reply = run(handle_roll, &sender, &players, &["1"]).unwrap();
        assert_eq!(reply, "Alice rolls 0 points!");
    }

    #[test]
    fn test_handle_roll_huge_bound() {
        let sender = create_sender();
        let players = MockPlayerDirectory::new();

        for _ in 0..200 {
            let reply = run(handle_roll, &sender, &players, &["999999999"]).unwrap();
            assert!(rolled_points(&reply) < MAX_ROLL);
        }
    }
}
