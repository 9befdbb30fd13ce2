//! Fixed reply texts shared by the command handlers.
//!
//! Handlers never fail loudly: malformed input or an unknown player name is
//! answered with one of these short, single line messages.

use std::time::Duration;

/// Reply for a command called with the wrong arguments.
pub fn format_invalid_syntax() -> String {
    "Invalid syntax.".to_owned()
}

/// Reply for a player name that does not resolve.
pub fn format_user_not_found() -> String {
    "Could not find a user by that name.".to_owned()
}

/// Appends the handling time to a handler's answer.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use chatcmd::commands::responses::format_elapsed;
/// let text = format_elapsed("Alert sent.", Duration::from_micros(1500));
/// assert_eq!(text, "Alert sent. | Elapsed: 1.50ms");
/// ```
pub fn format_elapsed(text: &str, elapsed: Duration) -> String {
    format!("{} | Elapsed: {:.2}ms", text, elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_invalid_syntax() {
        assert_eq!(format_invalid_syntax(), "Invalid syntax.");
    }

    #[test]
    fn test_format_user_not_found() {
        assert_eq!(format_user_not_found(), "Could not find a user by that name.");
    }

    #[test]
    fn test_format_elapsed_two_decimals() {
        assert_eq!(
            format_elapsed("pong", Duration::from_nanos(123_456)),
            "pong | Elapsed: 0.12ms"
        );
        assert_eq!(
            format_elapsed("pong", Duration::ZERO),
            "pong | Elapsed: 0.00ms"
        );
        assert_eq!(
            format_elapsed("pong", Duration::from_secs(2)),
            "pong | Elapsed: 2000.00ms"
        );
    }
}
