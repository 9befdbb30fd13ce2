//! Debug toggle command handler.

use log::debug;

use crate::commands::{CommandContext, responses::format_invalid_syntax};

/// Enables or disables debug output on the server.
///
/// Syntax: `!debug <0|1>`
pub fn handle_debug(context: &CommandContext<'_>, args: &[&str]) -> Option<String> {
    debug!("handling debug command: {:?}", args);

    let enabled = match args {
        ["1"] => true,
        ["0"] => false,
        _ => return Some(format_invalid_syntax()),
    };

    context.server.set_debug(enabled);
    Some("Success.".to_owned())
}
