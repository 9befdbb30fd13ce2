//! Command descriptors and their registry.
//!
//! Commands are declared once at start-up on a [`CommandRegistry`], then frozen
//! with [`CommandRegistry::build`] into a [`Commands`] handle. The handle is
//! immutable and cheap to clone, it is what the
//! [`Commander`](crate::commands::Commander) scans for every chat message.
//! Since a registry cannot be dispatched on, every registration is done before
//! the first message is processed.
//!
//! # Examples
//!
//! ```
//! # use chatcmd::commands::{CommandContext, CommandRegistry};
//! # use chatcmd::privileges::Privileges;
//! fn ping(_context: &CommandContext<'_>, _args: &[&str]) -> Option<String> {
//!     Some("pong".to_owned())
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register("ping", Privileges::NORMAL, true, ping);
//! registry.register_as("!p", Privileges::NORMAL, true, ping);
//!
//! let commands = registry.build();
//! assert_eq!(commands.triggers(), vec!["!ping", "!p"]);
//! ```

use std::{fmt, sync::Arc};

use log::{debug, warn};

use crate::{commands::Handler, privileges::Privileges};

/// Marker placed in front of a handler name to derive its trigger.
pub const TRIGGER_PREFIX: char = '!';

/// A registered command.
#[derive(Clone)]
pub struct Command {
    trigger: String,
    handler: Handler,
    privileges: Privileges,
    public: bool,
}

impl Command {
    /// Token activating the command, e.g. `!roll`.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// Privileges a sender needs, any one of the bits is enough.
    pub fn privileges(&self) -> Privileges {
        self.privileges
    }

    /// Whether replies are broadcast to the target instead of the sender only.
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Returns `true` when `privileges` allows invoking the command.
    pub fn is_allowed(&self, privileges: Privileges) -> bool {
        privileges.intersects(self.privileges)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("trigger", &self.trigger)
            .field("privileges", &self.privileges)
            .field("public", &self.public)
            .finish()
    }
}

/// Append-only list of commands being declared.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry::default()
    }

    /// Registers `handler` under a trigger derived from `name`.
    ///
    /// The trigger is `name` prefixed with [`TRIGGER_PREFIX`], so `roll`
    /// becomes `!roll`. Returns the handler unchanged.
    pub fn register(
        &mut self,
        name: &str,
        privileges: Privileges,
        public: bool,
        handler: Handler,
    ) -> Handler {
        let trigger = format!("{}{}", TRIGGER_PREFIX, name);
        self.register_as(&trigger, privileges, public, handler)
    }

    /// Registers `handler` under an explicit trigger.
    ///
    /// Duplicate triggers are accepted. The command registered first wins and
    /// later ones are never dispatched to. An empty trigger or one containing
    /// a space is kept too, but never matches the first token of a message.
    pub fn register_as(
        &mut self,
        trigger: &str,
        privileges: Privileges,
        public: bool,
        handler: Handler,
    ) -> Handler {
        if trigger.is_empty() || trigger.contains(' ') {
            warn!("trigger {:?} can never be matched", trigger);
        }

        if self.commands.iter().any(|command| command.trigger == trigger) {
            debug!("trigger {} already registered, new command is shadowed", trigger);
        }

        self.commands.push(Command {
            trigger: trigger.to_owned(),
            handler,
            privileges,
            public,
        });

        handler
    }

    /// Freezes the registry.
    pub fn build(self) -> Commands {
        Commands {
            commands: self.commands.into(),
        }
    }
}

/// Immutable, shareable list of commands in registration order.
#[derive(Clone, Debug)]
pub struct Commands {
    commands: Arc<[Command]>,
}

impl Commands {
    /// All commands in registration order.
    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Triggers in registration order, duplicates included.
    pub fn triggers(&self) -> Vec<&str> {
        self.commands.iter().map(Command::trigger).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::{CommandContext, testing::run},
        players::{MockPlayer, MockPlayerDirectory},
    };

    fn call(handler: Handler) -> Option<String> {
        run(handler, &MockPlayer::new(), &MockPlayerDirectory::new(), &[])
    }

    fn first(_context: &CommandContext<'_>, _args: &[&str]) -> Option<String> {
        Some("first".to_owned())
    }

    fn second(_context: &CommandContext<'_>, _args: &[&str]) -> Option<String> {
        Some("second".to_owned())
    }

    #[test]
    fn test_register_derives_trigger_from_name() {
        let mut registry = CommandRegistry::new();
        registry.register("roll", Privileges::NORMAL, true, first);

        let commands = registry.build();
        assert_eq!(commands.triggers(), vec!["!roll"]);
    }

    #[test]
    fn test_register_as_overrides_trigger() {
        let mut registry = CommandRegistry::new();
        registry.register_as("!alertu", Privileges::ADMIN, false, first);

        let commands = registry.build();
        let command = &commands.all()[0];
        assert_eq!(command.trigger(), "!alertu");
        assert_eq!(command.privileges(), Privileges::ADMIN);
        assert!(!command.is_public());
    }

    #[test]
    fn test_register_returns_handler() {
        let mut registry = CommandRegistry::new();
        let handler = registry.register("first", Privileges::NORMAL, true, first);
        assert_eq!(call(handler), Some("first".to_owned()));
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = CommandRegistry::new();
        registry.register("b", Privileges::NORMAL, true, first);
        registry.register("a", Privileges::NORMAL, true, first);
        registry.register("c", Privileges::NORMAL, true, first);

        assert_eq!(registry.build().triggers(), vec!["!b", "!a", "!c"]);
    }

    #[test]
    fn test_duplicate_triggers_are_accepted() {
        let mut registry = CommandRegistry::new();
        registry.register("dup", Privileges::NORMAL, true, first);
        registry.register("dup", Privileges::NORMAL, false, second);

        let commands = registry.build();
        assert_eq!(commands.len(), 2);
        assert_eq!(call(commands.all()[0].handler()), Some("first".to_owned()));
        assert_eq!(call(commands.all()[1].handler()), Some("second".to_owned()));
    }

    #[test]
    fn test_is_allowed() {
        let mut registry = CommandRegistry::new();
        registry.register("admin", Privileges::ADMIN, false, first);
        let commands = registry.build();
        let command = &commands.all()[0];

        assert!(command.is_allowed(Privileges::NORMAL | Privileges::ADMIN));
        assert!(!command.is_allowed(Privileges::NORMAL));
        assert!(!command.is_allowed(Privileges::NONE));
    }

    #[test]
    fn test_empty_registry() {
        let commands = CommandRegistry::new().build();
        assert!(commands.is_empty());
        assert!(commands.all().is_empty());
    }

    #[test]
    fn test_cloned_handle_shares_commands() {
        let mut registry = CommandRegistry::new();
        registry.register("a", Privileges::NORMAL, true, first);
        let commands = registry.build();
        let cloned = commands.clone();

        assert_eq!(commands.triggers(), cloned.triggers());
    }

    #[test]
    fn test_register_unmatchable_triggers_is_accepted() {
        let mut registry = CommandRegistry::new();
        let handler = registry.register_as("", Privileges::NORMAL, true, first);
        registry.register_as("!a b", Privileges::NORMAL, true, second);

        assert_eq!(call(handler), Some("first".to_owned()));
        assert_eq!(registry.build().triggers(), vec!["", "!a b"]);
    }
}
