//! Command trait, environment, and registry.

use std::collections::HashMap;

use folio_platform::Clock;
use folio_types::config::TerminalConfig;
use folio_types::error::Result;
use folio_types::profile::Profile;

/// Read-only context passed to every command.
///
/// Commands see the static profile and configuration plus the clock. They
/// never see the session; only the dispatcher writes the scrollback.
pub struct Environment<'a> {
    /// Identity and presentation settings.
    pub config: &'a TerminalConfig,
    /// Profile records rendered by the profile commands.
    pub profile: &'a Profile,
    /// Wall clock for `date`.
    pub clock: &'a dyn Clock,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "echo \[text...\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments.
    ///
    /// The returned text becomes one scrollback entry; it may span
    /// several lines.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<String>;
}

/// Registry of available commands, keyed by lower-cased name.
///
/// Populated once at startup and read-only afterwards.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_lowercase();
        if self.commands.insert(key, cmd).is_some() {
            log::debug!("command re-registered, previous handler replaced");
        }
    }

    /// Look up a command by name, ignoring case. Exact match only.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    /// Whether a command with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Sorted list of registered command names.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
