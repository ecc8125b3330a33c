//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The dispatcher parses input
//! lines, resolves the command name, runs the command, and records the
//! result in an immutable `Session`.

mod commands;
mod dispatcher;
mod interpreter;
mod parser;
mod profile_commands;
mod session;

/// Closed set of built-in command identifiers.
pub use commands::CommandId;
/// Name of the scrollback-reset command handled by the dispatcher.
pub use commands::CLEAR;
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Result of running one line, and the terminal that produces it.
pub use dispatcher::{Outcome, Terminal};
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Input line parsing.
pub use parser::{ParsedLine, parse};
/// Scrollback history and window mode.
pub use session::{Session, WindowMode};
