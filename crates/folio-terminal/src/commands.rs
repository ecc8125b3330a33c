//! Built-in commands for the folio terminal.
//!
//! The built-in set is closed: every command is named by a [`CommandId`]
//! and bound to its handler by an exhaustive match, so the registry and
//! the `help` listing can never drift apart.

use folio_types::error::Result;

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::profile_commands::{ExperienceCmd, ProjectsCmd, SkillsCmd};

/// Name of the command the dispatcher intercepts to reset the scrollback.
pub const CLEAR: &str = "clear";

const CLEAR_DESCRIPTION: &str = "Clear the terminal screen";

/// Reply of `echo` with no arguments.
pub const ECHO_EMPTY: &str = "Please provide text to echo";

/// Identifier of every registered built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    Whoami,
    Date,
    Pwd,
    Ls,
    Echo,
    Experience,
    Skills,
    Projects,
}

impl CommandId {
    /// Every built-in, in `help` listing order.
    pub const ALL: [CommandId; 9] = [
        CommandId::Help,
        CommandId::Whoami,
        CommandId::Date,
        CommandId::Pwd,
        CommandId::Ls,
        CommandId::Echo,
        CommandId::Experience,
        CommandId::Skills,
        CommandId::Projects,
    ];

    /// The name typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            CommandId::Help => "help",
            CommandId::Whoami => "whoami",
            CommandId::Date => "date",
            CommandId::Pwd => "pwd",
            CommandId::Ls => "ls",
            CommandId::Echo => "echo",
            CommandId::Experience => "experience",
            CommandId::Skills => "skills",
            CommandId::Projects => "projects",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            CommandId::Help => "Show this help menu",
            CommandId::Whoami => "Display current user details",
            CommandId::Date => "Show current date and time",
            CommandId::Pwd => "Print working directory",
            CommandId::Ls => "List directory contents",
            CommandId::Echo => "Print arguments to the terminal",
            CommandId::Experience => "Print work experience",
            CommandId::Skills => "Print skills",
            CommandId::Projects => "Display project information",
        }
    }

    /// Resolve a typed name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    fn handler(self) -> Box<dyn Command> {
        match self {
            CommandId::Help => Box::new(HelpCmd),
            CommandId::Whoami => Box::new(WhoamiCmd),
            CommandId::Date => Box::new(DateCmd),
            CommandId::Pwd => Box::new(PwdCmd),
            CommandId::Ls => Box::new(LsCmd),
            CommandId::Echo => Box::new(EchoCmd),
            CommandId::Experience => Box::new(ExperienceCmd),
            CommandId::Skills => Box::new(SkillsCmd),
            CommandId::Projects => Box::new(ProjectsCmd),
        }
    }
}

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    for id in CommandId::ALL {
        reg.register(id.handler());
    }
}

/// The `help` listing: a header line, then one row per command with `clear`
/// listed right after `help`.
pub fn help_text() -> String {
    let mut rows = vec![(CommandId::Help.name(), CommandId::Help.description())];
    rows.push((CLEAR, CLEAR_DESCRIPTION));
    rows.extend(
        CommandId::ALL
            .into_iter()
            .filter(|id| *id != CommandId::Help)
            .map(|id| (id.name(), id.description())),
    );

    let mut out = String::from("Available commands:");
    for (name, description) in rows {
        out.push_str(&format!("\n  {name:<12}- {description}"));
    }
    out
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        CommandId::Help.name()
    }
    fn description(&self) -> &str {
        CommandId::Help.description()
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<String> {
        Ok(help_text())
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        CommandId::Whoami.name()
    }
    fn description(&self) -> &str {
        CommandId::Whoami.description()
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<String> {
        let config = env.config;
        Ok(format!(
            "Name: {}\nRole: {}\nLocation: {}",
            config.owner, config.role, config.location
        ))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        CommandId::Date.name()
    }
    fn description(&self) -> &str {
        CommandId::Date.description()
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<String> {
        let now = env.clock.now()?;
        Ok(now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        CommandId::Pwd.name()
    }
    fn description(&self) -> &str {
        CommandId::Pwd.description()
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<String> {
        Ok(env.config.home_dir.clone())
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        CommandId::Ls.name()
    }
    fn description(&self) -> &str {
        CommandId::Ls.description()
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<String> {
        Ok("projects     documents   experiences\nskills       resume      contact.txt".to_string())
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        CommandId::Echo.name()
    }
    fn description(&self) -> &str {
        CommandId::Echo.description()
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<String> {
        if args.is_empty() {
            return Ok(ECHO_EMPTY.to_string());
        }
        Ok(args.join(" "))
    }
}
