//! The dispatcher: parse, look up, execute, record.
//!
//! [`Terminal::execute`] is total. Blank input is a no-op, unknown names
//! and handler failures are rendered into the scrollback, and the caller
//! always gets a usable [`Session`] back.

use folio_platform::Clock;
use folio_types::config::TerminalConfig;
use folio_types::profile::Profile;

use crate::commands::{CLEAR, register_builtins};
use crate::interpreter::{CommandRegistry, Environment};
use crate::parser::{ParsedLine, parse};
use crate::session::Session;

/// Marker prefixed to the echo of every submitted line.
pub const PROMPT_ECHO: &str = "➜ ";

/// Message used when a failing handler gives no detail.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Result of running one parsed line against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The handler returned text.
    Output(String),
    /// No command by that name; carries the name as typed.
    NotFound(String),
    /// The handler failed; carries its message.
    Failed(String),
}

impl Outcome {
    /// The scrollback entry this outcome renders as.
    pub fn into_entry(self) -> String {
        match self {
            Outcome::Output(text) => text,
            Outcome::NotFound(name) => format!("bash: {name}: command not found"),
            Outcome::Failed(message) => format!("Error: {message}"),
        }
    }
}

/// A terminal: the command registry plus the static inputs commands read.
///
/// Owns no session; sessions are values passed through [`Terminal::execute`].
pub struct Terminal {
    registry: CommandRegistry,
    config: TerminalConfig,
    profile: Profile,
    clock: Box<dyn Clock>,
    banner: Vec<String>,
}

impl Terminal {
    /// Terminal with the built-in command set.
    pub fn new(config: TerminalConfig, profile: Profile, clock: Box<dyn Clock>) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self::with_registry(config, profile, clock, registry)
    }

    /// Terminal with a caller-assembled registry.
    pub fn with_registry(
        config: TerminalConfig,
        profile: Profile,
        clock: Box<dyn Clock>,
        registry: CommandRegistry,
    ) -> Self {
        let banner = config.banner();
        log::debug!(
            "terminal ready for {} with {} commands",
            config.owner,
            registry.len()
        );
        Self {
            registry,
            config,
            profile,
            clock,
            banner,
        }
    }

    /// Terminal configuration.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Registered commands.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The three-line welcome shown on start and after `clear`.
    pub fn banner(&self) -> &[String] {
        &self.banner
    }

    /// A fresh session showing the banner.
    pub fn new_session(&self) -> Session {
        Session::new(&self.banner)
    }

    /// Run one submitted line against `session` and return the next session.
    pub fn execute(&self, raw: &str, session: &Session) -> Session {
        let parsed = parse(raw);
        if parsed.is_empty() {
            return session.clone();
        }

        // The prompt echo would be discarded by the reset anyway.
        if parsed.name.to_lowercase() == CLEAR {
            log::debug!("clear: scrollback reset");
            return session.reset(&self.banner);
        }

        let entry = self.dispatch(&parsed).into_entry();
        session.appended([
            format!("{PROMPT_ECHO}{raw}"),
            String::new(),
            entry,
            String::new(),
        ])
    }

    /// Look up and run a non-empty, non-`clear` line.
    pub fn dispatch(&self, parsed: &ParsedLine) -> Outcome {
        let Some(cmd) = self.registry.lookup(&parsed.name) else {
            log::debug!("unknown command: {}", parsed.name);
            return Outcome::NotFound(parsed.name.clone());
        };

        let env = Environment {
            config: &self.config,
            profile: &self.profile,
            clock: self.clock.as_ref(),
        };
        log::debug!("dispatch {} ({} args)", cmd.name(), parsed.args.len());
        match cmd.execute(&parsed.arg_refs(), &env) {
            Ok(text) => Outcome::Output(text),
            Err(e) => {
                log::warn!("{} failed: {e}", cmd.name());
                let message = e.message();
                if message.trim().is_empty() {
                    Outcome::Failed(UNKNOWN_ERROR.to_string())
                } else {
                    Outcome::Failed(message)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use folio_platform::FixedClock;
    use folio_types::error::{FolioError, Result};

    use crate::interpreter::Command;
    use crate::session::WindowMode;

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock(
            DateTime::parse_from_rfc3339("2024-03-05T14:07:09+00:00").unwrap(),
        ))
    }

    fn terminal() -> Terminal {
        Terminal::new(
            TerminalConfig::default(),
            Profile::sample().unwrap(),
            clock(),
        )
    }

    struct FailCmd(&'static str);
    impl Command for FailCmd {
        fn name(&self) -> &str {
            "fail"
        }
        fn description(&self) -> &str {
            "Always fails"
        }
        fn usage(&self) -> &str {
            "fail"
        }
        fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<String> {
            Err(FolioError::Command(self.0.to_string()))
        }
    }

    fn failing_terminal(message: &'static str) -> Terminal {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        reg.register(Box::new(FailCmd(message)));
        Terminal::with_registry(TerminalConfig::default(), Profile::default(), clock(), reg)
    }

    #[test]
    fn new_session_shows_banner() {
        let t = terminal();
        let s = t.new_session();
        assert_eq!(s.history(), t.banner());
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.mode(), WindowMode::Normal);
    }

    #[test]
    fn blank_input_is_noop() {
        let t = terminal();
        let s = t.execute("echo a", &t.new_session());
        assert_eq!(t.execute("", &s), s);
        assert_eq!(t.execute("   \t ", &s), s);
    }

    #[test]
    fn echo_appends_prompt_result_and_blanks() {
        let t = terminal();
        let s = t.execute("ECHO hi there", &t.new_session());
        let h = s.history();
        assert_eq!(h.len(), 7);
        assert_eq!(h[3], "➜ ECHO hi there");
        assert_eq!(h[4], "");
        assert_eq!(h[5], "hi there");
        assert_eq!(h[6], "");
    }

    #[test]
    fn prompt_echo_keeps_raw_text() {
        let t = terminal();
        let s = t.execute("  echo   spaced  ", &t.new_session());
        assert_eq!(s.history()[3], "➜   echo   spaced  ");
        assert_eq!(s.history()[5], "spaced");
    }

    #[test]
    fn unknown_command_keeps_typed_case() {
        let t = terminal();
        let s = t.execute("NoPe --flag", &t.new_session());
        assert_eq!(s.history()[5], "bash: NoPe: command not found");
        assert_eq!(s.history().len(), 7);
    }

    #[test]
    fn clear_resets_to_banner() {
        let t = terminal();
        let mut s = t.new_session();
        for line in ["help", "skills", "nope", "echo x"] {
            s = t.execute(line, &s);
        }
        assert!(s.history().len() > 3);
        let cleared = t.execute("CLEAR", &s);
        assert_eq!(cleared.history(), t.banner());
    }

    #[test]
    fn clear_with_args_still_clears() {
        let t = terminal();
        let s = t.execute("echo a", &t.new_session());
        assert_eq!(t.execute("clear now", &s).history(), t.banner());
    }

    #[test]
    fn clear_preserves_window_mode() {
        let t = terminal();
        let s = t.new_session().toggle_mode();
        let s = t.execute("echo a", &s);
        let cleared = t.execute("clear", &s);
        assert_eq!(cleared.mode(), WindowMode::Fullscreen);
    }

    #[test]
    fn execute_never_changes_mode() {
        let t = terminal();
        let s = t.new_session();
        for line in ["help", "date", "clear", "nope"] {
            assert_eq!(t.execute(line, &s).mode(), WindowMode::Normal);
        }
    }

    #[test]
    fn handler_failure_is_rendered() {
        let t = failing_terminal("disk on fire");
        let s = t.execute("fail", &t.new_session());
        assert_eq!(s.history()[5], "Error: disk on fire");
        assert_eq!(s.history()[6], "");
    }

    #[test]
    fn handler_failure_without_message() {
        let t = failing_terminal("");
        let s = t.execute("FAIL", &t.new_session());
        assert_eq!(s.history()[5], "Error: An unknown error occurred");
    }

    #[test]
    fn help_has_header_line() {
        let t = terminal();
        let s = t.execute("help", &t.new_session());
        assert!(s.lines().any(|l| l.starts_with("Available commands:")));
    }

    #[test]
    fn skills_has_row_per_category() {
        let t = terminal();
        let profile = Profile::sample().unwrap();
        let s = t.execute("skills", &t.new_session());
        for category in profile.skills.keys() {
            let mut label = category.clone();
            label[..1].make_ascii_uppercase();
            let prefix = format!("| {label}");
            assert_eq!(s.lines().filter(|l| l.starts_with(&prefix)).count(), 1);
        }
    }

    #[test]
    fn date_reads_clock() {
        let t = terminal();
        let s = t.execute("date", &t.new_session());
        assert_eq!(s.history()[5], "Tue Mar 05 2024 14:07:09 GMT+0000");
    }

    #[test]
    fn history_grows_by_four_per_command() {
        let t = terminal();
        let mut s = t.new_session();
        let lines = ["help", "whoami", "pwd", "ls", "echo", "experience", "projects"];
        for (n, line) in lines.iter().enumerate() {
            s = t.execute(line, &s);
            assert_eq!(s.history().len(), 3 + 4 * (n + 1));
        }
    }

    #[test]
    fn multiline_output_is_one_entry() {
        let t = terminal();
        let s = t.execute("whoami", &t.new_session());
        assert_eq!(s.history().len(), 7);
        assert_eq!(s.history()[5], "Name: Guest\nRole: Software Developer\nLocation: Rust Terminal");
        assert_eq!(s.lines().count(), 9);
    }

    #[test]
    fn original_session_is_untouched() {
        let t = terminal();
        let s = t.new_session();
        let before = s.clone();
        let _ = t.execute("echo a", &s);
        let _ = t.execute("clear", &s);
        assert_eq!(s, before);
    }

    #[test]
    fn toggle_and_execute_commute() {
        let t = terminal();
        let s = t.new_session();
        let a = t.execute("echo x", &s.toggle_mode());
        let b = t.execute("echo x", &s).toggle_mode();
        assert_eq!(a, b);
    }

    #[test]
    fn outcome_entries() {
        assert_eq!(Outcome::Output("x".into()).into_entry(), "x");
        assert_eq!(
            Outcome::NotFound("foo".into()).into_entry(),
            "bash: foo: command not found"
        );
        assert_eq!(Outcome::Failed("bad".into()).into_entry(), "Error: bad");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn execute_is_total(line in "\\PC{0,40}") {
                let t = terminal();
                let s = t.execute(&line, &t.new_session());
                prop_assert!(s.history().len() >= 3);
            }

            #[test]
            fn blank_lines_are_noops(line in "[ \t]{0,10}") {
                let t = terminal();
                let s = t.execute("echo seed", &t.new_session());
                prop_assert_eq!(t.execute(&line, &s), s);
            }

            #[test]
            fn clear_always_yields_banner(
                lines in proptest::collection::vec("[a-z ]{0,12}", 0..8),
            ) {
                let t = terminal();
                let mut s = t.new_session();
                for line in &lines {
                    s = t.execute(line, &s);
                }
                let cleared = t.execute("clear", &s);
                prop_assert_eq!(cleared.history(), t.banner());
            }

            #[test]
            fn non_clear_commands_grow_by_four(words in proptest::collection::vec("[a-z]{1,8}", 1..6)) {
                let t = terminal();
                let mut s = t.new_session();
                for w in &words {
                    let before = s.history().len();
                    s = t.execute(w, &s);
                    if w == "clear" {
                        prop_assert_eq!(s.history().len(), 3);
                    } else {
                        prop_assert_eq!(s.history().len(), before + 4);
                    }
                }
            }
        }
    }
}
