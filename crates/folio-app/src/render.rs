use folio_terminal::{Session, WindowMode};
use folio_types::config::TerminalConfig;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// The full view for `session`: window chrome (normal mode only) then
/// every scrollback line.
pub fn view_lines(config: &TerminalConfig, session: &Session) -> Vec<String> {
    let mut lines = Vec::new();
    if session.mode() == WindowMode::Normal {
        let rule = "=".repeat(config.width);
        lines.push(rule.clone());
        lines.push(format!("{:^width$}", config.title(), width = config.width));
        lines.push(rule);
    }
    lines.extend(session.lines().map(str::to_string));
    lines
}

/// Lines to write when moving from `prev` to `next` on a non-interactive
/// stream.
///
/// When `next` only appended to `prev` (same mode), just the new lines are
/// returned; any other transition repaints the whole view.
pub fn delta_lines(config: &TerminalConfig, prev: &Session, next: &Session) -> Vec<String> {
    let old = prev.history();
    let new = next.history();
    if prev.mode() == next.mode() && new.len() >= old.len() && new.starts_with(old) {
        return new[old.len()..]
            .iter()
            .flat_map(|entry| entry.split('\n'))
            .map(str::to_string)
            .collect();
    }
    view_lines(config, next)
}
