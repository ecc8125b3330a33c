use crate::app_state::AppState;

/// Host action that flips between normal and fullscreen presentation.
pub const MODE_TOGGLE: &str = ":mode";

/// Host action that ends the program.
pub const QUIT: &str = ":quit";

/// Result of handling a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Handle one line read from stdin.
///
/// Host actions are matched on the exact trimmed line and never reach the
/// terminal; everything else is submitted as a command.
pub fn handle_line(line: &str, state: &mut AppState) -> InputResult {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        QUIT => return InputResult::Quit,
        MODE_TOGGLE => {
            state.session = state.session.toggle_mode();
            log::debug!("window mode now {:?}", state.session.mode());
        },
        _ => {
            state.session = state.terminal.execute(line, &state.session);
        },
    }
    InputResult::Continue
}
