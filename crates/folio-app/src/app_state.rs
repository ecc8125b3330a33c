use folio_platform::SystemClock;
use folio_terminal::{Session, Terminal};
use folio_types::config::TerminalConfig;
use folio_types::profile::Profile;

/// All mutable application state: the terminal and its one live session.
pub struct AppState {
    pub terminal: Terminal,
    pub session: Session,
}

impl AppState {
    pub fn new(config: TerminalConfig, profile: Profile) -> Self {
        let terminal = Terminal::new(config, profile, Box::new(SystemClock));
        let session = terminal.new_session();
        Self { terminal, session }
    }
}
