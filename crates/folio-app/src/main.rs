//! folio terminal host.
//!
//! Reads one command per stdin line and repaints the scrollback after each.
//! `:mode` toggles between normal and fullscreen presentation, `:quit` (or
//! end of input) exits.

mod app_state;
mod input;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use app_state::AppState;
use folio_types::config::TerminalConfig;
use folio_types::profile::Profile;
use input::{InputResult, handle_line};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Config from CLI arg, FOLIO_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    let config = match &config_path {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TerminalConfig::default(),
    };

    let profile = match &config.profile_dir {
        Some(dir) => Profile::load_dir(dir)
            .with_context(|| format!("loading profile from {}", dir.display()))?,
        None => Profile::sample().context("loading built-in sample profile")?,
    };
    log::info!("Starting {}", config.title());

    let prompt = config.prompt();
    let mut state = AppState::new(config, profile);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let interactive = stdout.is_terminal();

    let first_frame = render::view_lines(state.terminal.config(), &state.session);
    paint(&mut stdout, interactive, &first_frame)?;

    let mut line = String::new();
    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !interactive {
            writeln!(stdout)?;
        }

        let before = state.session.clone();
        if handle_line(&line, &mut state) == InputResult::Quit {
            break;
        }

        let lines = if interactive {
            render::view_lines(state.terminal.config(), &state.session)
        } else {
            render::delta_lines(state.terminal.config(), &before, &state.session)
        };
        paint(&mut stdout, interactive, &lines)?;
    }

    log::info!("Shutting down");
    Ok(())
}

/// Write a view. Interactive terminals are wiped first so the view replaces
/// the previous frame.
fn paint(out: &mut impl Write, interactive: bool, lines: &[String]) -> io::Result<()> {
    if interactive {
        write!(out, "{}", render::CLEAR_SCREEN)?;
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
