//! Session state: scrollback and window mode.
//!
//! A [`Session`] is a value. Every transition returns a new session and
//! leaves the old one untouched, which keeps the dispatcher a pure
//! function of `(input, session)`.

/// How the host window is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Fullscreen,
}

impl WindowMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Fullscreen,
            Self::Fullscreen => Self::Normal,
        }
    }
}

/// Scrollback history plus window mode for one mounted terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    history: Vec<String>,
    mode: WindowMode,
}

impl Session {
    /// Fresh session showing `banner`, in normal mode.
    pub fn new(banner: &[String]) -> Self {
        Self {
            history: banner.to_vec(),
            mode: WindowMode::Normal,
        }
    }

    /// Scrollback entries in display order.
    ///
    /// An entry may contain embedded line breaks; it is still one entry.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Current window mode.
    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Visual lines: every entry split on its line breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.history.iter().flat_map(|entry| entry.split('\n'))
    }

    /// Flip the window mode. History is untouched.
    pub fn toggle_mode(&self) -> Self {
        Self {
            history: self.history.clone(),
            mode: self.mode.toggled(),
        }
    }

    /// New session with `entries` appended to the scrollback.
    pub(crate) fn appended<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut history = self.history.clone();
        history.extend(entries);
        Self {
            history,
            mode: self.mode,
        }
    }

    /// New session whose scrollback is exactly `banner`. Mode is kept.
    pub(crate) fn reset(&self, banner: &[String]) -> Self {
        Self {
            history: banner.to_vec(),
            mode: self.mode,
        }
    }
}
