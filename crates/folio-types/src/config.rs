//! Terminal configuration.
//!
//! Every key is optional; a missing key falls back to its default. Loaded
//! from a `folio.toml` file by the host, or built with
//! [`TerminalConfig::default`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Identity and presentation settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    /// Whose terminal this is. Used in the banner, `whoami` and the title bar.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Role line reported by `whoami`.
    #[serde(default = "default_role")]
    pub role: String,
    /// Location line reported by `whoami`.
    #[serde(default = "default_location")]
    pub location: String,
    /// User part of the input prompt.
    #[serde(default = "default_user")]
    pub user: String,
    /// Host part of the input prompt.
    #[serde(default = "default_host")]
    pub host: String,
    /// Directory reported by `pwd`.
    #[serde(default = "default_home_dir")]
    pub home_dir: String,
    /// Directory holding the profile JSON files. `None` uses the built-in sample.
    #[serde(default)]
    pub profile_dir: Option<PathBuf>,
    /// Width of the title-bar rule in normal window mode.
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_owner() -> String {
    "Guest".to_string()
}
fn default_role() -> String {
    "Software Developer".to_string()
}
fn default_location() -> String {
    "Rust Terminal".to_string()
}
fn default_user() -> String {
    "guest".to_string()
}
fn default_host() -> String {
    "terminal".to_string()
}
fn default_home_dir() -> String {
    "/home/guest/portfolio".to_string()
}
fn default_width() -> usize {
    72
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            role: default_role(),
            location: default_location(),
            user: default_user(),
            host: default_host(),
            home_dir: default_home_dir(),
            profile_dir: None,
            width: default_width(),
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.owner.trim().is_empty() {
            return Err(FolioError::Config("owner must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// A relative `profile_dir` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = config.profile_dir.as_mut()
            && dir.is_relative()
            && let Some(parent) = path.parent()
        {
            *dir = parent.join(&*dir);
        }
        log::debug!("loaded terminal config from {}", path.display());
        Ok(config)
    }

    /// The fixed three-line welcome shown on start and after `clear`.
    pub fn banner(&self) -> Vec<String> {
        vec![
            format!("Welcome to {}'s Terminal", self.owner),
            "Type \"help\" for available commands.".to_string(),
            String::new(),
        ]
    }

    /// Input prompt painted before the cursor, e.g. `guest@terminal:~$ `.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$ ", self.user, self.host)
    }

    /// Window title shown in normal mode.
    pub fn title(&self) -> String {
        format!("{}'s Terminal", self.owner)
    }
}
