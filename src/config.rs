//! Configuration handling for the TUI

use crate::state::{View, DEFAULT_LOGIN_DELAY};
use crate::theme::Theme;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Preferred theme
    pub theme: Option<Theme>,
    /// Simulated developer sign-in delay in milliseconds
    pub login_delay_ms: Option<u64>,
    /// Start without the splash animation
    pub skip_splash: Option<bool>,
    /// Save the theme back to this file whenever it is toggled
    pub remember_theme: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "devconnect", "devconnect-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        self.login_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LOGIN_DELAY)
    }

    pub fn remembers_theme(&self) -> bool {
        self.remember_theme.unwrap_or(false)
    }
}

/// Errors from command line parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
    #[error("{0}")]
    InvalidTheme(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

pub const USAGE: &str = "\
Usage: devconnect [OPTIONS]

Options:
  --route <PATH>     Start at a route, e.g. /developer/login
  --theme <THEME>    light or dark
  --no-splash        Skip the splash animation
  -h, --help         Print help";

/// Options given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub route: Option<View>,
    pub theme: Option<Theme>,
    pub no_splash: bool,
    pub show_help: bool,
}

impl LaunchOptions {
    /// Parse arguments, excluding the program name
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--route" => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--route"))?;
                    let view =
                        View::from_path(&path).ok_or(ConfigError::UnknownRoute(path))?;
                    options.route = Some(view);
                }
                "--theme" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--theme"))?;
                    let theme = value.parse().map_err(ConfigError::InvalidTheme)?;
                    options.theme = Some(theme);
                }
                "--no-splash" => options.no_splash = true,
                "-h" | "--help" => options.show_help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(options)
    }

    /// View shown once the splash is done
    pub fn start_view(&self) -> View {
        self.route.unwrap_or_default()
    }

    pub fn shows_splash(&self, config: &TuiConfig) -> bool {
        !self.no_splash && !config.skip_splash.unwrap_or(false)
    }
}
