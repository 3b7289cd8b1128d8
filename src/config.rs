//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/dmwin/config.json`, or from the path passed on the
//! command line (`--config <path>`).
//!
//! # Example
//!
//! ```json
//! {
//!   "menu": {
//!     "program": "dmenu",
//!     "lines": 15,
//!     "colors": { "selected_background": "#285577" }
//!   },
//!   "prompts": { "window": "go:" },
//!   "quit_entry": "[quit]"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the popup selector is invoked and styled.
    pub menu: MenuConfig,
    /// Prompt label shown by each command.
    pub prompts: Prompts,
    /// Window-manager control program.
    pub wmctrl: ProgramConfig,
    /// Default opener used by `browse`.
    pub opener: ProgramConfig,
    /// Synthetic last entry of every directory menu that ends the pick.
    pub quit_entry: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            prompts: Prompts::default(),
            wmctrl: ProgramConfig {
                program: "wmctrl".into(),
            },
            opener: ProgramConfig {
                program: "xdg-open".into(),
            },
            quit_entry: "quit".into(),
        }
    }
}

/// Popup selector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub program: String,
    /// Number of lines shown vertically (`-l`).
    pub lines: u32,
    /// Match case-insensitively (`-i`).
    pub case_insensitive: bool,
    pub colors: MenuColors,
    /// Appended verbatim after the generated flags.
    pub extra_args: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            program: "dmenu".into(),
            lines: 20,
            case_insensitive: true,
            colors: MenuColors::default(),
            extra_args: Vec::new(),
        }
    }
}

/// dmenu's four colors (`-nb`, `-nf`, `-sb`, `-sf`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuColors {
    pub normal_background: String,
    pub normal_foreground: String,
    pub selected_background: String,
    pub selected_foreground: String,
}

impl Default for MenuColors {
    fn default() -> Self {
        Self {
            normal_background: "#222222".into(),
            normal_foreground: "#bbbbbb".into(),
            selected_background: "#005577".into(),
            selected_foreground: "#eeeeee".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompts {
    pub window: String,
    pub fetch: String,
    pub kill: String,
    pub desktop: String,
    pub directory: String,
    pub browse: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            window: "window:".into(),
            fetch: "fetch:".into(),
            kill: "kill:".into(),
            desktop: "desktop:".into(),
            directory: "cd:".into(),
            browse: "open:".into(),
        }
    }
}

/// An external program invoked by name (resolved through `$PATH`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramConfig {
    pub program: String,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/dmwin/config.json`, falling back to
    /// `$HOME/.config/dmwin/config.json`.
    pub fn default_path() -> PathBuf {
        let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            format!("{}/.config", home)
        });
        PathBuf::from(base).join("dmwin").join("config.json")
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
