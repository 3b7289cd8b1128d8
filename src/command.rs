//! Commands and types used throughout dmwin.
//!
//! This module defines the vocabulary that all components share:
//! [`Command`] describes every action the launcher can perform,
//! [`PickOutcome`] reports how a directory pick ended, and
//! [`WindowInfo`] / [`DesktopInfo`] carry what the window manager lists.

use clap::{Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Every action the launcher can perform.
///
/// Each variant is also a subcommand of the `dmwin` binary.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Pick a window and switch to it.
    #[command(name = "gowin")]
    GoToWindow,

    /// Pick a window and move it to the current desktop.
    #[command(name = "fetchwin")]
    FetchWindow,

    /// Pick a window and close it.
    #[command(name = "killwin")]
    KillWindow,

    /// Pick a virtual desktop and switch to it.
    #[command(name = "godesk")]
    GoToDesktop,

    /// Pick one subdirectory of the given roots (default: current directory).
    #[command(name = "godir")]
    GoToDirectory {
        /// Directories whose subdirectories are offered.
        roots: Vec<PathBuf>,
    },

    /// Keep picking subdirectories of the current directory until `quit`
    /// is chosen.
    #[command(name = "godir-rec")]
    GoToDirectoryRecursive {
        /// Directories whose subdirectories are offered first.
        roots: Vec<PathBuf>,
    },

    /// Pick a line from FILE (or stdin) and open it with the system opener.
    #[command(name = "browse")]
    Browse {
        /// File to read lines from; stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Print shell functions that wrap every subcommand.
    #[command(name = "init")]
    Init {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::GoToWindow => write!(f, "gowin"),
            Command::FetchWindow => write!(f, "fetchwin"),
            Command::KillWindow => write!(f, "killwin"),
            Command::GoToDesktop => write!(f, "godesk"),
            Command::GoToDirectory { .. } => write!(f, "godir"),
            Command::GoToDirectoryRecursive { .. } => write!(f, "godir-rec"),
            Command::Browse { .. } => write!(f, "browse"),
            Command::Init { .. } => write!(f, "init"),
        }
    }
}

/// Shells that `dmwin init` can emit wrapper functions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
}

/// How a single directory pick ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The working directory was changed to this path.
    Entered(PathBuf),
    /// The menu was dismissed without a selection.  Nothing changed.
    Cancelled,
    /// The quit entry was chosen.  Nothing changed.
    QuitRequested,
}

/// What the launcher did in response to a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selected entity was acted upon.
    Done,
    /// A script to print for the calling shell to evaluate.
    Script(String),
    /// The menu was dismissed, or the selection matched nothing.
    Cancelled,
    /// A single directory pick finished.
    Picked(PickOutcome),
    /// A recursive directory pick finished after `iterations` menus.
    ///
    /// `last_entered` is the directory the working directory ended up in,
    /// if any pick entered one.
    Walked {
        iterations: usize,
        last_entered: Option<PathBuf>,
    },
}

/// One window as listed by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// Window manager id (e.g. `"0x03a00003"`).
    pub id: String,
    /// Desktop index, `-1` for sticky windows.
    pub desktop: i32,
    /// Client machine name, `"N/A"` when unknown.
    pub host: String,
    /// Human-readable title.  May be empty.
    pub title: String,
}

impl WindowInfo {
    /// The line shown in the menu for this window.
    pub fn label(&self) -> &str {
        &self.title
    }
}

/// One virtual desktop as listed by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopInfo {
    pub index: u32,
    /// Whether this is the desktop currently shown.
    pub current: bool,
    pub name: String,
}

impl DesktopInfo {
    /// The line shown in the menu for this desktop: `"<index> <name>"`.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.index.to_string()
        } else {
            format!("{} {}", self.index, self.name)
        }
    }
}
