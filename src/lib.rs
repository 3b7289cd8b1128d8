//! **dmwin** — dmenu-driven window, desktop and directory switching.
//!
//! Every command follows the same shape: list some lines (windows,
//! desktops, subdirectories, lines of a file), let the user pick one in a
//! popup menu, and act on the pick.
//!
//! # Architecture
//!
//! The crate is organised around four traits in [`traits`]:
//!
//! * [`traits::WindowManager`] — lists windows and desktops and acts on them.
//! * [`traits::Menu`] — the blocking popup selector.
//! * [`traits::Opener`] — the system's default path/URL handler.
//! * [`traits::WorkingDirectory`] — the directory a pick moves around in.
//!
//! [`launcher::Launcher`] and [`navigator::DirectoryPicker`] only depend on
//! these abstractions.  Concrete implementations live in [`wmctrl`],
//! [`menu`], [`opener`] and [`navigator::ProcessCwd`].

pub mod command;
pub mod config;
pub mod launcher;
pub mod listing;
pub mod menu;
pub mod navigator;
pub mod opener;
pub mod shell;
pub mod traits;
pub mod wmctrl;
