//! The orchestrator that ties the window manager, menu, opener and working
//! directory together.
//!
//! [`Launcher`] reacts to [`Command`]s by listing entities, asking the
//! [`Menu`] for a selection and applying it through the [`WindowManager`],
//! the [`Opener`] or a [`DirectoryPicker`].

use crate::command::{Command, DesktopInfo, Outcome, WindowInfo};
use crate::config::Config;
use crate::navigator::{DirectoryPicker, NavigatorError};
use crate::shell;
use crate::traits::{Menu, Opener, WindowManager, WorkingDirectory};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Possible errors from the launcher.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),
    #[error("menu error: {0}")]
    Menu(String),
    #[error("opener error: {0}")]
    Opener(String),
    #[error(transparent)]
    Navigator(#[from] NavigatorError),
    /// The line source for `browse` could not be read.
    #[error("input error: {0}")]
    Input(String),
}

/// Window actions that share the list → select → apply flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowAction {
    Activate,
    Fetch,
    Close,
}

/// Dispatches [`Command`]s.
///
/// The launcher is generic over every external collaborator, so tests can
/// drive it with recording fakes.
///
/// # Typical usage
///
/// ```ignore
/// let launcher = Launcher::new(WmctrlWm::default(), menu, XdgOpener::default(), ProcessCwd, config);
/// launcher.handle(Command::GoToWindow)?;
/// ```
pub struct Launcher<W, M, O, D>
where
    W: WindowManager,
    M: Menu,
    O: Opener,
    D: WorkingDirectory,
{
    wm: W,
    menu: M,
    opener: O,
    cwd: D,
    config: Config,
}

impl<W, M, O, D> Launcher<W, M, O, D>
where
    W: WindowManager,
    M: Menu,
    O: Opener,
    D: WorkingDirectory,
{
    pub fn new(wm: W, menu: M, opener: O, cwd: D, config: Config) -> Self {
        Self {
            wm,
            menu,
            opener,
            cwd,
            config,
        }
    }

    /// Process a single [`Command`].
    ///
    /// Cancelling the menu is not an error: it yields
    /// [`Outcome::Cancelled`] and no action is taken.
    pub fn handle(&self, cmd: Command) -> Result<Outcome, LauncherError> {
        info!("{}", cmd);
        match cmd {
            Command::GoToWindow => self.window_command(WindowAction::Activate),
            Command::FetchWindow => self.window_command(WindowAction::Fetch),
            Command::KillWindow => self.window_command(WindowAction::Close),
            Command::GoToDesktop => self.go_to_desktop(),
            Command::GoToDirectory { roots } => {
                let outcome = self.picker().pick(&roots)?;
                Ok(Outcome::Picked(outcome))
            }
            Command::GoToDirectoryRecursive { roots } => {
                let walk = self.picker().pick_recursive(&roots)?;
                Ok(Outcome::Walked {
                    iterations: walk.iterations,
                    last_entered: walk.last_entered,
                })
            }
            Command::Browse { file } => match file {
                Some(path) => self.browse(open_source(&path)?),
                None => self.browse(std::io::stdin().lock()),
            },
            Command::Init { shell: kind } => Ok(Outcome::Script(shell::functions(kind))),
        }
    }

    /// Offer every non-empty line of `source` and open the selection
    /// verbatim.
    pub fn browse<R: BufRead>(&self, source: R) -> Result<Outcome, LauncherError> {
        let mut lines = Vec::new();
        for line in source.lines() {
            let line = line.map_err(|e| LauncherError::Input(e.to_string()))?;
            if !line.is_empty() {
                lines.push(line);
            }
        }
        debug!("read {} lines", lines.len());

        let Some(selection) = self.select(&lines, &self.config.prompts.browse)? else {
            return Ok(Outcome::Cancelled);
        };
        info!("opening {:?}", selection);
        self.opener
            .open(&selection)
            .map_err(|e| LauncherError::Opener(e.to_string()))?;
        Ok(Outcome::Done)
    }

    fn picker(&self) -> DirectoryPicker<'_, M, D> {
        DirectoryPicker::new(
            &self.menu,
            &self.cwd,
            &self.config.quit_entry,
            &self.config.prompts.directory,
        )
    }

    fn select(&self, items: &[String], prompt: &str) -> Result<Option<String>, LauncherError> {
        self.menu
            .select(items, prompt)
            .map_err(|e| LauncherError::Menu(e.to_string()))
    }

    fn window_command(&self, action: WindowAction) -> Result<Outcome, LauncherError> {
        let prompt = match action {
            WindowAction::Activate => &self.config.prompts.window,
            WindowAction::Fetch => &self.config.prompts.fetch,
            WindowAction::Close => &self.config.prompts.kill,
        };

        let windows = self.wm.windows().map_err(wm_error)?;
        let labels: Vec<String> = windows
            .iter()
            .map(WindowInfo::label)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        let Some(selection) = self.select(&labels, prompt)? else {
            debug!("window menu cancelled");
            return Ok(Outcome::Cancelled);
        };
        let Some(window) = windows.iter().find(|w| w.label() == selection) else {
            warn!("no window titled {:?}", selection);
            return Ok(Outcome::Cancelled);
        };

        info!("{:?} window {} ({})", action, window.id, window.title);
        let applied = match action {
            WindowAction::Activate => self.wm.activate_window(&window.id),
            WindowAction::Fetch => self.wm.fetch_window(&window.id),
            WindowAction::Close => self.wm.close_window(&window.id),
        };
        applied.map_err(wm_error)?;
        Ok(Outcome::Done)
    }

    fn go_to_desktop(&self) -> Result<Outcome, LauncherError> {
        let desktops = self.wm.desktops().map_err(wm_error)?;
        let labels: Vec<String> = desktops.iter().map(DesktopInfo::label).collect();

        let Some(selection) = self.select(&labels, &self.config.prompts.desktop)? else {
            debug!("desktop menu cancelled");
            return Ok(Outcome::Cancelled);
        };
        let Some(desktop) = desktops.iter().find(|d| d.label() == selection) else {
            warn!("no desktop labelled {:?}", selection);
            return Ok(Outcome::Cancelled);
        };

        if desktop.current {
            debug!("desktop {} is already current", desktop.index);
        }
        self.wm.switch_desktop(desktop.index).map_err(wm_error)?;
        Ok(Outcome::Done)
    }
}

fn wm_error<E: std::error::Error>(e: E) -> LauncherError {
    LauncherError::WindowManager(e.to_string())
}

fn open_source(path: &Path) -> Result<BufReader<File>, LauncherError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LauncherError::Input(format!("{}: {}", path.display(), e)))
}
