//! Menu-driven directory navigation.
//!
//! [`DirectoryPicker::pick`] offers the immediate subdirectories of a set of
//! roots plus a quit entry, and changes the working directory to whatever is
//! chosen.  [`DirectoryPicker::pick_recursive`] keeps descending from the
//! current directory until the quit entry is chosen.
//!
//! Each pick reports how it ended through a [`PickOutcome`]; nothing is
//! communicated through shared status.

use crate::command::PickOutcome;
use crate::listing::{menu_lines, subdirectories};
use crate::traits::{Menu, WorkingDirectory};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Possible errors from a directory pick.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    #[error("menu error: {0}")]
    Menu(String),
    #[error("working directory error: {0}")]
    WorkingDirectory(String),
    /// The selected directory could not be entered.
    #[error("cannot enter {0}")]
    Enter(String),
}

/// The real process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCwd;

impl WorkingDirectory for ProcessCwd {
    type Error = std::io::Error;

    fn current(&self) -> Result<PathBuf, std::io::Error> {
        std::env::current_dir()
    }

    fn change(&self, path: &Path) -> Result<(), std::io::Error> {
        std::env::set_current_dir(path)
    }
}

/// Result of a [`pick_recursive`](DirectoryPicker::pick_recursive) walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    /// Number of menus shown, including the one where quit was chosen.
    pub iterations: usize,
    /// The last directory entered, if any.
    pub last_entered: Option<PathBuf>,
}

/// Shows directory menus and moves a [`WorkingDirectory`] around.
pub struct DirectoryPicker<'a, M: Menu, D: WorkingDirectory> {
    menu: &'a M,
    cwd: &'a D,
    quit_entry: &'a str,
    prompt: &'a str,
}

impl<'a, M: Menu, D: WorkingDirectory> DirectoryPicker<'a, M, D> {
    pub fn new(menu: &'a M, cwd: &'a D, quit_entry: &'a str, prompt: &'a str) -> Self {
        Self {
            menu,
            cwd,
            quit_entry,
            prompt,
        }
    }

    /// Offer the subdirectories of `roots` (the current directory when
    /// empty) and act on the selection.
    ///
    /// The quit entry is matched exactly and always wins, even over a real
    /// directory spelled the same way.  A typed selection that is not a
    /// listed candidate is still treated as a path, relative to the current
    /// directory.  The returned path is the working directory read back
    /// after the change, so it is absolute.
    pub fn pick(&self, roots: &[PathBuf]) -> Result<PickOutcome, NavigatorError> {
        let roots = if roots.is_empty() {
            vec![self.current()?]
        } else {
            roots.to_vec()
        };

        let dirs = subdirectories(&roots);
        let lines = menu_lines(&dirs, self.quit_entry);
        debug!("offering {} directories", lines.len() - 1);

        let selection = self
            .menu
            .select(&lines, self.prompt)
            .map_err(|e| NavigatorError::Menu(e.to_string()))?;

        let Some(selection) = selection else {
            debug!("directory menu cancelled");
            return Ok(PickOutcome::Cancelled);
        };

        if selection == self.quit_entry {
            info!("quit requested");
            return Ok(PickOutcome::QuitRequested);
        }

        let target = dirs
            .iter()
            .find(|d| d.to_string_lossy() == selection)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(&selection));

        self.cwd
            .change(&target)
            .map_err(|e| NavigatorError::Enter(format!("{}: {}", target.display(), e)))?;
        let entered = self.current()?;
        info!("entered {}", entered.display());
        Ok(PickOutcome::Entered(entered))
    }

    /// Pick once from `roots`, then keep picking from the current directory
    /// until the quit entry is chosen.
    ///
    /// There is no iteration bound: the loop ends only on quit or on an
    /// error other than failing to enter the selection.  A directory that
    /// cannot be entered is logged and the walk carries on from where it is.
    pub fn pick_recursive(&self, roots: &[PathBuf]) -> Result<Walk, NavigatorError> {
        let mut iterations = 0;
        let mut last_entered = None;
        let mut roots = roots;

        loop {
            iterations += 1;
            match self.pick(roots) {
                Ok(PickOutcome::QuitRequested) => break,
                Ok(PickOutcome::Entered(path)) => last_entered = Some(path),
                Ok(PickOutcome::Cancelled) => {}
                Err(NavigatorError::Enter(e)) => warn!("cannot enter {}", e),
                Err(e) => return Err(e),
            }
            roots = &[];
        }

        Ok(Walk {
            iterations,
            last_entered,
        })
    }

    fn current(&self) -> Result<PathBuf, NavigatorError> {
        self.cwd
            .current()
            .map_err(|e| NavigatorError::WorkingDirectory(e.to_string()))
    }
}
