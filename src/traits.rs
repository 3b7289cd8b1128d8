//! Core traits that decouple dmwin from any specific window manager, menu
//! program or opener.
//!
//! Every concrete backend (`wmctrl`, `dmenu`, `xdg-open`, a test harness, …)
//! implements one of these traits.  The [`Launcher`](crate::launcher::Launcher)
//! and the [`DirectoryPicker`](crate::navigator::DirectoryPicker) only depend
//! on these abstractions.

use crate::command::{DesktopInfo, WindowInfo};
use std::path::{Path, PathBuf};

/// Abstraction over a window manager that can list, activate, relocate and
/// close windows and switch virtual desktops.
///
/// An implementation might shell out to `wmctrl`, or it might be a
/// recording stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return every managed window, in the order the window manager lists them.
    fn windows(&self) -> Result<Vec<WindowInfo>, Self::Error>;

    /// Return every virtual desktop, in index order.
    fn desktops(&self) -> Result<Vec<DesktopInfo>, Self::Error>;

    /// Switch to the desktop holding window `id`, raise it and give it focus.
    fn activate_window(&self, id: &str) -> Result<(), Self::Error>;

    /// Move window `id` to the current desktop, raise it and give it focus.
    fn fetch_window(&self, id: &str) -> Result<(), Self::Error>;

    /// Close window `id` gracefully.
    fn close_window(&self, id: &str) -> Result<(), Self::Error>;

    /// Switch to the desktop with the given index.
    fn switch_desktop(&self, index: u32) -> Result<(), Self::Error>;
}

/// A popup selector presenting a filterable list of lines.
///
/// # Contract
///
/// * [`select`](Menu::select) **blocks** until the user commits or dismisses
///   the popup.  There is no timeout.
/// * `Ok(None)` means the user cancelled (or committed an empty line).  It
///   is not an error.
pub trait Menu {
    /// The error type produced by this menu.
    type Error: std::error::Error + Send + 'static;

    /// Show `items` under `prompt` and return the line the user committed to.
    fn select(&self, items: &[String], prompt: &str) -> Result<Option<String>, Self::Error>;
}

/// The system's default handler for paths and URLs.
pub trait Opener {
    /// The error type produced by this opener.
    type Error: std::error::Error + Send + 'static;

    /// Hand `target` to the opener verbatim.
    fn open(&self, target: &str) -> Result<(), Self::Error>;
}

/// The working directory shared by every step of a directory pick.
///
/// In the binary this is the process working directory; tests substitute an
/// in-memory value so they do not race on the real one.
pub trait WorkingDirectory {
    /// The error type produced when reading or changing the directory.
    type Error: std::error::Error + Send + 'static;

    /// Return the current working directory as an absolute path.
    fn current(&self) -> Result<PathBuf, Self::Error>;

    /// Change the working directory to `path`.
    ///
    /// A relative `path` resolves against [`current`](WorkingDirectory::current).
    fn change(&self, path: &Path) -> Result<(), Self::Error>;
}

/// Recording fakes shared by the unit tests of the orchestrating modules.
#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    pub struct MockError;

    /// A menu that answers from a fixed script and records what it was shown.
    #[derive(Debug, Default)]
    pub struct ScriptedMenu {
        answers: RefCell<VecDeque<Option<String>>>,
        pub shown: RefCell<Vec<(Vec<String>, String)>>,
    }

    impl ScriptedMenu {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = Option<S>>,
            S: Into<String>,
        {
            Self {
                answers: RefCell::new(answers.into_iter().map(|a| a.map(Into::into)).collect()),
                shown: RefCell::default(),
            }
        }

        pub fn calls(&self) -> usize {
            self.shown.borrow().len()
        }
    }

    impl Menu for ScriptedMenu {
        type Error = MockError;

        fn select(&self, items: &[String], prompt: &str) -> Result<Option<String>, MockError> {
            self.shown
                .borrow_mut()
                .push((items.to_vec(), prompt.to_string()));
            // Running out of answers behaves like the user pressing Escape.
            Ok(self.answers.borrow_mut().pop_front().flatten())
        }
    }

    /// Window manager that records every action made on it.
    #[derive(Debug, Default)]
    pub struct RecorderWm {
        pub windows: Vec<WindowInfo>,
        pub desktops: Vec<DesktopInfo>,
        pub activated: RefCell<Vec<String>>,
        pub fetched: RefCell<Vec<String>>,
        pub closed: RefCell<Vec<String>>,
        pub switched: RefCell<Vec<u32>>,
    }

    impl RecorderWm {
        pub fn action_count(&self) -> usize {
            self.activated.borrow().len()
                + self.fetched.borrow().len()
                + self.closed.borrow().len()
                + self.switched.borrow().len()
        }
    }

    impl WindowManager for RecorderWm {
        type Error = MockError;

        fn windows(&self) -> Result<Vec<WindowInfo>, MockError> {
            Ok(self.windows.clone())
        }

        fn desktops(&self) -> Result<Vec<DesktopInfo>, MockError> {
            Ok(self.desktops.clone())
        }

        fn activate_window(&self, id: &str) -> Result<(), MockError> {
            self.activated.borrow_mut().push(id.into());
            Ok(())
        }

        fn fetch_window(&self, id: &str) -> Result<(), MockError> {
            self.fetched.borrow_mut().push(id.into());
            Ok(())
        }

        fn close_window(&self, id: &str) -> Result<(), MockError> {
            self.closed.borrow_mut().push(id.into());
            Ok(())
        }

        fn switch_desktop(&self, index: u32) -> Result<(), MockError> {
            self.switched.borrow_mut().push(index);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingOpener {
        pub opened: RefCell<Vec<String>>,
    }

    impl Opener for RecordingOpener {
        type Error = MockError;

        fn open(&self, target: &str) -> Result<(), MockError> {
            self.opened.borrow_mut().push(target.into());
            Ok(())
        }
    }

    /// In-memory working directory.  Changing into a path does not check
    /// that it exists; relative paths resolve against the current value.
    #[derive(Debug)]
    pub struct FakeCwd {
        pub cwd: RefCell<PathBuf>,
        pub changes: RefCell<Vec<PathBuf>>,
    }

    impl FakeCwd {
        pub fn new(start: impl Into<PathBuf>) -> Self {
            Self {
                cwd: RefCell::new(start.into()),
                changes: RefCell::default(),
            }
        }
    }

    impl WorkingDirectory for FakeCwd {
        type Error = MockError;

        fn current(&self) -> Result<PathBuf, MockError> {
            Ok(self.cwd.borrow().clone())
        }

        fn change(&self, path: &Path) -> Result<(), MockError> {
            let next = self.cwd.borrow().join(path);
            *self.cwd.borrow_mut() = next;
            self.changes.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }
}
