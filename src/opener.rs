//! [`Opener`] implementation that hands a path or URL to `xdg-open`.

use crate::traits::Opener;
use log::{debug, warn};
use std::process::Command;

pub struct XdgOpener {
    program: String,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to run {program}: {source}")]
pub struct OpenerError {
    program: String,
    source: std::io::Error,
}

impl Default for XdgOpener {
    fn default() -> Self {
        Self::new("xdg-open")
    }
}

impl XdgOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Opener for XdgOpener {
    type Error = OpenerError;

    /// Run the opener and wait for it.
    ///
    /// A non-zero exit status is only logged: the opener has already
    /// reported the problem on the terminal.
    fn open(&self, target: &str) -> Result<(), OpenerError> {
        debug!("{} {:?}", self.program, target);
        let status = Command::new(&self.program)
            .arg(target)
            .status()
            .map_err(|source| OpenerError {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            warn!("{} exited with {} for {:?}", self.program, status, target);
        }
        Ok(())
    }
}
