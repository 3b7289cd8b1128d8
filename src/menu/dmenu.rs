//! [`Menu`] implementation backed by `dmenu` (or any program that accepts
//! dmenu's flags, such as `rofi -dmenu` via `extra_args`).

use crate::config::MenuConfig;
use crate::traits::Menu;
use log::debug;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Errors produced while running the popup program.
#[derive(Debug, thiserror::Error)]
pub enum DmenuError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A popup selector with a fixed visual configuration.
pub struct DmenuMenu {
    config: MenuConfig,
}

impl DmenuMenu {
    pub fn new(config: MenuConfig) -> Self {
        Self { config }
    }

    /// Command-line arguments passed to the popup program for `prompt`.
    pub fn args(&self, prompt: &str) -> Vec<String> {
        let c = &self.config;
        let mut args = Vec::new();
        if c.case_insensitive {
            args.push("-i".to_string());
        }
        args.extend(["-l".to_string(), c.lines.to_string()]);
        if !prompt.is_empty() {
            args.extend(["-p".to_string(), prompt.to_string()]);
        }
        args.extend([
            "-nb".to_string(),
            c.colors.normal_background.clone(),
            "-nf".to_string(),
            c.colors.normal_foreground.clone(),
            "-sb".to_string(),
            c.colors.selected_background.clone(),
            "-sf".to_string(),
            c.colors.selected_foreground.clone(),
        ]);
        args.extend(c.extra_args.iter().cloned());
        args
    }
}

/// Turn the popup's stdout into a selection.
///
/// Only the single line terminator dmenu appends is removed; an empty result
/// counts as cancelled.
pub fn parse_selection(stdout: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(text.as_ref());
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

impl Menu for DmenuMenu {
    type Error = DmenuError;

    fn select(&self, items: &[String], prompt: &str) -> Result<Option<String>, DmenuError> {
        let args = self.args(prompt);
        debug!("{} {} ({} items)", self.config.program, args.join(" "), items.len());

        let mut child = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| DmenuError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let mut input = String::new();
            for item in items {
                input.push_str(item);
                input.push('\n');
            }
            // A popup that exits before reading everything closes the pipe;
            // its exit status below decides the outcome.
            match stdin.write_all(input.as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("menu closed its input early");
                }
                Err(e) => return Err(e.into()),
            }
            // Dropping stdin closes the pipe so the popup can start.
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            debug!("menu dismissed ({})", output.status);
            return Ok(None);
        }
        Ok(parse_selection(&output.stdout))
    }
}
