//! [`WindowManager`] implementation backed by `wmctrl`.
//!
//! Listings come from `wmctrl -l` and `wmctrl -d`; actions address windows
//! by id (`wmctrl -i …`) so that duplicate titles cannot hit the wrong
//! window.

use crate::command::{DesktopInfo, WindowInfo};
use crate::traits::WindowManager;
use log::debug;
use std::process::Command;

/// `wmctrl`-backed window manager.
///
/// Every method call spawns one short-lived `wmctrl` process.
pub struct WmctrlWm {
    program: String,
}

/// Errors that can occur when talking to `wmctrl`.
#[derive(Debug, thiserror::Error)]
#[error("wmctrl error: {0}")]
pub struct WmctrlError(String);

impl Default for WmctrlWm {
    fn default() -> Self {
        Self::new("wmctrl")
    }
}

impl WmctrlWm {
    /// Create a handle that runs `program` (normally `"wmctrl"`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `wmctrl` with `args` and return its stdout.
    ///
    /// A non-zero exit status is an error carrying wmctrl's stderr.
    fn run(&self, args: &[&str]) -> Result<String, WmctrlError> {
        debug!("{} {}", self.program, args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| WmctrlError(format!("spawn {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WmctrlError(format!(
                "`{} {}` exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| WmctrlError(format!("utf-8: {}", e)))
    }
}

//  Output parsing

/// Split off the first whitespace-delimited field of `s`.
///
/// Returns the field and the remainder, with the remainder's leading
/// whitespace removed.
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], s[end..].trim_start())),
        None => Some((s, "")),
    }
}

/// Parse one line of `wmctrl -l`:
///
/// ```text
/// 0x03a00003  0 myhost Terminal - vim
/// ```
///
/// The title is everything after the host field and keeps its inner
/// spacing.
pub fn parse_window_line(line: &str) -> Option<WindowInfo> {
    let (id, rest) = next_field(line)?;
    let (desktop, rest) = next_field(rest)?;
    let desktop: i32 = desktop.parse().ok()?;
    let (host, title) = next_field(rest).unwrap_or(("N/A", ""));
    Some(WindowInfo {
        id: id.to_string(),
        desktop,
        host: host.to_string(),
        title: title.trim_end_matches(['\r', '\n']).to_string(),
    })
}

/// Parse one line of `wmctrl -d`:
///
/// ```text
/// 0  * DG: 3840x1080  VP: 0,0  WA: 0,0 3840x1052  Workspace 1
/// 1  - DG: 3840x1080  VP: N/A  WA: N/A  2
/// ```
///
/// The name follows the work-area geometry, which is either `N/A` or an
/// offset/size pair.
pub fn parse_desktop_line(line: &str) -> Option<DesktopInfo> {
    let (index, rest) = next_field(line)?;
    let index: u32 = index.parse().ok()?;
    let (marker, mut rest) = next_field(rest)?;
    let current = marker == "*";

    while let Some((field, tail)) = next_field(rest) {
        rest = tail;
        if field == "WA:" {
            let (first, tail) = next_field(rest).unwrap_or(("", ""));
            rest = tail;
            if first != "N/A" {
                rest = next_field(rest).map(|(_, t)| t).unwrap_or("");
            }
            break;
        }
    }

    Some(DesktopInfo {
        index,
        current,
        name: rest.trim_end().to_string(),
    })
}

//  WindowManager implementation

impl WindowManager for WmctrlWm {
    type Error = WmctrlError;

    fn windows(&self) -> Result<Vec<WindowInfo>, Self::Error> {
        let out = self.run(&["-l"])?;
        Ok(out.lines().filter_map(parse_window_line).collect())
    }

    fn desktops(&self) -> Result<Vec<DesktopInfo>, Self::Error> {
        let out = self.run(&["-d"])?;
        Ok(out.lines().filter_map(parse_desktop_line).collect())
    }

    fn activate_window(&self, id: &str) -> Result<(), Self::Error> {
        self.run(&["-i", "-a", id]).map(drop)
    }

    fn fetch_window(&self, id: &str) -> Result<(), Self::Error> {
        self.run(&["-i", "-R", id]).map(drop)
    }

    fn close_window(&self, id: &str) -> Result<(), Self::Error> {
        self.run(&["-i", "-c", id]).map(drop)
    }

    fn switch_desktop(&self, index: u32) -> Result<(), Self::Error> {
        self.run(&["-s", &index.to_string()]).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_window_line_keeps_title_spacing() {
        let w = parse_window_line("0x03a00003  0 myhost Terminal -  vim").unwrap();
        assert_eq!(w.id, "0x03a00003");
        assert_eq!(w.desktop, 0);
        assert_eq!(w.host, "myhost");
        assert_eq!(w.title, "Terminal -  vim");
    }

    #[test]
    fn parse_sticky_window() {
        let w = parse_window_line("0x01e00006 -1 N/A panel").unwrap();
        assert_eq!(w.desktop, -1);
        assert_eq!(w.host, "N/A");
        assert_eq!(w.title, "panel");
    }

    #[test]
    fn parse_window_without_title() {
        let w = parse_window_line("0x01e00006  2 box").unwrap();
        assert_eq!(w.title, "");
    }

    #[test]
    fn reject_malformed_window_lines() {
        assert!(parse_window_line("").is_none());
        assert!(parse_window_line("0x1").is_none());
        assert!(parse_window_line("0x1 notanumber host title").is_none());
    }

    #[test]
    fn parse_current_desktop_with_geometry() {
        let d = parse_desktop_line("0  * DG: 3840x1080  VP: 0,0  WA: 0,0 3840x1052  Workspace 1")
            .unwrap();
        assert_eq!(d.index, 0);
        assert!(d.current);
        assert_eq!(d.name, "Workspace 1");
    }

    #[test]
    fn parse_desktop_with_unknown_work_area() {
        let d = parse_desktop_line("1  - DG: 3840x1080  VP: N/A  WA: N/A  2").unwrap();
        assert_eq!(d.index, 1);
        assert!(!d.current);
        assert_eq!(d.name, "2");
    }

    #[test]
    fn desktop_without_work_area_has_empty_name() {
        let d = parse_desktop_line("3  - DG: 100x100").unwrap();
        assert_eq!(d.index, 3);
        assert_eq!(d.name, "");
    }

    #[test]
    fn missing_program_is_an_error() {
        let wm = WmctrlWm::new("dmwin-test-no-such-wmctrl");
        let err = wm.windows().unwrap_err();
        assert!(err.to_string().contains("spawn"));
    }
}
