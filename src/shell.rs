//! Functions that emit data for the wrapping shell functions.
//!
//! A child process cannot change its parent shell's working directory, so
//! `godir` and `godir-rec` print the directory they ended in and the shell
//! function generated here performs the `cd`.

use crate::command::Shell;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

pub const CD_PREFIX: &str = "__DMWIN_CD__=";

/// The machine-readable line telling the wrapper where to `cd`, without the
/// trailing newline.
///
/// The path is written as raw bytes so names that are not valid UTF-8 reach
/// the shell unchanged.
pub fn cd_payload(dir: &Path) -> Vec<u8> {
    let mut line = CD_PREFIX.as_bytes().to_vec();
    line.extend_from_slice(dir.as_os_str().as_bytes());
    line
}

/// Shell functions for every subcommand, for `.bashrc` or `.zshrc`.
///
/// The binary is invoked by its package name, read from `Cargo.toml` at
/// compile time.
pub fn functions(shell: Shell) -> String {
    let bin = env!("CARGO_PKG_NAME");
    let (test_open, test_close) = match shell {
        Shell::Bash => ("[", "]"),
        Shell::Zsh => ("[[", "]]"),
    };
    format!(
        r#"
# {bin}: dmenu-driven window, desktop and directory switching
gowin() {{ command {bin} gowin; }}
fetchwin() {{ command {bin} fetchwin; }}
killwin() {{ command {bin} killwin; }}
godesk() {{ command {bin} godesk; }}
browse() {{ command {bin} browse "$@"; }}

__{bin}_cd() {{
    local output
    output="$(command {bin} "$@")"
    local rc=$?
    local dest=""
    while IFS= read -r line; do
        case "$line" in
            {CD_PREFIX}*) dest="${{line#{CD_PREFIX}}}" ;;
        esac
    done <<< "$output"
    if {test_open} -n "$dest" {test_close} && {test_open} -d "$dest" {test_close}; then
        cd "$dest" || return
    fi
    return $rc
}}
godir() {{ __{bin}_cd godir "$@"; }}
godir_rec() {{ __{bin}_cd godir-rec "$@"; }}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn payload_carries_prefix_and_path() {
        assert_eq!(
            cd_payload(Path::new("/home/me/src")),
            b"__DMWIN_CD__=/home/me/src"
        );
    }

    #[test]
    fn payload_keeps_non_utf8_bytes() {
        let dir = Path::new(OsStr::from_bytes(b"/tmp/caf\xe9-\xff"));
        let payload = cd_payload(dir);
        assert!(payload.ends_with(b"/tmp/caf\xe9-\xff"));
        assert!(!payload.windows(3).any(|w| w == "\u{fffd}".as_bytes()));
    }

    #[test]
    fn functions_define_every_command() {
        for shell in [Shell::Bash, Shell::Zsh] {
            let script = functions(shell);
            for name in ["gowin()", "fetchwin()", "killwin()", "godesk()", "browse()", "godir()", "godir_rec()"] {
                assert!(script.contains(name), "{:?} script lacks {}", shell, name);
            }
            assert!(script.contains(CD_PREFIX));
            assert!(script.contains("return $rc"));
        }
    }

    #[test]
    fn zsh_uses_double_brackets() {
        assert!(functions(Shell::Zsh).contains("[[ -d \"$dest\" ]]"));
        assert!(functions(Shell::Bash).contains("[ -d \"$dest\" ]"));
    }
}
