//! Entry point for the **dmwin** binary.
//!
//! Parses the subcommand, loads the configuration, wires the real backends
//! into a [`Launcher`](dmwin::launcher::Launcher) and maps the outcome to an
//! exit status: `0` normally, `2` when a `godir` pick ended on the quit
//! entry, `1` on error.  `init` goes through the launcher like every other
//! subcommand and its script is printed on stdout.

use clap::Parser;
use dmwin::command::{Command, Outcome, PickOutcome};
use dmwin::config::Config;
use dmwin::launcher::{Launcher, LauncherError};
use dmwin::menu::dmenu::DmenuMenu;
use dmwin::navigator::ProcessCwd;
use dmwin::opener::XdgOpener;
use dmwin::shell;
use dmwin::wmctrl::wm::WmctrlWm;
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Configuration file (default: `$XDG_CONFIG_HOME/dmwin/config.json`).
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Load the config from `--config`, or from the default location, falling
/// back to compiled-in defaults.
///
/// An explicitly requested file that cannot be loaded is an error.
fn load_config(explicit: Option<PathBuf>) -> Result<Config, dmwin::config::ConfigError> {
    if let Some(path) = explicit {
        return Config::load(&path);
    }
    let path = Config::default_path();
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

/// What to print on stdout and which exit status to return for `result`.
fn exit_plan(result: &Result<Outcome, LauncherError>) -> (Option<Vec<u8>>, u8) {
    let cd_line = |dir: &PathBuf| {
        let mut line = shell::cd_payload(dir);
        line.push(b'\n');
        line
    };
    match result {
        Ok(Outcome::Picked(PickOutcome::Entered(dir))) => (Some(cd_line(dir)), 0),
        Ok(Outcome::Picked(PickOutcome::QuitRequested)) => (None, 2),
        Ok(Outcome::Walked {
            last_entered: Some(dir),
            ..
        }) => (Some(cd_line(dir)), 0),
        Ok(Outcome::Script(script)) => (Some(script.clone().into_bytes()), 0),
        Ok(_) => (None, 0),
        Err(_) => (None, 1),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            eprintln!("dmwin: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let launcher = Launcher::new(
        WmctrlWm::new(config.wmctrl.program.clone()),
        DmenuMenu::new(config.menu.clone()),
        XdgOpener::new(config.opener.program.clone()),
        ProcessCwd,
        config,
    );

    let result = launcher.handle(cli.command);
    if let Err(e) = &result {
        error!("{}", e);
        eprintln!("dmwin: {}", e);
    }

    let (output, code) = exit_plan(&result);
    if let Some(bytes) = output {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(&bytes).and_then(|()| stdout.flush()) {
            error!("cannot write to stdout: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::from(code)
}
