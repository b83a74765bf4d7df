mod app;
mod cli;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod highscore;
mod logging;
mod menu;
mod play;
mod sound;
mod util;
mod warning;
use crate::app::App;
use crate::cli::{Arguments, Invocation};
use crate::config::{Config, ConfigError};
use crate::util::Globals;
use crate::warning::Warning;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use std::io::{self, ErrorKind};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Invocation::from_env() {
        Ok(Invocation::Play(args)) => run(args),
        Ok(Invocation::Help) => {
            print!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("snakebite {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snakebite: {e}\n\n{}", cli::USAGE);
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> ExitCode {
    let (config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(anyhow::Error::new(e))),
    };
    logging::init(config.log_path().as_deref(), config.log_level);
    let warning = config_error.map(|e| {
        log::warn!("Using default configuration: {e:#}");
        Warning::from(&*e)
    });

    let mut globals = Globals::from_config(&config);
    if let Some(difficulty) = args.difficulty {
        globals.difficulty = difficulty;
    }
    if args.no_sound {
        globals.sound = false;
    }
    match globals.high_score.path() {
        Some(path) => log::info!("Keeping high score in {}", path.display()),
        None => log::warn!("No location for the high score file; scores will not be saved"),
    }

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        log::error!("{info}");
        default_hook(info);
    }));
    let terminal = ratatui::init();
    // Losing focus pauses the game, which needs the terminal to report it
    if let Err(e) = execute!(io::stdout(), EnableFocusChange) {
        log::warn!("Failed to enable focus reporting: {e}");
    }
    let r = panic::catch_unwind(AssertUnwindSafe(|| {
        App::new(globals, warning).run(terminal)
    }));
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        log::warn!("Failed to disable focus reporting: {e}");
    }
    ratatui::restore();
    match r {
        Ok(r) => io_exit(r),
        Err(_) => {
            eprintln!("snakebite: the game crashed; the log may have more details");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Arguments) -> Result<Config, ConfigError> {
    match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load(&Config::default_path()?, true),
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => {
            log::info!("Exiting");
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {e}");
            eprintln!("snakebite: {e}");
            ExitCode::from(2)
        }
    }
}
