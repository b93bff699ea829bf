//! Guess Number entry point
//!
//! Parses flags, validates the configuration and runs the session loop.

use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;

use guess_number::cli::Cli;
use guess_number::consts::VERSION;
use guess_number::platform::{ConsoleInput, InterruptFlag, WakeableReader};
use guess_number::session::run_session;
use guess_number::sim::SecretRng;
use guess_number::ui::ConsoleRenderer;
use guess_number::{ConfigError, ExitStatus, FileBackend, ScoreStore};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let show_version = cli.version;
    let settings = cli.into_settings();
    let strings = settings.lang.strings();

    if show_version {
        println!("{}", strings.version(VERSION));
        return ExitCode::SUCCESS;
    }

    if let Err(e) = settings.validate() {
        log::error!("Invalid configuration: {}", e);
        let message = match e {
            ConfigError::RangeTooSmall { .. } => strings.config_error_range(),
            ConfigError::NoAttempts => strings.config_error_attempts(),
        };
        eprintln!("{message}");
        return ExitCode::from(ExitStatus::ConfigError.code());
    }

    let mut rng = SecretRng::new(settings.seed);
    if let Some(seed) = rng.seed {
        log::info!("Using seed: {}", seed);
    }

    let score_path = settings.score_path();
    log::debug!("Score record at {}", score_path.display());
    let mut store = ScoreStore::new(FileBackend::new(score_path));

    // Ctrl+C wakes the pending prompt so the session ends as interrupted
    let interrupt = InterruptFlag::new();
    let (stdin, waker) = WakeableReader::stdin();
    let handler_flag = interrupt.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        handler_flag.raise();
        waker.wake();
    }) {
        log::warn!("Could not install Ctrl+C handler: {}", e);
    }

    let mut input = ConsoleInput::new(BufReader::new(stdin), io::stdout(), settings.lang)
        .with_interrupt(interrupt);
    let mut renderer = ConsoleRenderer::new(io::stdout(), settings.lang, settings.color, settings.quiet);

    let status = run_session(&settings, &mut rng, &mut input, &mut renderer, &mut store);
    ExitCode::from(status.code())
}
