//! Application startup: arguments, configuration, logging, then the shell

use super::cli::{Args, Settings};
use super::error::{AppError, AppResult};
use super::shell::Shell;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::version::long_version;
use crate::queue::OrderedQueue;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

/// Run the application and return the process exit code
pub fn run() -> i32 {
    let mut args = Args::parse();

    // Logging is not up yet, so configuration problems go to stderr
    let config_path = match args.merge_config_file() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let use_color = settings
        .color
        .unwrap_or_else(|| io::stderr().is_terminal());
    colored::control::set_override(use_color);

    let log_file = settings.log_file.as_ref().map(|p| p.to_string_lossy());
    if let Err(e) = init_logging(
        Some(&settings.log_level),
        Some(&settings.log_format),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error: failed to initialise logging: {}", e);
        return 1;
    }

    log::debug!("ordqueue {}", long_version());
    if let Some(path) = config_path {
        log::debug!("configuration loaded from {}", path.display());
    }

    match run_shell(&settings) {
        Ok(0) => 0,
        Ok(failures) => {
            log::warn!("{} command(s) failed", failures);
            1
        }
        Err(e) => {
            log_error_with_context(&e, "Running commands");
            1
        }
    }
}

fn run_shell(settings: &Settings) -> AppResult<usize> {
    let queue = OrderedQueue::with_limit(settings.discipline, settings.limit);
    log::info!(
        "{} queue ready (limit: {})",
        settings.discipline,
        settings.limit
    );

    let stdout = io::stdout();
    let mut shell = Shell::new(queue, stdout.lock());
    match &settings.script {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::MissingFile { path: path.clone() });
            }
            let file = File::open(path).map_err(|e| AppError::io(path, e))?;
            log::debug!("reading commands from {}", path.display());
            shell.run(BufReader::new(file))
        }
        None => shell.run(io::stdin().lock()),
    }
}
