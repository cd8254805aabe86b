//! Command-line arguments
//!
//! Every option is optional here so that values from the configuration file
//! can fill the gaps; defaults are applied when resolving [`Settings`].
//!
//! [`Settings`]: super::config::Settings

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ordqueue")]
#[command(about = "Ordered queue engine with a scriptable command shell")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(after_help = "Commands are read from --script, or from standard input when no script is given")]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Queue discipline (fifo, lifo, priority-high, priority-low, fifo-limited)
    #[arg(short = 'd', long = "discipline", value_name = "NAME")]
    pub discipline: Option<String>,

    /// Capacity limit for fifo-limited queues (0 = unbounded)
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        allow_negative_numbers = true
    )]
    pub limit: Option<i64>,

    /// Command script to execute instead of standard input
    #[arg(short = 's', long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = crate::core::logging::LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = crate::core::logging::LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(short = 'g', long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,
}

impl Args {
    /// Color preference from the command line
    ///
    /// `Some(true)` for `--color`, `Some(false)` for `--no-color`, `None` when
    /// neither flag is given (decided by config file or terminal detection).
    pub fn color_preference(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
