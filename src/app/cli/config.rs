//! TOML configuration file loading
//!
//! The configuration file uses the long option names as keys:
//!
//! ```toml
//! discipline = "priority-high"
//! limit = 100
//! log-level = "debug"
//! log-format = "ext"
//! log-file = "none"
//! color = false
//! ```
//!
//! Values given on the command line take precedence over the file.

use super::args::Args;
use crate::app::error::{AppError, AppResult};
use crate::core::validation::{
    validate_discipline, validate_limit, validate_log_format, validate_log_level, ValidationError,
};
use crate::queue::Discipline;
use std::path::{Path, PathBuf};

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub discipline: Discipline,
    pub limit: usize,
    pub script: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

/// Default configuration file location, `<config_dir>/Ordqueue/ordqueue.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Ordqueue").join("ordqueue.toml"))
}

pub fn load_config_table(path: &Path) -> AppResult<toml::Table> {
    let contents = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    toml::from_str::<toml::Table>(&contents).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

impl Args {
    /// Merge the configuration file into these arguments
    ///
    /// A file given with `--config-file` must exist; the default location is
    /// used only when present. Returns the path of the file that was applied.
    pub fn merge_config_file(&mut self) -> AppResult<Option<PathBuf>> {
        let config_path = match &self.config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(AppError::MissingFile { path: path.clone() });
                }
                Some(path.clone())
            }
            None => default_config_path().filter(|path| path.is_file()),
        };

        match config_path {
            Some(path) => {
                let config = load_config_table(&path)?;
                self.apply_toml_values(&config)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    /// Fill every option not set on the command line from `config`
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ValidationError> {
        if self.discipline.is_none() {
            self.discipline = string_value(config, "discipline")?;
        }
        if self.limit.is_none() {
            if let Some(value) = config.get("limit") {
                let limit = value
                    .as_integer()
                    .ok_or_else(|| ValidationError::new("'limit' must be an integer"))?;
                self.limit = Some(limit);
            }
        }
        if self.log_level.is_none() {
            self.log_level = string_value(config, "log-level")?;
        }
        if self.log_format.is_none() {
            self.log_format = string_value(config, "log-format")?;
        }
        if self.log_file.is_none() {
            self.log_file = string_value(config, "log-file")?.map(PathBuf::from);
        }
        if !self.color && !self.no_color {
            if let Some(value) = config.get("color") {
                let color = value
                    .as_bool()
                    .ok_or_else(|| ValidationError::new("'color' must be true or false"))?;
                self.color = color;
                self.no_color = !color;
            }
        }
        Ok(())
    }

    /// Validate the merged arguments and apply defaults
    pub fn settings(&self) -> Result<Settings, ValidationError> {
        let discipline = match &self.discipline {
            Some(name) => validate_discipline(name)?,
            None => Discipline::Fifo,
        };
        let limit = validate_limit(self.limit.unwrap_or(0))?;
        let log_level = validate_log_level(self.log_level.as_deref().unwrap_or("info"))?;
        let log_format = validate_log_format(self.log_format.as_deref().unwrap_or("text"))?;

        // "none" and "-" disable file logging
        let log_file = self.log_file.clone().filter(|path| {
            let text = path.to_string_lossy();
            !(text.eq_ignore_ascii_case("none") || text == "-")
        });

        Ok(Settings {
            discipline,
            limit,
            script: self.script.clone(),
            log_level,
            log_format,
            log_file,
            color: self.color_preference(),
        })
    }
}

fn string_value(config: &toml::Table, key: &str) -> Result<Option<String>, ValidationError> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| ValidationError::new(&format!("'{}' must be a string", key))),
    }
}
