use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::constants::LOG_BUFFER_CAPACITY;

/// Shared logger that can be used across the application.
///
/// Keeps the most recent lines in memory for debug display. When logging is
/// enabled in the config, [`Logger::from_config`] also installs a `fern`
/// dispatch for the `log` facade that writes to the log file and mirrors
/// every record into the same in-memory buffer.
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            enabled: false,
        }
    }

    /// Build a logger from the `[logging]` section of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut logger = Self::new();
        if !config.logging.enabled {
            return Ok(logger);
        }

        let level: log::LevelFilter = config
            .logging
            .level
            .parse()
            .with_context(|| format!("Invalid log level '{}'", config.logging.level))?;

        let path = config.log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let buffer = Arc::clone(&logger.logs);
        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ));
            })
            .level(level)
            .chain(file)
            // Records reaching chained outputs are already formatted
            .chain(fern::Output::call(move |record| {
                push_line(&buffer, record.args().to_string());
            }));

        // Only one global logger per process; a second one keeps the buffer only.
        if let Err(e) = dispatch.apply() {
            log::warn!("Global logger already installed: {}", e);
        }
        logger.enabled = true;
        log::info!("Logging to {} at level {}", path.display(), level);
        Ok(logger)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        push_line(&self.logs, format!("[{}] {}", timestamp, message));
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line(logs: &Mutex<VecDeque<String>>, line: String) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() == LOG_BUFFER_CAPACITY {
            logs.pop_front();
        }
        logs.push_back(line);
    }
}
