use crate::config::Config;
use crate::constants::{LOG_FILE_NAME, MAX_IN_MEMORY_LOGS};
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type SharedWriter = Arc<Mutex<BufWriter<File>>>;

/// Shared logger that can be used across the application
///
/// Lines are always kept in memory for the logs panel. When file logging is
/// enabled they are also appended to the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_writer: Option<SharedWriter>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: None,
        }
    }

    /// Build a logger from the `logging.enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Build a logger that also appends to the given file
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Route the `log` facade into this logger
    ///
    /// Can only succeed once per process.
    pub fn install(&self, level: LevelFilter) -> Result<()> {
        let sink = self.clone();
        fern::Dispatch::new()
            .level(level)
            .level_for("sqlx", LevelFilter::Warn)
            .level_for("sea_orm", LevelFilter::Warn)
            .chain(fern::Output::call(move |record| {
                sink.log(format!("{:<5} {}: {}", record.level(), record.target(), record.args()));
            }))
            .apply()
            .context("Failed to install log dispatcher")?;
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_IN_MEMORY_LOGS {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all in-memory logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Flush pending file output
    pub fn flush(&self) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }

    /// Whether lines are also written to the log file
    pub fn is_enabled(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Default location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
