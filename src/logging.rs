use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{HoverError, HoverResult, IoContext};

struct FileLogger {
    file: Mutex<std::fs::File>,
    level: LevelFilter,
}

impl FileLogger {
    fn new(file_path: &Path, level: LevelFilter) -> HoverResult<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_io_context(&format!("Failed to create log directory {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)
            .with_io_context(&format!("Failed to open log file {}", file_path.display()))?;

        Ok(FileLogger {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        // A failing log write has nowhere to be reported
        let _ = writeln!(file, "{}", format_record(record)).and_then(|()| file.flush());
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// One log line: `[2024-01-01 12:00:00.000] [INFO] message`
fn format_record(record: &Record) -> String {
    format!(
        "[{}] [{}] {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

/// Get the platform-specific log file path
pub fn default_log_file_path() -> HoverResult<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| HoverError::Logger {
        message: "Could not determine local data directory".to_string(),
    })?;

    Ok(data_dir.join("StyleHover").join("style_hover.log"))
}

/// Initialize the logger to write to a single file, overwriting previous logs
///
/// Without an explicit path the log goes to the local app data directory.
pub fn init_logger(log_file_path: Option<&Path>) -> HoverResult<PathBuf> {
    let log_file_path = match log_file_path {
        Some(path) => path.to_path_buf(),
        None => default_log_file_path()?,
    };
    let logger = FileLogger::new(&log_file_path, LevelFilter::Info)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(LevelFilter::Info))
        .map_err(|e| HoverError::Logger {
            message: e.to_string(),
        })?;

    Ok(log_file_path)
}
