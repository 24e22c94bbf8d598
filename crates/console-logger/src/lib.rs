//! Console Logger
//!
//! `log` facade backend for WASM frontends. Records are written to the
//! browser console, one line each, formatted as `[LEVEL target] message`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Most verbose level that reaches the console
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self { level }
    }
}

/// Writes log records to `console.log` / `console.warn` / `console.error`
#[derive(Debug)]
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { level: config.level }
    }

    /// Render a record the way it appears in the console
    pub fn format_record(record: &Record) -> String {
        format!("[{} {}] {}", record.level(), record.target(), record.args())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&Self::format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger with the default configuration
pub fn init() -> Result<(), SetLoggerError> {
    init_with_config(LoggerConfig::default())
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init_with_config(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(config)));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(())
}
