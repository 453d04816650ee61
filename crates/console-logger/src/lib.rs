//! Console Logger
//!
//! `log` backend that forwards records to the browser devtools console.
//! Records are prefixed with their target, e.g. `[notes_ui::api] GET /api/notes`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing to `console.*`
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// Render a record as a single console line
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    match level {
        Level::Error | Level::Warn | Level::Info => format!("[{}] {}", target, message),
        Level::Debug | Level::Trace => format!("[{}] ({}) {}", target, level, message),
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
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes_target() {
        assert_eq!(format_line(Level::Info, "notes_ui::app", "mounted"), "[notes_ui::app] mounted");
        assert_eq!(format_line(Level::Error, "api", "boom"), "[api] boom");
    }

    #[test]
    fn test_format_line_marks_verbose_levels() {
        assert_eq!(format_line(Level::Debug, "api", "GET /api/notes"), "[api] (DEBUG) GET /api/notes");
        assert_eq!(format_line(Level::Trace, "api", "x"), "[api] (TRACE) x");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let info = Metadata::builder().level(Level::Info).target("t").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
