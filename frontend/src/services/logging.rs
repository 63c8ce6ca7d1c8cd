use log::{Level, LevelFilter, Log, Metadata, Record};

/// Routes `log` records from the frontend and the domain crate to the
/// browser console.
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    /// Install the logger once at startup. A second call keeps the first logger.
    pub fn init(max_level: LevelFilter) {
        static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();
        let logger = LOGGER.get_or_init(|| ConsoleLogger { max_level });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(max_level);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(message),
            Level::Warn => gloo::console::warn!(message),
            Level::Info => gloo::console::info!(message),
            Level::Debug | Level::Trace => gloo::console::debug!(message),
        }
    }

    fn flush(&self) {}
}
