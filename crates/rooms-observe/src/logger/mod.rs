mod config;
mod error;
mod log;
mod object;

pub use config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoggerConfig};
pub use error::LoggerError;
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Can only succeed once per process; later calls return [`LoggerError::AlreadyInitialized`].
///
/// `LoggerTimeZone::Local` resolves the offset at this point, so call it from `main()`
/// before the async runtime starts its worker threads.
///
/// # Examples
/// ```rust
/// use rooms_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("failed to initialize logger");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg),
        LoggerFormat::Json => log::logger_json(cfg),
        LoggerFormat::Journald => log::logger_journald(cfg),
    }
}
