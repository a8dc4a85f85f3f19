//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events. Applications that do not install
//! their own subscriber can use these helpers.
//!
//! ```rust,ignore
//! use advantage::telemetry::{init_subscriber, SubscriberConfig, OutputFormat};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use crate::error::AdvantageError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    Json,
    JsonCompact,
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write to stdout. Ignored when `log_file` is set.
    pub enable_console: bool,
    /// Write to this file through a non-blocking writer
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            enable_console: true,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Debug-level text output, handy while developing against a sandbox API
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    enable_console: Option<bool>,
    log_file: Option<std::path::PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string (trace, debug, info, warn, error)
    pub fn log_level_str(mut self, level: &str) -> Result<Self, AdvantageError> {
        let level = level.parse::<tracing::Level>().map_err(|_| {
            AdvantageError::ConfigurationError(format!(
                "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
            ))
        })?;
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn enable_console(mut self, enable: bool) -> Self {
        self.enable_console = Some(enable);
        self
    }

    pub fn log_file(mut self, path: std::path::PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
            enable_console: self.enable_console.unwrap_or(true),
            log_file: self.log_file,
        }
    }
}

fn parse_output_format(format: &str) -> Result<OutputFormat, AdvantageError> {
    match format.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "json-compact" => Ok(OutputFormat::JsonCompact),
        _ => Err(AdvantageError::ConfigurationError(format!(
            "Invalid log format: {format}. Valid options: text, json, json-compact"
        ))),
    }
}

/// Install a global `fmt` subscriber filtered to this crate.
///
/// Returns the file writer guard when `log_file` is set; keep it alive for
/// the life of the program. A subscriber that is already installed is left
/// in place and is not an error.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>, AdvantageError> {
    let level = config.log_level.to_string().to_lowercase();

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path.file_name().ok_or_else(|| {
                AdvantageError::ConfigurationError(format!(
                    "Invalid log file path: {}",
                    path.display()
                ))
            })?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    if writer.is_none() && !config.enable_console {
        return Ok(None);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("advantage={level}")))
        .with_target(true);
    let init_result = match (config.output_format, writer) {
        (OutputFormat::Text, Some(w)) => builder.with_ansi(false).with_writer(w).try_init(),
        (OutputFormat::Text, None) => builder.try_init(),
        (OutputFormat::Json, Some(w)) => builder.json().with_writer(w).try_init(),
        (OutputFormat::Json, None) => builder.json().try_init(),
        (OutputFormat::JsonCompact, Some(w)) => {
            builder.json().flatten_event(true).with_writer(w).try_init()
        }
        (OutputFormat::JsonCompact, None) => builder.json().flatten_event(true).try_init(),
    };

    match init_result {
        Ok(()) => Ok(guard),
        Err(_) if tracing::dispatcher::has_been_set() => Ok(guard),
        Err(e) => Err(AdvantageError::ConfigurationError(format!(
            "Failed to initialize tracing: {e}"
        ))),
    }
}

/// Initialize from environment variables:
/// - `ADVANTAGE_LOG_LEVEL`: trace, debug, info, warn, error
/// - `ADVANTAGE_LOG_FORMAT`: text, json, json-compact
/// - `ADVANTAGE_LOG_FILE`: log file path
pub fn init_from_env() -> Result<Option<WorkerGuard>, AdvantageError> {
    let mut builder = SubscriberConfig::builder();

    if let Ok(level) = std::env::var("ADVANTAGE_LOG_LEVEL") {
        builder = builder.log_level_str(&level)?;
    }
    if let Ok(format) = std::env::var("ADVANTAGE_LOG_FORMAT") {
        builder = builder.output_format(parse_output_format(&format)?);
    }
    if let Ok(file_path) = std::env::var("ADVANTAGE_LOG_FILE") {
        builder = builder.log_file(std::path::PathBuf::from(file_path));
    }

    init_subscriber(builder.build())
}
