//! # Logger
//!
//! Logging setup for the scaffolder, built on `tracing` and `tracing-subscriber`.
//!
//! * The console layer is tuned for a CLI: no timestamps, no targets, and events at
//!   `WARN`/`ERROR` go to stderr while everything else goes to stdout.
//! * An optional rolling log file is written through a non-blocking `tracing-appender`
//!   worker; keep the returned [`Logger`] alive until exit so buffered lines are flushed.
//! * `RUST_LOG` overrides the configured level.
//!
//! ## Example
//!
//! ```rust
//! # use tss_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("ts-scaffolder")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const MAX_LOG_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct ConsoleConfig {
    enabled: bool,
    ansi: bool,
}

#[derive(Debug)]
pub struct LoggerConfig {
    console: ConsoleConfig,
    file_dir: Option<PathBuf>,
    level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig { enabled: true, ansi: true },
            file_dir: None,
            level: LevelFilter::INFO,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the logger name, used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl LoggerBuilder<WithName> {
    /// Minimum level emitted when `RUST_LOG` says nothing else.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Toggles ANSI colors on the console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.console.ansi = enabled;
        self
    }

    /// Also writes plain-text logs into daily rolling files under `dir`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.file_dir = Some(dir.into());
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name or when no layer is enabled.
    /// * [`LoggerError::Internal`] when the log directory cannot be created.
    /// * [`LoggerError::Appender`] when the rolling appender cannot be built.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name) } = self;
        validate_config(&config, &name)?;

        let env_filter =
            EnvFilter::builder().with_default_directive(config.level.into()).from_env_lossy();
        let mut layers = Vec::new();

        if config.console.enabled {
            let writer = std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout);
            let console = layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(writer)
                .with_ansi(config.console.ansi);
            layers.push(console.boxed());
        }

        let guard = match config.file_dir {
            Some(dir) => {
                fs::create_dir_all(&dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create path: {}", dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(MAX_LOG_FILES)
                    .build(&dir)
                    .context("Building rolling file appender")?;

                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                layers.push(layer().with_writer(non_blocking).with_ansi(false).boxed());
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { _guard: guard })
    }
}

/// Handle to the initialized logging system.
///
/// Holds the non-blocking file worker guard, if any. Drop it only at shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if !config.console.enabled && config.file_dir.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging layers enabled. Enable console or file output.".into(),
            context: None,
        });
    }
    Ok(())
}
