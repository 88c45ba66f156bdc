//! Tracing integration for structured logging
//!
//! Initializes the `tracing` subscriber for the application process.
//! Library code emits events unconditionally; hosts decide once, at
//! startup, whether and how they are rendered.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("tracing has already been initialized")]
    AlreadyInitialized,
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Maximum log level
    pub level: Level,
    /// Custom filter string (overrides level if set, `RUST_LOG` syntax)
    pub filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            filter: None,
        }
    }
}

impl TracingConfig {
    /// Creates a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Initializes the global tracing subscriber.
///
/// Output goes to stderr. The `RUST_LOG` environment variable takes
/// precedence over the configured level; an explicit `filter` string
/// takes precedence over both.
///
/// # Errors
///
/// Returns [`TracingError::AlreadyInitialized`] on a second call, or
/// [`TracingError::InitializationFailed`] when a subscriber was already
/// set elsewhere in the process.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let env_filter = match &config.filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string())),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| TracingError::InitializationFailed(err.to_string()))
}

/// Initializes tracing with the default configuration.
///
/// # Errors
///
/// Same conditions as [`init_tracing`].
pub fn init_default_tracing() -> TracingResult<()> {
    init_tracing(&TracingConfig::default())
}

/// Returns true once tracing has been initialized.
#[must_use]
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::SeqCst)
}
