//! Error handling for Distance Graph
//!
//! This module defines the crate error type and a Result alias used
//! throughout the application.

use thiserror::Error;

/// Main error type for Distance Graph operations
#[derive(Error, Debug)]
pub enum DistanceGraphError {
    /// Port discovery returned nothing
    #[error("No available serial ports found.")]
    NoPortsFound,

    /// The configured port is not among the discovered ones
    #[error("Specified port {port} is not available.")]
    PortUnavailable { port: String },

    /// Errors raised by the serial driver (open, configure)
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// IO errors, including reads from an open connection
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DistanceGraphError>,
    },
}

impl DistanceGraphError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DistanceGraphError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any context wrappers
    pub fn root(&self) -> &DistanceGraphError {
        match self {
            DistanceGraphError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for Distance Graph operations
pub type Result<T> = std::result::Result<T, DistanceGraphError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DistanceGraphError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
