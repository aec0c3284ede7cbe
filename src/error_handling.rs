use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
///
/// Lookups themselves never error: absence of an answer is an empty
/// result, not a failure. The only surfaced errors are the ones that make
/// the process unusable before the first query is issued.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error reading the system resolver configuration file.
    #[error("Failed to read resolver configuration {path}: {source}")]
    ResolvConfError {
        /// Path of the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver backends that can fail to construct
    DnsResolverError(String),
}
