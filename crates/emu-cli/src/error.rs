//! CLI error types.

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required flag was missing or had an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The compute API could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The compute API answered with something that is not JSON.
    #[error("invalid response from {url}: {reason}")]
    Decode {
        /// Request URL.
        url: String,
        /// Why the body could not be decoded.
        reason: String,
    },

    /// The JSON payload lacks a field the renderer needs.
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),

    /// A terminal emulator could not be started.
    #[error("failed to launch {program} for {vnf}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// VNF the terminal was opened for.
        vnf: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        Self::Connection(err.to_string())
    }
}
