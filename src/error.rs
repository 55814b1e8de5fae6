//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrine crate.
///
/// Geometry and animation never fail; only I/O-facing operations (options
/// files, repository metadata fetches, worker threads) return this type.
#[derive(Debug)]
pub enum VitrineError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Repository metadata request failed (transport or HTTP status).
    Fetch(String),
    /// Repository metadata payload could not be decoded.
    Decode(String),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Fetch(msg) => write!(f, "metadata fetch error: {msg}"),
            Self::Decode(msg) => {
                write!(f, "metadata decode error: {msg}")
            }
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VitrineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
