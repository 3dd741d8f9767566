//! Error taxonomy for the start page session model.
//!
//! Nothing in the session is fatal: every variant here describes a mutation
//! that did not happen. Callers log the error and leave state untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading backgrounds or loading a session seed.
#[derive(Debug, Error)]
pub enum StartPageError {
    /// The selected background file could not be read.
    #[error("failed to read background file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected file is not an image we can embed.
    #[error("{path} is not a supported image file")]
    NotAnImage { path: PathBuf },

    /// A string that should have been a `data:` URI was malformed.
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    /// The base64 payload of a data URI failed to decode.
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The session seed file could not be read or parsed.
    #[error("failed to load session config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, StartPageError>;
