//! Error handling for the lyrseek-cli application
//!
//! This module provides a hierarchical error system with proper error handling
//! and user-friendly error messages. Per-source fetch failures are not errors
//! here; sources report those as part of the search result. This hierarchy
//! covers the failures that abort a command.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyrSeekError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Transport failures surfaced by the HTTP client seam. Fetchers fold these
/// into their own "not found" reasons; they never escape a fetch call.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Response invalid: {reason}")]
    InvalidResponse { reason: String },

    #[error("Timeout exceeded")]
    Timeout,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LyrSeekError>;

impl From<std::io::Error> for LyrSeekError {
    fn from(err: std::io::Error) -> Self {
        LyrSeekError::Config(ConfigError::Io(err))
    }
}

impl From<toml::de::Error> for LyrSeekError {
    fn from(err: toml::de::Error) -> Self {
        LyrSeekError::Config(ConfigError::InvalidFormat(err))
    }
}
