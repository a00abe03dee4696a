// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for synchronization operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while synchronizing NetBox into dnsmasq/shoelaces
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-level failure or non-success HTTP status
    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the NetBox list envelope
    #[error("Decode error for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Host template could not be parsed or rendered
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Output file could not be opened or written
    #[error("Output error for '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for synchronization operations
pub type SyncResult<T> = Result<T, SyncError>;
