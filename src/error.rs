//! Startup-class errors
//!
//! Nothing in the per-tick simulation is fallible; these only surface while
//! loading configuration or assets, and are fatal to the process.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate settings/tuning
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
}

/// Failure to resolve an asset into a drawable handle
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load asset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("asset {} is empty", .0.display())]
    Empty(PathBuf),
}
