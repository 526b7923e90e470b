//! Error types for the winoc CLI.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line
    #[error("usage error: {0}")]
    Usage(String),

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for a topology
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config or query rejected by the topology
    #[error(transparent)]
    Topology(#[from] winoc_topology::TopologyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
