//! Topology config loading.
//!
//! The config path comes from `--config`, then the `WINOC_CONFIG`
//! environment variable. Without either, the default 8x8 mesh with 4x4
//! clusters and one hub per cluster is used.

use std::path::{Path, PathBuf};

use winoc_topology::{Topology, TopologyConfig};

use crate::error::{CliError, Result};

pub const CONFIG_ENV: &str = "WINOC_CONFIG";

/// Resolve the config path, if any.
pub fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Parse a JSON topology config. Missing fields take their defaults.
pub fn parse_config(json: &str) -> Result<TopologyConfig> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_config(path: &Path) -> Result<TopologyConfig> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&json)
}

/// Load and validate the topology.
pub fn load_topology(path: Option<&Path>) -> Result<Topology> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading topology from {}", path.display());
            read_config(path)?
        }
        None => {
            tracing::info!("No config given, using default topology");
            TopologyConfig::default().with_hub_per_cluster()
        }
    };
    Ok(Topology::from_config(&config)?)
}
