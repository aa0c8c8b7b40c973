use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Neighbor count used when neither config nor CLI sets one.
pub const DEFAULT_K: usize = 7;

/// Top-level Kin configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KinConfig {
    /// Number of neighbors.
    #[serde(default = "default_k")]
    pub k: usize,

    /// Run leave-one-out validation on the rayon pool.
    #[serde(default)]
    pub parallel: bool,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,
}

impl Default for KinConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            parallel: false,
            io: IoConfig::default(),
        }
    }
}

impl KinConfig {
    /// Loads a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// File locations used by the `run` pipeline.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// Directory `run` writes normalized files into.
    #[serde(default = "default_normalized_dir")]
    pub normalized_dir: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            normalized_dir: default_normalized_dir(),
        }
    }
}

fn default_k() -> usize {
    DEFAULT_K
}
fn default_normalized_dir() -> PathBuf {
    PathBuf::from("output")
}
