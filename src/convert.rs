//! Pure conversion functions: CLI and TOML settings -> crate API config types.

use anyhow::{Context, Result};

use kin_knn::KnnConfig;

use crate::config::KinConfig;

/// Builds a validated [`KnnConfig`] from a neighbor count.
pub fn build_knn_config(k: usize) -> Result<KnnConfig> {
    let config = KnnConfig::default().with_k(k);
    config
        .validate()
        .with_context(|| format!("invalid neighbor count k = {k}"))?;
    Ok(config)
}

/// Resolves the neighbor count for `run`; the CLI flag wins over the file.
pub fn resolve_k(config: &KinConfig, cli_k: Option<usize>) -> usize {
    cli_k.unwrap_or(config.k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_k() {
        assert_eq!(build_knn_config(7).unwrap().k(), 7);
    }

    #[test]
    fn zero_k_rejected() {
        let err = build_knn_config(0).unwrap_err();
        assert!(format!("{err:#}").contains("k = 0"));
    }

    #[test]
    fn cli_overrides_config() {
        let config = KinConfig::default();
        assert_eq!(resolve_k(&config, None), 7);
        assert_eq!(resolve_k(&config, Some(2)), 2);
    }
}
