//! Repository configuration for the fixer pipeline.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::chains::{CRONOS, CRYPTO_ORG};

const DEFAULT_CONFIG_FILE: &str = "asset-fixers.config.json";

/// Pixel dimensions of a logo constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Dimensions {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
}

impl Dimensions {
  /// Build a dimension pair.
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }
}

/// Dimension and byte-size limits applied to logos.
///
/// Only `medium` and `max_file_size_bytes` drive [`crate::Service::fix_logo`]; the large and small
/// thresholds belong to the repository's validation rules and are carried so a single config file
/// describes every logo limit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogoLimits {
  /// Largest logo accepted by validation.
  pub max: Dimensions,
  /// Resize trigger and target for oversized logos.
  pub medium: Dimensions,
  /// Smallest logo accepted by validation.
  pub min: Dimensions,
  /// Encoded size budget for a logo file.
  pub max_file_size_bytes: u64,
}

impl Default for LogoLimits {
  fn default() -> Self {
    Self {
      max: Dimensions::new(512, 512),
      medium: Dimensions::new(256, 256),
      min: Dimensions::new(128, 128),
      max_file_size_bytes: 100 * 1024,
    }
  }
}

/// Settings for the asset info reconciler.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
  /// Chains whose asset type conventions are left alone by the type fix.
  ///
  /// Crypto.org and Cronos share token conventions that the general chain/type rule
  /// misclassifies, so their `type` values are never rewritten.
  pub exempt_chains: BTreeSet<u32>,
}

impl Default for ReconcilerConfig {
  fn default() -> Self {
    Self {
      exempt_chains: [CRYPTO_ORG, CRONOS].into_iter().collect(),
    }
  }
}

impl ReconcilerConfig {
  /// Whether the type fix is skipped for `chain_id`.
  pub fn is_exempt(&self, chain_id: u32) -> bool {
    self.exempt_chains.contains(&chain_id)
  }
}

/// Discoverable configuration describing repository layout and fixer limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
  /// Directory under the repository root holding one directory per chain.
  pub blockchains_dir: String,
  /// Directory inside a chain holding one directory per asset.
  pub assets_dir: String,
  /// Directory inside a chain holding the chain's own artifacts.
  pub chain_info_dir: String,
  /// Logo file name inside an asset or chain info directory.
  pub logo_file: String,
  /// Metadata file name inside an asset or chain info directory.
  pub info_file: String,
  /// Logo limits.
  pub logo: LogoLimits,
  /// Asset info reconciliation settings.
  pub reconciler: ReconcilerConfig,
}

impl Default for FixerConfig {
  fn default() -> Self {
    Self {
      blockchains_dir: "blockchains".into(),
      assets_dir: "assets".into(),
      chain_info_dir: "info".into(),
      logo_file: "logo.png".into(),
      info_file: "info.json".into(),
      logo: LogoLimits::default(),
      reconciler: ReconcilerConfig::default(),
    }
  }
}

impl FixerConfig {
  /// Attempt to load configuration from the repository root.
  ///
  /// A missing or unparsable file falls back to the defaults, which describe the standard
  /// repository layout.
  pub fn discover(repo_root: &Path) -> Self {
    let candidate = repo_root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn defaults_match_repository_layout() {
    let config = FixerConfig::default();
    assert_eq!(config.logo.medium, Dimensions::new(256, 256));
    assert_eq!(config.logo.max_file_size_bytes, 102_400);
    assert!(config.reconciler.is_exempt(CRONOS));
    assert!(config.reconciler.is_exempt(CRYPTO_ORG));
    assert!(!config.reconciler.is_exempt(60));
  }

  #[test]
  fn discover_falls_back_when_file_is_missing() {
    let temp = tempdir().unwrap();
    let config = FixerConfig::discover(temp.path());
    assert_eq!(config.info_file, "info.json");
    assert_eq!(config.blockchains_dir, "blockchains");
  }

  #[test]
  fn discover_reads_partial_overrides() {
    let temp = tempdir().unwrap();
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"logo": {"max_file_size_bytes": 2048}, "reconciler": {"exempt_chains": [60]}}"#,
    )
    .unwrap();

    let config = FixerConfig::discover(temp.path());
    assert_eq!(config.logo.max_file_size_bytes, 2048);
    assert_eq!(config.logo.medium, Dimensions::new(256, 256));
    assert!(config.reconciler.is_exempt(60));
    assert!(!config.reconciler.is_exempt(CRONOS));
  }

  #[test]
  fn discover_ignores_malformed_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

    let config = FixerConfig::discover(temp.path());
    assert_eq!(config.logo_file, "logo.png");
  }
}
