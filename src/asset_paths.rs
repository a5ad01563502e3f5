//! Canonical on-disk locations of repository artifacts.

use std::path::{Path, PathBuf};

use crate::config::FixerConfig;

/// Path builder for a checked-out asset repository.
#[derive(Debug, Clone)]
pub struct RepoLayout {
  root: PathBuf,
  blockchains_dir: String,
  assets_dir: String,
  chain_info_dir: String,
  logo_file: String,
  info_file: String,
}

impl RepoLayout {
  /// Describe the repository rooted at `root` using the directory names from `config`.
  pub fn new(root: impl Into<PathBuf>, config: &FixerConfig) -> Self {
    Self {
      root: root.into(),
      blockchains_dir: config.blockchains_dir.clone(),
      assets_dir: config.assets_dir.clone(),
      chain_info_dir: config.chain_info_dir.clone(),
      logo_file: config.logo_file.clone(),
      info_file: config.info_file.clone(),
    }
  }

  /// Directory holding every chain.
  pub fn blockchains_dir(&self) -> PathBuf {
    self.root.join(&self.blockchains_dir)
  }

  /// Directory of one chain.
  pub fn chain_dir(&self, handle: &str) -> PathBuf {
    self.blockchains_dir().join(handle)
  }

  /// Directory holding the chain's own logo and info document.
  pub fn chain_info_dir(&self, handle: &str) -> PathBuf {
    self.chain_dir(handle).join(&self.chain_info_dir)
  }

  /// Directory holding one directory per asset of the chain.
  pub fn assets_dir(&self, handle: &str) -> PathBuf {
    self.chain_dir(handle).join(&self.assets_dir)
  }

  /// Canonical directory of an asset.
  pub fn asset_path(&self, handle: &str, identifier: &str) -> PathBuf {
    self.assets_dir(handle).join(identifier)
  }

  /// Logo file inside an asset or chain info directory.
  pub fn logo_path(&self, dir: &Path) -> PathBuf {
    dir.join(&self.logo_file)
  }

  /// Info document inside an asset or chain info directory.
  pub fn info_path(&self, dir: &Path) -> PathBuf {
    dir.join(&self.info_file)
  }
}
