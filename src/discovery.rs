//! Walk a repository and build the handles the fixers operate on.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::asset_paths::RepoLayout;
use crate::chains::{ChainDescriptor, chain_by_handle};
use crate::error::{FixError, FixResult};
use crate::models::{ArtifactKind, AssetFile};
use crate::selection::ChainInclusion;

/// Artifacts discovered for one chain.
#[derive(Debug, Clone)]
pub struct ChainArtifacts {
  /// Chain the artifacts belong to.
  pub chain: ChainDescriptor,
  /// Directory with the chain's own logo and info document.
  pub info_dir: PathBuf,
  /// One handle per asset directory.
  pub assets: Vec<AssetFile>,
}

/// Find every selected chain and its asset directories.
///
/// Hidden entries are skipped. Directories that do not name a known chain are reported and
/// skipped. A missing blockchains directory is an error.
pub fn discover_chains<S: ChainInclusion>(
  layout: &RepoLayout,
  selection: &S,
) -> FixResult<Vec<ChainArtifacts>> {
  let blockchains_dir = layout.blockchains_dir();
  let entries = fs::read_dir(&blockchains_dir).map_err(|source| FixError::Read {
    path: blockchains_dir.clone(),
    source,
  })?;

  let mut chains = Vec::new();
  for entry in entries.flatten() {
    if !entry.file_type().is_ok_and(|ft| ft.is_dir()) {
      continue;
    }

    let handle = entry.file_name().to_string_lossy().to_string();
    if handle.starts_with('.') || !selection.is_included(&handle) {
      continue;
    }

    let Some(chain) = chain_by_handle(&handle) else {
      warn!(chain = %handle, "Skipping unknown chain");
      continue;
    };

    chains.push(ChainArtifacts {
      chain: *chain,
      info_dir: layout.chain_info_dir(chain.handle),
      assets: discover_assets(layout, chain),
    });
  }

  chains.sort_by(|a, b| a.chain.handle.cmp(b.chain.handle));
  Ok(chains)
}

fn discover_assets(layout: &RepoLayout, chain: &ChainDescriptor) -> Vec<AssetFile> {
  let mut assets = Vec::new();

  if let Ok(entries) = fs::read_dir(layout.assets_dir(chain.handle)) {
    for entry in entries.flatten() {
      if !entry.file_type().is_ok_and(|ft| ft.is_dir()) {
        continue;
      }

      let identifier = entry.file_name().to_string_lossy().to_string();
      if identifier.starts_with('.') {
        continue;
      }

      assets.push(AssetFile::new(
        entry.path(),
        ArtifactKind::AssetDir,
        *chain,
        identifier,
      ));
    }
  }

  assets.sort_by(|a, b| a.asset().cmp(b.asset()));
  assets
}
