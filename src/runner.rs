//! Apply every fixer to the discovered artifacts of a repository.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::discovery::ChainArtifacts;
use crate::error::{FixError, FixResult};
use crate::fixers::{FileUpdateNotifier, Service};
use crate::models::{ArtifactKind, AssetFile, FixOutcome};

/// A fixer that returned an error.
#[derive(Debug)]
pub struct FixFailure {
  /// Fixer name.
  pub fixer: &'static str,
  /// Kind of artifact the fixer ran on.
  pub kind: ArtifactKind,
  /// Artifact the fixer ran on.
  pub path: PathBuf,
  /// Error returned.
  pub error: FixError,
}

/// Tally of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
  /// Fixer calls that wrote something.
  pub rewritten: usize,
  /// Fixer calls that found nothing to do.
  pub unchanged: usize,
  /// Fixer calls that failed.
  pub failures: Vec<FixFailure>,
}

impl RunSummary {
  fn record(&mut self, fixer: &'static str, file: &AssetFile, result: FixResult<FixOutcome>) {
    let kind = file.kind();
    let path = file.path();
    match result {
      Ok(FixOutcome::Rewritten) => {
        debug!(fixer, ?kind, path = %path.display(), "Fixed");
        self.rewritten += 1;
      }
      Ok(FixOutcome::Unchanged) => self.unchanged += 1,
      Err(error) => {
        warn!(fixer, ?kind, path = %path.display(), %error, "Fixer failed");
        self.failures.push(FixFailure {
          fixer,
          kind,
          path: path.to_path_buf(),
          error,
        });
      }
    }
  }

  fn merge(mut self, other: Self) -> Self {
    self.rewritten += other.rewritten;
    self.unchanged += other.unchanged;
    self.failures.extend(other.failures);
    self
  }
}

/// Run every fixer over `chains`.
///
/// Assets of a chain are fixed in parallel. The fixers of a single asset run in order on one
/// thread: checksum rename first, so the logo and info fixers see the corrected directory.
pub fn run_fixers<N: FileUpdateNotifier>(
  service: &Service<N>,
  chains: Vec<ChainArtifacts>,
) -> RunSummary {
  chains
    .into_iter()
    .map(|chain| {
      let summary = fix_chain_info(service, &chain);
      let assets = chain
        .assets
        .into_par_iter()
        .map(|asset| fix_asset(service, asset))
        .reduce(RunSummary::default, RunSummary::merge);
      summary.merge(assets)
    })
    .fold(RunSummary::default(), RunSummary::merge)
}

fn fix_chain_info<N: FileUpdateNotifier>(
  service: &Service<N>,
  artifacts: &ChainArtifacts,
) -> RunSummary {
  let mut summary = RunSummary::default();
  let layout = service.layout();

  let logo = layout.logo_path(&artifacts.info_dir);
  if logo.is_file() {
    let file = AssetFile::for_chain(&logo, ArtifactKind::ChainLogo, artifacts.chain);
    summary.record("logo", &file, service.fix_logo(&file));
  }

  let info = layout.info_path(&artifacts.info_dir);
  if info.is_file() {
    let file = AssetFile::for_chain(&info, ArtifactKind::ChainInfo, artifacts.chain);
    summary.record("chain-info", &file, service.fix_chain_info_json(&file));
    summary.record("json", &file, service.fix_json(&file));
  }

  summary
}

fn fix_asset<N: FileUpdateNotifier>(service: &Service<N>, mut asset: AssetFile) -> RunSummary {
  let mut summary = RunSummary::default();
  let layout = service.layout();

  let renamed = service.fix_eth_address_checksum(&mut asset);
  summary.record("checksum", &asset, renamed);

  let dir = asset.path();
  let chain = *asset.chain();

  let logo = layout.logo_path(dir);
  if logo.is_file() {
    let file = AssetFile::new(&logo, ArtifactKind::AssetLogo, chain, asset.asset());
    summary.record("logo", &file, service.fix_logo(&file));
  }

  let info = layout.info_path(dir);
  if info.is_file() {
    let file = AssetFile::new(&info, ArtifactKind::AssetInfo, chain, asset.asset());
    summary.record("asset-info", &file, service.fix_asset_info(&file));
    summary.record("json", &file, service.fix_json(&file));
  }

  summary
}
