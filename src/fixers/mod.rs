//! The fixer surface: one method per normalisation, each taking a single asset file.
//!
//! Fixers are idempotent and keep no state between calls. Fixers for different assets may run
//! concurrently; fixers for the same asset must be serialised by the caller because the
//! checksum fixer renames the asset directory.

mod asset_info;
mod chain_info;
mod checksum;

use tracing::debug;

pub use asset_info::reconcile_asset_info;

use crate::asset_paths::RepoLayout;
use crate::config::FixerConfig;
use crate::error::FixResult;
use crate::json_file::format_json_file;
use crate::logo::normalize_logo;
use crate::models::{AssetFile, FixOutcome};

/// Receives identifier changes made by the fixers.
pub trait FileUpdateNotifier: Send + Sync {
  /// `file` now carries its new identifier and path; `previous` is the identifier it replaced.
  fn identifier_changed(&self, file: &AssetFile, previous: &str);
}

/// Notifier that only records renames in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl FileUpdateNotifier for TracingNotifier {
  fn identifier_changed(&self, file: &AssetFile, previous: &str) {
    debug!(
      chain = file.chain().handle,
      from = previous,
      to = file.asset(),
      path = %file.path().display(),
      "Asset identifier changed"
    );
  }
}

/// Entry point exposing every fixer.
#[derive(Debug)]
pub struct Service<N = TracingNotifier> {
  layout: RepoLayout,
  config: FixerConfig,
  notifier: N,
}

impl<N: FileUpdateNotifier> Service<N> {
  /// Create a service for the repository described by `layout`.
  pub fn new(layout: RepoLayout, config: FixerConfig, notifier: N) -> Self {
    Self {
      layout,
      config,
      notifier,
    }
  }

  /// Repository layout used to build canonical paths.
  pub fn layout(&self) -> &RepoLayout {
    &self.layout
  }

  /// Notifier informed of renames.
  pub fn notifier(&self) -> &N {
    &self.notifier
  }

  /// Rewrite a JSON artifact in canonical pretty-printed form.
  pub fn fix_json(&self, file: &AssetFile) -> FixResult<FixOutcome> {
    format_json_file(file.path())
  }

  /// Resize and recompress a logo to the configured limits.
  pub fn fix_logo(&self, file: &AssetFile) -> FixResult<FixOutcome> {
    normalize_logo(file.path(), &self.config.logo)
  }
}

#[cfg(test)]
pub(crate) mod test_support {
  use std::sync::Mutex;

  use super::*;

  /// Notifier that remembers every rename it is told about.
  #[derive(Debug, Default)]
  pub(crate) struct RecordingNotifier {
    pub(crate) changes: Mutex<Vec<(String, String)>>,
  }

  impl FileUpdateNotifier for RecordingNotifier {
    fn identifier_changed(&self, file: &AssetFile, previous: &str) {
      self
        .changes
        .lock()
        .unwrap()
        .push((previous.to_string(), file.asset().to_string()));
    }
  }

  pub(crate) fn service(root: &std::path::Path) -> Service<RecordingNotifier> {
    let config = FixerConfig::default();
    Service::new(
      RepoLayout::new(root, &config),
      config,
      RecordingNotifier::default(),
    )
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::test_support::service;
  use crate::chains::{ETHEREUM, chain_by_id};
  use crate::models::ArtifactKind;
  use tempfile::tempdir;

  #[test]
  fn fix_json_formats_once() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("info.json");
    fs::write(&path, r#"{"name":"Token","decimals":18}"#).unwrap();

    let service = service(temp.path());
    let chain = *chain_by_id(ETHEREUM).unwrap();
    let file = crate::AssetFile::new(&path, ArtifactKind::AssetInfo, chain, "0xabc");

    assert!(service.fix_json(&file).unwrap().is_rewritten());
    assert!(!service.fix_json(&file).unwrap().is_rewritten());
    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "{\n    \"name\": \"Token\",\n    \"decimals\": 18\n}\n"
    );
  }
}
