//! Asset handles and the metadata documents the fixers normalise.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chains::ChainDescriptor;

/// `type` value every chain info document must carry.
pub const COIN_TYPE: &str = "coin";

/// Which artifact an [`AssetFile`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
  /// An asset directory, named after the asset identifier.
  AssetDir,
  /// An asset's logo.
  AssetLogo,
  /// An asset's info document.
  AssetInfo,
  /// A chain's own logo.
  ChainLogo,
  /// A chain's own info document.
  ChainInfo,
}

/// Handle to one artifact of an asset, built by the driver before any fixer runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
  path: PathBuf,
  kind: ArtifactKind,
  chain: ChainDescriptor,
  asset: String,
}

impl AssetFile {
  /// Handle to an asset artifact.
  pub fn new(
    path: impl Into<PathBuf>,
    kind: ArtifactKind,
    chain: ChainDescriptor,
    asset: impl Into<String>,
  ) -> Self {
    Self {
      path: path.into(),
      kind,
      chain,
      asset: asset.into(),
    }
  }

  /// Handle to a chain-level artifact, which has no asset identifier.
  pub fn for_chain(path: impl Into<PathBuf>, kind: ArtifactKind, chain: ChainDescriptor) -> Self {
    Self::new(path, kind, chain, String::new())
  }

  /// Path of the artifact being fixed.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Kind of artifact.
  pub fn kind(&self) -> ArtifactKind {
    self.kind
  }

  /// Owning chain.
  pub fn chain(&self) -> &ChainDescriptor {
    &self.chain
  }

  /// Asset identifier, usually a contract address or token id.
  pub fn asset(&self) -> &str {
    &self.asset
  }

  /// Point the handle at a renamed asset, returning the previous identifier.
  ///
  /// Only the checksum fixer renames assets; every later fixer on this handle sees the new
  /// identifier and path.
  pub fn replace_identifier(&mut self, identifier: String, path: PathBuf) -> String {
    self.path = path;
    std::mem::replace(&mut self.asset, identifier)
  }
}

/// Result of a fixer that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FixOutcome {
  /// The artifact was already canonical and nothing was written.
  Unchanged,
  /// The artifact was rewritten or renamed.
  Rewritten,
}

impl FixOutcome {
  /// Whether anything was written.
  pub fn is_rewritten(self) -> bool {
    matches!(self, Self::Rewritten)
  }
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
  fields.get(key).and_then(Value::as_str)
}

/// A chain's `info.json`.
///
/// Only `type` is normalised. Every other key is carried through untouched and in its original
/// order. A `type` that is null, missing or not a string counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ChainInfoDocument {
  fields: Map<String, Value>,
}

impl ChainInfoDocument {
  /// Current `type`.
  pub fn chain_type(&self) -> Option<&str> {
    string_field(&self.fields, "type")
  }

  /// Replace `type`.
  pub fn set_chain_type(&mut self, value: impl Into<String>) {
    self.fields.insert("type".into(), Value::String(value.into()));
  }
}

/// An asset's `info.json`.
///
/// `type`, `id` and `explorer` are normalised; the remaining keys are preserved. Unset and null
/// values are treated alike.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AssetInfoDocument {
  fields: Map<String, Value>,
}

impl AssetInfoDocument {
  /// Current token type.
  pub fn asset_type(&self) -> Option<&str> {
    string_field(&self.fields, "type")
  }

  /// Replace the token type.
  pub fn set_asset_type(&mut self, value: impl Into<String>) {
    self.fields.insert("type".into(), Value::String(value.into()));
  }

  /// Current asset identifier.
  pub fn id(&self) -> Option<&str> {
    string_field(&self.fields, "id")
  }

  /// Replace the asset identifier.
  pub fn set_id(&mut self, value: impl Into<String>) {
    self.fields.insert("id".into(), Value::String(value.into()));
  }

  /// Current explorer link.
  pub fn explorer(&self) -> Option<&str> {
    string_field(&self.fields, "explorer")
  }

  /// Replace the explorer link.
  pub fn set_explorer(&mut self, value: impl Into<String>) {
    self.fields.insert("explorer".into(), Value::String(value.into()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chains::{ETHEREUM, chain_by_id};

  #[test]
  fn replace_identifier_updates_path_and_returns_previous() {
    let chain = *chain_by_id(ETHEREUM).unwrap();
    let mut file = AssetFile::new("assets/0xabc", ArtifactKind::AssetDir, chain, "0xabc");

    let previous = file.replace_identifier("0xABC".into(), PathBuf::from("assets/0xABC"));

    assert_eq!(previous, "0xabc");
    assert_eq!(file.asset(), "0xABC");
    assert_eq!(file.path(), Path::new("assets/0xABC"));
  }

  #[test]
  fn non_string_fields_read_as_unset() {
    let doc: AssetInfoDocument =
      serde_json::from_str(r#"{"type": null, "id": 7, "explorer": "https://x"}"#).unwrap();
    assert_eq!(doc.asset_type(), None);
    assert_eq!(doc.id(), None);
    assert_eq!(doc.explorer(), Some("https://x"));
  }

  #[test]
  fn setters_keep_key_order() {
    let mut doc: AssetInfoDocument =
      serde_json::from_str(r#"{"name": "Token", "type": "erc20", "decimals": 18}"#).unwrap();
    doc.set_asset_type("ERC20");
    doc.set_id("0xABC");

    assert_eq!(
      serde_json::to_string(&doc).unwrap(),
      r#"{"name":"Token","type":"ERC20","decimals":18,"id":"0xABC"}"#
    );
  }

  #[test]
  fn chain_info_round_trips_unknown_keys() {
    let mut doc: ChainInfoDocument =
      serde_json::from_str(r#"{"name": "Tron", "website": "https://tron.network"}"#).unwrap();
    assert_eq!(doc.chain_type(), None);
    doc.set_chain_type(COIN_TYPE);
    assert_eq!(
      serde_json::to_string(&doc).unwrap(),
      r#"{"name":"Tron","website":"https://tron.network","type":"coin"}"#
    );
  }
}
