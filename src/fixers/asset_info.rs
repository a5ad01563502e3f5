//! Reconcile the derived fields of an asset info document.

use tracing::debug;

use super::{FileUpdateNotifier, Service};
use crate::chains::{ChainDescriptor, ExplorerError, explorer_url, parse_chain_from_type, token_type};
use crate::config::ReconcilerConfig;
use crate::error::FixResult;
use crate::json_file::{create_json_file, prepare_json_data, read_json_file};
use crate::models::{AssetFile, AssetInfoDocument, FixOutcome};

/// Chain named by a type string, or `None` when the string is empty or unknown.
fn identified_chain(asset_type: &str) -> Option<u32> {
  parse_chain_from_type(asset_type).ok().map(|chain| chain.id)
}

/// Bring `type`, `id` and `explorer` of `info` in line with the asset's chain and identifier.
///
/// Returns whether any field changed. The explorer link is derived from the `type` as read,
/// not from a type corrected in the same call.
pub fn reconcile_asset_info(
  info: &mut AssetInfoDocument,
  chain: &ChainDescriptor,
  asset: &str,
  config: &ReconcilerConfig,
) -> Result<bool, ExplorerError> {
  let mut modified = false;

  let asset_type = info.asset_type().unwrap_or_default().to_string();
  let expected_type = token_type(chain.id, asset)
    .map(str::to_string)
    .unwrap_or_else(|| asset_type.to_uppercase());

  if !config.is_exempt(chain.id)
    && (identified_chain(&asset_type) != Some(chain.id)
      || !asset_type.eq_ignore_ascii_case(&expected_type))
    && info.asset_type() != Some(expected_type.as_str())
  {
    info.set_asset_type(expected_type);
    modified = true;
  }

  if info.id() != Some(asset) {
    info.set_id(asset);
    modified = true;
  }

  let expected_explorer = explorer_url(chain, asset, &asset_type)?;
  if !info
    .explorer()
    .is_some_and(|explorer| explorer.eq_ignore_ascii_case(&expected_explorer))
  {
    info.set_explorer(expected_explorer);
    modified = true;
  }

  Ok(modified)
}

impl<N: FileUpdateNotifier> Service<N> {
  /// Fix `type`, `id` and `explorer` of an asset info document, rewriting it only when one of
  /// them changed.
  pub fn fix_asset_info(&self, file: &AssetFile) -> FixResult<FixOutcome> {
    let mut asset_info: AssetInfoDocument = read_json_file(file.path())?;

    let modified = reconcile_asset_info(
      &mut asset_info,
      file.chain(),
      file.asset(),
      &self.config.reconciler,
    )?;
    if !modified {
      return Ok(FixOutcome::Unchanged);
    }

    debug!(path = %file.path().display(), asset = file.asset(), "Fixing asset info");
    let data = prepare_json_data(&asset_info)?;
    create_json_file(file.path(), &data)?;
    Ok(FixOutcome::Rewritten)
  }
}
