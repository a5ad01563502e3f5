//! Rename EVM asset directories to their checksum-cased address.

use std::fs;
use std::path::Path;

use same_file::is_same_file;
use tracing::debug;

use super::{FileUpdateNotifier, Service};
use crate::address::{eip55_checksum, validate_evm_address};
use crate::chains::is_evm;
use crate::error::{FixError, FixResult};
use crate::models::{AssetFile, FixOutcome};

impl<N: FileUpdateNotifier> Service<N> {
  /// Rename an EVM asset directory whose name is not checksum-cased.
  ///
  /// On success the handle is updated to the new identifier and path before the notifier is
  /// called, so later fixers on the same handle see the corrected asset. Non-EVM chains are
  /// left alone.
  pub fn fix_eth_address_checksum(&self, file: &mut AssetFile) -> FixResult<FixOutcome> {
    let chain = *file.chain();
    if !is_evm(chain.id) {
      return Ok(FixOutcome::Unchanged);
    }

    let asset_dir = file
      .path()
      .file_name()
      .and_then(|name| name.to_str())
      .ok_or_else(|| FixError::InvalidPath {
        path: file.path().to_path_buf(),
      })?
      .to_string();

    if validate_evm_address(&chain, &asset_dir).is_ok() {
      return Ok(FixOutcome::Unchanged);
    }

    let checksum = eip55_checksum(&asset_dir).map_err(|source| FixError::ChecksumCompute {
      address: asset_dir.clone(),
      source,
    })?;

    let target = self.layout.asset_path(chain.handle, &checksum);
    rename_asset_dir(file.path(), &target)?;

    let previous = file.replace_identifier(checksum, target);
    self.notifier.identifier_changed(file, &previous);

    debug!(from = %asset_dir, to = %file.asset(), "Renamed asset");
    Ok(FixOutcome::Rewritten)
  }
}

fn rename_asset_dir(from: &Path, to: &Path) -> FixResult<()> {
  let rename_error = |source: std::io::Error| FixError::Rename {
    from: from.to_path_buf(),
    to: to.to_path_buf(),
    source,
  };

  // A case-insensitive filesystem reports the checksum-cased name as the same directory.
  if to.exists() && !is_same_file(from, to).map_err(rename_error)? {
    return Err(FixError::RenameTargetExists {
      from: from.to_path_buf(),
      to: to.to_path_buf(),
    });
  }

  fs::rename(from, to).map_err(rename_error)
}
