//! Force chain info documents to the coin type.

use super::{FileUpdateNotifier, Service};
use crate::error::FixResult;
use crate::json_file::{create_json_file, prepare_json_data, read_json_file};
use crate::models::{AssetFile, COIN_TYPE, ChainInfoDocument, FixOutcome};

impl<N: FileUpdateNotifier> Service<N> {
  /// Force the `type` of a chain info document to `"coin"`.
  pub fn fix_chain_info_json(&self, file: &AssetFile) -> FixResult<FixOutcome> {
    let mut chain_info: ChainInfoDocument = read_json_file(file.path())?;

    if chain_info.chain_type() == Some(COIN_TYPE) {
      return Ok(FixOutcome::Unchanged);
    }

    chain_info.set_chain_type(COIN_TYPE);
    let data = prepare_json_data(&chain_info)?;
    create_json_file(file.path(), &data)?;
    Ok(FixOutcome::Rewritten)
  }
}
