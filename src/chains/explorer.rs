//! Canonical block explorer links for assets.

use super::registry::{
  ARBITRUM, AVALANCHE_C, BINANCE, CLASSIC, CRONOS, CRYPTO_ORG, ChainDescriptor, ETHEREUM, FANTOM,
  GNOSIS, OPTIMISM, POLYGON, SMARTCHAIN, SOLANA, TRON,
};
use super::token_types::TRC10;

/// The chain has no explorer template for the requested asset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported explorer for chain {handle} ({chain_id}) and type {token_type:?}")]
pub struct ExplorerError {
  /// Chain identifier.
  pub chain_id: u32,
  /// Chain handle.
  pub handle: &'static str,
  /// Type string that was supplied.
  pub token_type: String,
}

fn template(chain_id: u32, token_type: &str) -> Option<&'static str> {
  let template = match chain_id {
    ETHEREUM => "https://etherscan.io/token/{}",
    CLASSIC => "https://blockscout.com/etc/mainnet/tokens/{}",
    TRON if token_type.eq_ignore_ascii_case(TRC10) => "https://tronscan.io/#/token/{}",
    TRON => "https://tronscan.io/#/token20/{}",
    CRYPTO_ORG => "https://crypto.org/explorer/account/{}",
    SOLANA => "https://solscan.io/token/{}",
    BINANCE => "https://explorer.binance.org/asset/{}",
    POLYGON => "https://polygonscan.com/token/{}",
    CRONOS => "https://cronoscan.com/token/{}",
    OPTIMISM => "https://optimistic.etherscan.io/token/{}",
    GNOSIS => "https://blockscout.com/xdai/mainnet/tokens/{}",
    FANTOM => "https://ftmscan.com/token/{}",
    AVALANCHE_C => "https://snowtrace.io/token/{}",
    ARBITRUM => "https://arbiscan.io/token/{}",
    SMARTCHAIN => "https://bscscan.com/token/{}",
    _ => return None,
  };
  Some(template)
}

/// Build the explorer link for `identifier` on `chain`.
///
/// The token type only matters where a chain hosts several token standards under different
/// explorer routes (Tron).
pub fn explorer_url(
  chain: &ChainDescriptor,
  identifier: &str,
  token_type: &str,
) -> Result<String, ExplorerError> {
  template(chain.id, token_type)
    .map(|template| template.replace("{}", identifier))
    .ok_or_else(|| ExplorerError {
      chain_id: chain.id,
      handle: chain.handle,
      token_type: token_type.to_string(),
    })
}
