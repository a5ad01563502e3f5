//! Static per-chain metadata.

/// Ethereum.
pub const ETHEREUM: u32 = 60;
/// Ethereum Classic.
pub const CLASSIC: u32 = 61;
/// Tron.
pub const TRON: u32 = 195;
/// Crypto.org chain.
pub const CRYPTO_ORG: u32 = 394;
/// Solana.
pub const SOLANA: u32 = 501;
/// BNB Beacon Chain.
pub const BINANCE: u32 = 714;
/// Polygon.
pub const POLYGON: u32 = 966;
/// Cronos.
pub const CRONOS: u32 = 10_000_025;
/// Optimism.
pub const OPTIMISM: u32 = 10_000_070;
/// Gnosis chain.
pub const GNOSIS: u32 = 10_000_100;
/// Fantom.
pub const FANTOM: u32 = 10_000_250;
/// Avalanche C-Chain.
pub const AVALANCHE_C: u32 = 10_009_000;
/// Arbitrum.
pub const ARBITRUM: u32 = 10_042_221;
/// BNB Smart Chain.
pub const SMARTCHAIN: u32 = 20_000_714;

/// Immutable description of one chain in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDescriptor {
  /// Numeric coin identifier.
  pub id: u32,
  /// Directory name of the chain under the blockchains directory.
  pub handle: &'static str,
  /// Whether addresses on this chain follow EVM conventions.
  pub evm: bool,
}

const fn chain(id: u32, handle: &'static str, evm: bool) -> ChainDescriptor {
  ChainDescriptor { id, handle, evm }
}

/// Every chain known to the fixers.
pub static CHAINS: &[ChainDescriptor] = &[
  chain(ETHEREUM, "ethereum", true),
  chain(CLASSIC, "classic", true),
  chain(TRON, "tron", false),
  chain(CRYPTO_ORG, "cryptoorg", false),
  chain(SOLANA, "solana", false),
  chain(BINANCE, "binance", false),
  chain(POLYGON, "polygon", true),
  chain(CRONOS, "cronos", true),
  chain(OPTIMISM, "optimism", true),
  chain(GNOSIS, "xdai", true),
  chain(FANTOM, "fantom", true),
  chain(AVALANCHE_C, "avalanchec", true),
  chain(ARBITRUM, "arbitrum", true),
  chain(SMARTCHAIN, "smartchain", true),
];

/// Look up a chain by numeric identifier.
pub fn chain_by_id(id: u32) -> Option<&'static ChainDescriptor> {
  CHAINS.iter().find(|chain| chain.id == id)
}

/// Look up a chain by its directory handle.
pub fn chain_by_handle(handle: &str) -> Option<&'static ChainDescriptor> {
  CHAINS.iter().find(|chain| chain.handle == handle)
}

/// Whether the chain with `id` is an EVM chain. Unknown chains are not.
pub fn is_evm(id: u32) -> bool {
  chain_by_id(id).is_some_and(|chain| chain.evm)
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use super::*;

  #[test]
  fn identifiers_and_handles_are_unique() {
    let ids: BTreeSet<u32> = CHAINS.iter().map(|chain| chain.id).collect();
    let handles: BTreeSet<&str> = CHAINS.iter().map(|chain| chain.handle).collect();
    assert_eq!(ids.len(), CHAINS.len());
    assert_eq!(handles.len(), CHAINS.len());
  }

  #[test]
  fn resolves_by_id_and_handle() {
    assert_eq!(chain_by_handle("smartchain").map(|c| c.id), Some(SMARTCHAIN));
    assert_eq!(chain_by_id(ETHEREUM).map(|c| c.handle), Some("ethereum"));
    assert!(chain_by_handle("unknown").is_none());
  }

  #[test]
  fn reports_evm_membership() {
    assert!(is_evm(ETHEREUM));
    assert!(is_evm(CRONOS));
    assert!(!is_evm(TRON));
    assert!(!is_evm(BINANCE));
    assert!(!is_evm(42));
  }
}
