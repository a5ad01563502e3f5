//! Token standards per chain and the reverse lookup from a type string.

use super::registry::{
  ARBITRUM, AVALANCHE_C, BINANCE, CLASSIC, CRONOS, CRYPTO_ORG, ChainDescriptor, ETHEREUM, FANTOM,
  GNOSIS, OPTIMISM, POLYGON, SMARTCHAIN, SOLANA, TRON, chain_by_id,
};

/// TRC10 tokens on Tron are identified by a numeric id.
pub const TRC10: &str = "TRC10";
/// TRC20 tokens on Tron are identified by a contract address.
pub const TRC20: &str = "TRC20";

static TOKEN_TYPES: &[(u32, &str)] = &[
  (ETHEREUM, "ERC20"),
  (CLASSIC, "ETC20"),
  (CRYPTO_ORG, "CRYPTOORG"),
  (SOLANA, "SPL"),
  (BINANCE, "BEP2"),
  (POLYGON, "POLYGON"),
  (CRONOS, "CRC20"),
  (OPTIMISM, "OPTIMISM"),
  (GNOSIS, "XDAI"),
  (FANTOM, "FANTOM"),
  (AVALANCHE_C, "AVALANCHE"),
  (ARBITRUM, "ARBITRUM"),
  (SMARTCHAIN, "BEP20"),
  (TRON, TRC20),
  (TRON, TRC10),
];

/// A type string that names no known token standard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown asset type {0:?}")]
pub struct UnknownTokenType(pub String);

/// Expected token type for an asset, if the chain registers one.
pub fn token_type(chain_id: u32, identifier: &str) -> Option<&'static str> {
  if chain_id == TRON {
    let numeric = !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit());
    return Some(if numeric { TRC10 } else { TRC20 });
  }

  TOKEN_TYPES
    .iter()
    .find(|(id, _)| *id == chain_id)
    .map(|(_, token_type)| *token_type)
}

/// Resolve the chain a token type string belongs to. Matching ignores ASCII case.
pub fn parse_chain_from_type(
  token_type: &str,
) -> Result<&'static ChainDescriptor, UnknownTokenType> {
  TOKEN_TYPES
    .iter()
    .find(|(_, candidate)| candidate.eq_ignore_ascii_case(token_type))
    .and_then(|(id, _)| chain_by_id(*id))
    .ok_or_else(|| UnknownTokenType(token_type.to_string()))
}
