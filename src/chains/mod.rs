//! Per-chain metadata consumed by the fixers.
//!
//! The registry, token type table and explorer templates are split into focused submodules so
//! that each lookup can be tested on its own.

mod explorer;
mod registry;
mod token_types;

pub use explorer::{ExplorerError, explorer_url};
pub use registry::{
  ARBITRUM, AVALANCHE_C, BINANCE, CHAINS, CLASSIC, CRONOS, CRYPTO_ORG, ChainDescriptor, ETHEREUM,
  FANTOM, GNOSIS, OPTIMISM, POLYGON, SMARTCHAIN, SOLANA, TRON, chain_by_handle, chain_by_id, is_evm,
};
pub use token_types::{TRC10, TRC20, UnknownTokenType, parse_chain_from_type, token_type};
