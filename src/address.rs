//! EIP-55 checksum casing for EVM addresses.

use std::sync::OnceLock;

use regex::Regex;
use sha3::{Digest, Keccak256};

use crate::chains::ChainDescriptor;

fn address_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("invalid address regex"))
}

/// Reasons an address is not in canonical checksum form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
  /// Not `0x` followed by 40 hex digits.
  #[error("{0:?} is not a 20-byte hex address")]
  Malformed(String),
  /// Well formed, but the letter casing does not match the checksum.
  #[error("{actual} does not match checksum {expected} on {chain}")]
  ChecksumMismatch {
    /// Chain handle.
    chain: &'static str,
    /// Address as supplied.
    actual: String,
    /// Checksum-cased address.
    expected: String,
  },
}

/// Compute the EIP-55 checksum form of `address`.
pub fn eip55_checksum(address: &str) -> Result<String, AddressError> {
  if !address_pattern().is_match(address) {
    return Err(AddressError::Malformed(address.to_string()));
  }

  let lower = address[2..].to_ascii_lowercase();
  let hash = Keccak256::digest(lower.as_bytes());

  let mut checksum = String::with_capacity(address.len());
  checksum.push_str("0x");
  for (index, ch) in lower.chars().enumerate() {
    let byte = hash[index / 2];
    let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };
    if ch.is_ascii_alphabetic() && nibble >= 8 {
      checksum.push(ch.to_ascii_uppercase());
    } else {
      checksum.push(ch);
    }
  }

  Ok(checksum)
}

/// Check that `address` is a well formed, checksum-cased address for an EVM `chain`.
pub fn validate_evm_address(chain: &ChainDescriptor, address: &str) -> Result<(), AddressError> {
  let expected = eip55_checksum(address)?;
  if expected == address {
    Ok(())
  } else {
    Err(AddressError::ChecksumMismatch {
      chain: chain.handle,
      actual: address.to_string(),
      expected,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chains::{ETHEREUM, chain_by_id};

  const CHECKSUMMED: &[&str] = &[
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
  ];

  #[test]
  fn checksums_lowercase_addresses() {
    for expected in CHECKSUMMED {
      let lower = expected.to_ascii_lowercase();
      assert_eq!(eip55_checksum(&lower).unwrap(), *expected);
    }
  }

  #[test]
  fn checksum_is_stable_for_checksummed_input() {
    for expected in CHECKSUMMED {
      assert_eq!(eip55_checksum(expected).unwrap(), *expected);
    }
  }

  #[test]
  fn rejects_malformed_addresses() {
    assert!(matches!(eip55_checksum("0x123"), Err(AddressError::Malformed(_))));
    assert!(matches!(
      eip55_checksum("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
      Err(AddressError::Malformed(_))
    ));
    assert!(matches!(
      eip55_checksum("0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
      Err(AddressError::Malformed(_))
    ));
  }

  #[test]
  fn validation_requires_exact_casing() {
    let chain = chain_by_id(ETHEREUM).unwrap();
    assert!(validate_evm_address(chain, CHECKSUMMED[0]).is_ok());

    let err = validate_evm_address(chain, &CHECKSUMMED[0].to_ascii_lowercase()).unwrap_err();
    assert_eq!(err, AddressError::ChecksumMismatch {
      chain: "ethereum",
      actual: CHECKSUMMED[0].to_ascii_lowercase(),
      expected: CHECKSUMMED[0].to_string(),
    });
  }
}
