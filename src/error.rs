//! Error types returned by the fixers and their collaborators.

use std::path::PathBuf;

use crate::address::AddressError;
use crate::chains::ExplorerError;

/// Result alias used across the crate.
pub type FixResult<T> = Result<T, FixError>;

/// Failure of a single fixer call.
///
/// Every variant carries the path or value being processed. Nothing is retried internally and
/// a failed fixer may have applied earlier sub-steps, which is safe because every fixer is
/// idempotent.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
  /// The logo could not be decoded as PNG.
  #[error("failed to decode image {}: {source}", path.display())]
  Decode {
    /// Image path.
    path: PathBuf,
    /// Decoder error.
    source: image::ImageError,
  },

  /// The logo could not be encoded.
  #[error("failed to encode image {}: {source}", path.display())]
  Encode {
    /// Image path.
    path: PathBuf,
    /// Encoder error.
    source: image::ImageError,
  },

  /// Resampling produced an unusable target or could not be persisted.
  #[error("failed to resize image {} to {width}x{height}: {source}", path.display())]
  Resize {
    /// Image path.
    path: PathBuf,
    /// Requested width.
    width: u32,
    /// Requested height.
    height: u32,
    /// Encoder or parameter error.
    source: image::ImageError,
  },

  /// No compression preset brings the logo within its byte budget.
  #[error(
    "unable to compress image {} to {budget} bytes (smallest encoding was {smallest} bytes)",
    path.display()
  )]
  CompressionBudgetExceeded {
    /// Image path.
    path: PathBuf,
    /// Byte budget.
    budget: u64,
    /// Size of the smallest encoding tried.
    smallest: u64,
  },

  /// The canonical checksum form of an address could not be computed.
  #[error("failed to get checksum for {address}: {source}")]
  ChecksumCompute {
    /// Address taken from the asset directory name.
    address: String,
    /// Address parsing error.
    source: AddressError,
  },

  /// Renaming the asset directory failed.
  #[error("failed to rename dir {} to {}: {source}", from.display(), to.display())]
  Rename {
    /// Current directory.
    from: PathBuf,
    /// Canonical directory.
    to: PathBuf,
    /// Filesystem error.
    source: std::io::Error,
  },

  /// Renaming would replace a different, already existing directory.
  #[error("failed to rename dir {} to {}: target already exists", from.display(), to.display())]
  RenameTargetExists {
    /// Current directory.
    from: PathBuf,
    /// Canonical directory.
    to: PathBuf,
  },

  /// The artifact path has no usable file name.
  #[error("invalid asset path {}", path.display())]
  InvalidPath {
    /// Offending path.
    path: PathBuf,
  },

  /// Reading an artifact failed.
  #[error("failed to read {}: {source}", path.display())]
  Read {
    /// Artifact path.
    path: PathBuf,
    /// Filesystem error.
    source: std::io::Error,
  },

  /// A JSON document could not be parsed.
  #[error("failed to parse {}: {source}", path.display())]
  Parse {
    /// Document path.
    path: PathBuf,
    /// Parser error.
    source: serde_json::Error,
  },

  /// A JSON document could not be serialised.
  #[error("failed to serialise JSON: {0}")]
  Serialize(#[source] serde_json::Error),

  /// Writing an artifact failed.
  #[error("failed to write {}: {source}", path.display())]
  Write {
    /// Artifact path.
    path: PathBuf,
    /// Filesystem error.
    source: std::io::Error,
  },

  /// The explorer URL for the asset could not be resolved.
  #[error(transparent)]
  UrlResolution(#[from] ExplorerError),
}
