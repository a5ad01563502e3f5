//! Bring logos within their dimension and byte-size limits.
//!
//! The dimension pass resamples anything larger than the medium threshold and persists it. The
//! size pass then checks the file on disk and, when it is over budget, searches the compression
//! levels from best to least, encoding from the pixels already in memory.

mod compression;
mod dimensions;

use std::fs;
use std::path::Path;

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

pub use compression::{CompressionLevel, Compressed, compress_within, encode_png};
pub use dimensions::{exceeds, target_dimensions};

use crate::config::LogoLimits;
use crate::error::{FixError, FixResult};
use crate::models::FixOutcome;
use crate::persist::replace_file;

/// Result of checking a logo file against its byte budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
  /// The file fits.
  Within,
  /// The file is larger than the budget.
  Oversized {
    /// File size in bytes.
    size: u64,
  },
}

/// Decode the PNG at `path`.
pub fn decode_png(path: &Path) -> FixResult<DynamicImage> {
  let data = fs::read(path).map_err(|source| FixError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  image::load_from_memory_with_format(&data, ImageFormat::Png).map_err(|source| FixError::Decode {
    path: path.to_path_buf(),
    source,
  })
}

/// Resample `image` to exactly `width`x`height`, persist it at `path` and return the new pixels.
pub fn resize_png(
  path: &Path,
  image: &DynamicImage,
  width: u32,
  height: u32,
) -> FixResult<DynamicImage> {
  let resize_error = |source: ImageError| FixError::Resize {
    path: path.to_path_buf(),
    width,
    height,
    source,
  };

  if width == 0 || height == 0 {
    return Err(resize_error(ImageError::Parameter(ParameterError::from_kind(
      ParameterErrorKind::DimensionMismatch,
    ))));
  }

  let resized = image.resize_exact(width, height, FilterType::Lanczos3);
  let data = encode_png(&resized, CompressionLevel::Balanced).map_err(resize_error)?;
  replace_file(path, &data)?;
  Ok(resized)
}

/// Compare the on-disk size of the logo at `path` with `budget`.
pub fn validate_logo_file_size(path: &Path, budget: u64) -> FixResult<SizeCheck> {
  let size = fs::metadata(path)
    .map_err(|source| FixError::Read {
      path: path.to_path_buf(),
      source,
    })?
    .len();

  Ok(if size > budget {
    SizeCheck::Oversized { size }
  } else {
    SizeCheck::Within
  })
}

/// Resize and recompress the logo at `path` until it satisfies `limits`.
///
/// Fails with [`FixError::CompressionBudgetExceeded`] when no compression level fits, leaving
/// the file as the dimension pass left it.
pub fn normalize_logo(path: &Path, limits: &LogoLimits) -> FixResult<FixOutcome> {
  let mut image = decode_png(path)?;
  let (width, height) = image.dimensions();
  let mut outcome = FixOutcome::Unchanged;

  if exceeds(width, height, limits.medium) {
    let (target_width, target_height) = target_dimensions(width, height, limits.medium);
    debug!(
      path = %path.display(),
      width,
      height,
      target_width,
      target_height,
      "Fixing too large image"
    );
    image = resize_png(path, &image, target_width, target_height)?;
    outcome = FixOutcome::Rewritten;
  }

  let budget = limits.max_file_size_bytes;
  let SizeCheck::Oversized { size } = validate_logo_file_size(path, budget)? else {
    return Ok(outcome);
  };

  debug!(path = %path.display(), size, budget, "Fixing logo file size");
  let compressed = compress_within(budget, |level| encode_png(&image, level)).map_err(|source| {
    FixError::Encode {
      path: path.to_path_buf(),
      source,
    }
  })?;

  match compressed {
    Compressed::Within { level, data } => {
      debug!(path = %path.display(), ?level, size = data.len(), "Recompressed logo");
      replace_file(path, &data)?;
      Ok(FixOutcome::Rewritten)
    }
    Compressed::Exhausted { smallest } => Err(FixError::CompressionBudgetExceeded {
      path: path.to_path_buf(),
      budget,
      smallest,
    }),
  }
}
