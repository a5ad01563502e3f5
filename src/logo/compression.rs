//! Lossless PNG recompression against a byte budget.

use image::DynamicImage;
use image::ImageResult;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

/// One step of the compression search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
  /// Strongest deflate level with adaptive filtering.
  Best,
  /// Default deflate level with adaptive filtering.
  Balanced,
  /// Fastest deflate level with adaptive filtering.
  Fast,
  /// Fastest deflate level without filtering.
  FastUnfiltered,
  /// Stored deflate blocks without filtering, the least compressed preset.
  Uncompressed,
}

impl CompressionLevel {
  /// Every level, from best compression down to least.
  pub const SEARCH_ORDER: [Self; 5] = [
    Self::Best,
    Self::Balanced,
    Self::Fast,
    Self::FastUnfiltered,
    Self::Uncompressed,
  ];

  fn encoder_settings(self) -> (CompressionType, FilterType) {
    match self {
      Self::Best => (CompressionType::Best, FilterType::Adaptive),
      Self::Balanced => (CompressionType::Default, FilterType::Adaptive),
      Self::Fast => (CompressionType::Fast, FilterType::Adaptive),
      Self::FastUnfiltered => (CompressionType::Fast, FilterType::NoFilter),
      Self::Uncompressed => (CompressionType::Uncompressed, FilterType::NoFilter),
    }
  }
}

/// Encode `image` as PNG at `level`.
pub fn encode_png(image: &DynamicImage, level: CompressionLevel) -> ImageResult<Vec<u8>> {
  let (compression, filter) = level.encoder_settings();
  let mut data = Vec::new();
  image.write_with_encoder(PngEncoder::new_with_quality(&mut data, compression, filter))?;
  Ok(data)
}

/// Outcome of [`compress_within`].
#[derive(Debug, PartialEq, Eq)]
pub enum Compressed {
  /// The first level whose encoding fits.
  Within {
    /// Level that produced `data`.
    level: CompressionLevel,
    /// Encoded bytes.
    data: Vec<u8>,
  },
  /// No level fits.
  Exhausted {
    /// Size of the smallest encoding produced.
    smallest: u64,
  },
}

/// Try each level in [`CompressionLevel::SEARCH_ORDER`] and keep the first encoding of at most
/// `budget` bytes.
///
/// Encoders are not monotonic, so a weaker level may still fit after a stronger one missed.
pub fn compress_within<E>(
  budget: u64,
  mut encode: impl FnMut(CompressionLevel) -> Result<Vec<u8>, E>,
) -> Result<Compressed, E> {
  let mut smallest = u64::MAX;

  for level in CompressionLevel::SEARCH_ORDER {
    let data = encode(level)?;
    let size = data.len() as u64;
    if size <= budget {
      return Ok(Compressed::Within { level, data });
    }
    smallest = smallest.min(size);
  }

  Ok(Compressed::Exhausted { smallest })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::convert::Infallible;

  const KIB: usize = 1024;

  fn sized(level: CompressionLevel) -> Vec<u8> {
    let size = match level {
      CompressionLevel::Best => 150 * KIB,
      CompressionLevel::Balanced => 120 * KIB,
      CompressionLevel::Fast => 80 * KIB,
      CompressionLevel::FastUnfiltered => 70 * KIB,
      CompressionLevel::Uncompressed => 60 * KIB,
    };
    vec![0; size]
  }

  #[test]
  fn picks_first_level_within_budget() {
    let mut tried = Vec::new();
    let result = compress_within(100 * KIB as u64, |level| {
      tried.push(level);
      Ok::<_, Infallible>(sized(level))
    })
    .unwrap();

    assert_eq!(tried, vec![
      CompressionLevel::Best,
      CompressionLevel::Balanced,
      CompressionLevel::Fast
    ]);
    match result {
      Compressed::Within { level, data } => {
        assert_eq!(level, CompressionLevel::Fast);
        assert_eq!(data.len(), 80 * KIB);
      }
      other => panic!("expected a fitting encoding, got {other:?}"),
    }
  }

  #[test]
  fn searches_down_to_uncompressed() {
    let mut tried = Vec::new();
    let result = compress_within(64 * KIB as u64, |level| {
      tried.push(level);
      Ok::<_, Infallible>(sized(level))
    })
    .unwrap();

    assert_eq!(tried, CompressionLevel::SEARCH_ORDER.to_vec());
    assert_eq!(tried.last(), Some(&CompressionLevel::Uncompressed));
    assert!(matches!(result, Compressed::Within {
      level: CompressionLevel::Uncompressed,
      ..
    }));
  }

  #[test]
  fn stops_at_best_when_it_fits() {
    let mut calls = 0;
    let result = compress_within(200 * KIB as u64, |level| {
      calls += 1;
      Ok::<_, Infallible>(sized(level))
    })
    .unwrap();

    assert_eq!(calls, 1);
    assert!(matches!(result, Compressed::Within {
      level: CompressionLevel::Best,
      ..
    }));
  }

  #[test]
  fn budget_is_inclusive() {
    let result =
      compress_within(120 * KIB as u64, |level| Ok::<_, Infallible>(sized(level))).unwrap();
    assert!(matches!(result, Compressed::Within {
      level: CompressionLevel::Balanced,
      ..
    }));
  }

  #[test]
  fn reports_smallest_size_when_exhausted() {
    let result = compress_within(10 * KIB as u64, |level| Ok::<_, Infallible>(sized(level))).unwrap();
    assert_eq!(result, Compressed::Exhausted {
      smallest: 60 * KIB as u64
    });
  }

  #[test]
  fn propagates_encoder_errors() {
    let result = compress_within(KIB as u64, |_| Err::<Vec<u8>, _>("boom"));
    assert_eq!(result, Err("boom"));
  }

  #[test]
  fn stronger_levels_shrink_smooth_images() {
    let image = DynamicImage::ImageRgba8(image::RgbaImage::from_fn(128, 128, |x, y| {
      image::Rgba([x as u8, y as u8, (x + y) as u8, 255])
    }));

    let best = encode_png(&image, CompressionLevel::Best).unwrap();
    let unfiltered = encode_png(&image, CompressionLevel::FastUnfiltered).unwrap();
    let stored = encode_png(&image, CompressionLevel::Uncompressed).unwrap();
    assert!(best.len() < unfiltered.len());
    assert!(best.len() < stored.len());
  }
}
