//! Target size calculation for oversized logos.

use crate::config::Dimensions;

/// Whether either side of the image is larger than `limit`.
pub fn exceeds(width: u32, height: u32, limit: Dimensions) -> bool {
  width > limit.width || height > limit.height
}

/// Scale `width`x`height` down until it fits inside `limit`, keeping the aspect ratio.
///
/// With a square limit the longest edge lands exactly on the limit. A non-square limit scales
/// by the tighter axis, so the result never [`exceeds`] it and a second pass has nothing to do.
/// Each side is truncated and clamped to at least one pixel.
pub fn target_dimensions(width: u32, height: u32, limit: Dimensions) -> (u32, u32) {
  let width_f = width as f32;
  let height_f = height as f32;
  let ratio = (limit.width as f32 / width_f).min(limit.height as f32 / height_f);

  let target_width = (width_f * ratio) as u32;
  let target_height = (height_f * ratio) as u32;

  (target_width.max(1), target_height.max(1))
}
