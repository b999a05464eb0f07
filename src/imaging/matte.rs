//! Near-white background matting.

use crate::raster::Raster;

/// Default matte threshold: any pixel with all channels ≥ 226 turns
/// transparent.
pub const DEFAULT_MATTE_THRESHOLD: u8 = 30;

/// Convert near-white pixels to transparent.
///
/// For every pixel, alpha is set to 0 when `r > 255-threshold` AND
/// `g > 255-threshold` AND `b > 255-threshold`; otherwise the pixel is left
/// as-is. RGB channels are never altered, only alpha. The test is
/// conjunctive, not a distance-to-white metric: a pixel that is very bright
/// in two channels but not the third is not matted. The threshold is hard —
/// no partial or antialiased alpha is computed.
///
/// Always returns a full new copy, even when nothing matched, so ownership
/// of the result is the caller's regardless of outcome.
pub fn remove_near_white(source: &Raster, threshold: u8) -> Raster {
    // Strict inequality against 255-threshold, so threshold=30 mattes
    // channel triples ≥ 226.
    let floor = 255 - threshold;
    let mut out = source.clone();
    out.for_each_pixel_mut(|px| {
        if px.r > floor && px.g > floor && px.b > floor {
            px.a = 0;
        }
    });
    out
}
