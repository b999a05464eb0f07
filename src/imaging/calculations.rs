//! Pure calculation functions for resample geometry.
//!
//! All functions here are pure and testable without any pixels or I/O.

use super::params::SharpenProfile;

/// Where contain-mode content lands inside the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainPlacement {
    /// Scaled content width.
    pub width: u32,
    /// Scaled content height.
    pub height: u32,
    /// Horizontal offset of the content inside the canvas.
    pub left: u32,
    /// Vertical offset of the content inside the canvas.
    pub top: u32,
}

/// Compute the contain-mode placement of `source` inside `target`.
///
/// Scale is `min(target_w / source_w, target_h / source_h)`; scaled content
/// dimensions and centering offsets are rounded, not truncated, so there is
/// no systematic one-pixel bias toward the top-left. Rounding is clamped so
/// extreme aspect ratios never collapse a dimension to zero.
///
/// # Examples
/// ```
/// # use iconsmith::imaging::calculations::contain_placement;
/// // 100x50 into 200x200 → 200x100 content, vertically centered
/// let p = contain_placement((100, 50), (200, 200));
/// assert_eq!((p.width, p.height), (200, 100));
/// assert_eq!((p.left, p.top), (0, 50));
/// ```
pub fn contain_placement(source: (u32, u32), target: (u32, u32)) -> ContainPlacement {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let scale = f64::min(
        tgt_w as f64 / src_w as f64,
        tgt_h as f64 / src_h as f64,
    );

    let width = ((src_w as f64 * scale).round() as u32).max(1).min(tgt_w);
    let height = ((src_h as f64 * scale).round() as u32).max(1).min(tgt_h);

    let left = ((tgt_w - width) as f64 / 2.0).round() as u32;
    let top = ((tgt_h - height) as f64 / 2.0).round() as u32;

    ContainPlacement {
        width,
        height,
        left,
        top,
    }
}

/// Select the sharpening tier for a resample, from the *target* width.
///
/// The source size plays no part: a 4000px original downscaled to a 16px
/// icon needs the same aggressive pass as a 64px original would.
pub fn sharpen_profile_for(target_width: u32) -> SharpenProfile {
    if target_width <= 64 {
        SharpenProfile::aggressive()
    } else if target_width <= 256 {
        SharpenProfile::moderate()
    } else {
        SharpenProfile::subtle()
    }
}
