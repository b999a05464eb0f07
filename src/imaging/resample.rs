//! Quality-aware resampling with size-tiered sharpening.
//!
//! The kernel is Lanczos3 (`image::imageops::resize`) for both upscaling and
//! downscaling — nearest/bilinear aliases badly on downscale and goes blocky
//! on upscale. After resampling, an unsharp-mask pass runs with parameters
//! selected from the *target* width tier (see
//! [`calculations::sharpen_profile_for`]).
//!
//! The unsharp combine is implemented here rather than through
//! `imageops::unsharpen`: that helper has no gain parameter, and the tiers
//! need a fractional `amount` applied to the residual.
//!
//! [`calculations::sharpen_profile_for`]: super::calculations::sharpen_profile_for

use super::ImagingError;
use super::calculations::{contain_placement, sharpen_profile_for};
use super::params::{FitMode, SharpenProfile};
use crate::raster::Raster;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Resample `source` to exactly `width × height`.
///
/// - **Fill**: the source is stretched independently along each axis; aspect
///   ratio is not preserved.
/// - **Contain**: the source is scaled by `min(width/sw, height/sh)` and
///   centered on a fully transparent canvas; uncovered borders stay at
///   alpha 0, never a background color.
///
/// The output always has exactly the requested dimensions. Fails with
/// [`ImagingError::InvalidDimensions`] when either target dimension is zero,
/// and re-checks the source buffer invariant at this boundary (a malformed
/// raster should not exist post-decode, but is reported rather than assumed).
pub fn resample(
    source: &Raster,
    width: u32,
    height: u32,
    mode: FitMode,
) -> Result<Raster, ImagingError> {
    if width == 0 || height == 0 {
        return Err(ImagingError::InvalidDimensions { width, height });
    }
    source.validate()?;

    let src_image = to_rgba_image(source)?;

    let composed = match mode {
        FitMode::Fill => imageops::resize(&src_image, width, height, FilterType::Lanczos3),
        FitMode::Contain => {
            let place = contain_placement(source.dimensions(), (width, height));
            let scaled =
                imageops::resize(&src_image, place.width, place.height, FilterType::Lanczos3);
            let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
            // replace, not overlay: a straight pixel copy with no blending
            imageops::replace(&mut canvas, &scaled, place.left as i64, place.top as i64);
            canvas
        }
    };

    let sharpened = unsharp_mask(&composed, sharpen_profile_for(width));
    Raster::from_raw(width, height, sharpened.into_raw())
}

/// Apply an unsharp mask: amplify the residual between the image and a
/// Gaussian-blurred copy of itself.
///
/// `amount` acts as a percentage gain on the residual; residuals with
/// magnitude below `threshold` are skipped so near-flat noise is not
/// amplified. Only RGB is sharpened — alpha passes through, which keeps
/// contain-mode borders fully transparent.
fn unsharp_mask(image: &RgbaImage, profile: SharpenProfile) -> RgbaImage {
    let blurred = imageops::blur(image, profile.radius);
    let gain = profile.amount as f32 / 100.0;
    let threshold = profile.threshold as f32;

    let mut out = image.clone();
    for (out_px, blur_px) in out.pixels_mut().zip(blurred.pixels()) {
        for channel in 0..3 {
            let original = out_px.0[channel] as f32;
            let residual = original - blur_px.0[channel] as f32;
            if residual.abs() >= threshold {
                out_px.0[channel] = (original + residual * gain).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

/// Clone the raster buffer into an `image` buffer of identical layout.
fn to_rgba_image(raster: &Raster) -> Result<RgbaImage, ImagingError> {
    RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec()).ok_or(
        ImagingError::MalformedRaster {
            width: raster.width(),
            height: raster.height(),
            expected: (raster.width() as usize) * (raster.height() as usize) * 4,
            actual: raster.pixels().len(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Px;

    fn solid(r: u8, g: u8, b: u8, width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |_, _| Px::opaque(r, g, b)).unwrap()
    }

    #[test]
    fn fill_output_has_exact_dimensions() {
        let source = solid(90, 40, 200, 100, 50);
        for (w, h) in [(30, 300), (300, 30), (17, 13), (512, 512)] {
            let out = resample(&source, w, h, FitMode::Fill).unwrap();
            assert_eq!(out.dimensions(), (w, h));
        }
    }

    #[test]
    fn contain_output_has_exact_dimensions() {
        let source = solid(90, 40, 200, 123, 77);
        let out = resample(&source, 64, 64, FitMode::Contain).unwrap();
        assert_eq!(out.dimensions(), (64, 64));
    }

    #[test]
    fn contain_centers_wide_source_with_transparent_margins() {
        // 100x50 → 200x200: content 200x100, 50px transparent bands top and bottom
        let source = solid(200, 30, 30, 100, 50);
        let out = resample(&source, 200, 200, FitMode::Contain).unwrap();

        for y in 0..50 {
            for x in 0..200 {
                assert_eq!(out.pixel(x, y).a, 0, "top margin opaque at ({x},{y})");
                assert_eq!(out.pixel(x, 199 - y).a, 0, "bottom margin opaque");
            }
        }
        // content band is opaque
        for y in 50..150 {
            assert_eq!(out.pixel(100, y).a, 255, "content transparent at row {y}");
        }
    }

    #[test]
    fn contain_margins_are_alpha_zero_not_background() {
        let source = solid(255, 255, 255, 50, 100);
        let out = resample(&source, 200, 200, FitMode::Contain).unwrap();
        // left margin: 50px of untouched canvas
        let px = out.pixel(10, 100);
        assert_eq!(px.a, 0);
    }

    #[test]
    fn fill_of_solid_color_stays_that_color() {
        // A constant image has zero residual everywhere, so sharpening is a
        // no-op and Lanczos of a constant is that constant.
        let source = solid(37, 150, 91, 40, 40);
        let out = resample(&source, 80, 80, FitMode::Fill).unwrap();
        for y in 0..80 {
            for x in 0..80 {
                let px = out.pixel(x, y);
                assert_eq!((px.r, px.g, px.b, px.a), (37, 150, 91, 255));
            }
        }
    }

    #[test]
    fn zero_target_dimension_is_rejected() {
        let source = solid(0, 0, 0, 10, 10);
        assert!(matches!(
            resample(&source, 0, 10, FitMode::Contain),
            Err(ImagingError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
        assert!(matches!(
            resample(&source, 10, 0, FitMode::Fill),
            Err(ImagingError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn upscale_and_downscale_both_work() {
        let source = Raster::from_fn(100, 100, |x, y| {
            // checkerboard, so the kernel has real edges to work on
            if (x / 10 + y / 10) % 2 == 0 {
                Px::opaque(255, 255, 255)
            } else {
                Px::opaque(0, 0, 0)
            }
        })
        .unwrap();

        let down = resample(&source, 16, 16, FitMode::Fill).unwrap();
        assert_eq!(down.dimensions(), (16, 16));
        let up = resample(&source, 400, 400, FitMode::Fill).unwrap();
        assert_eq!(up.dimensions(), (400, 400));
    }

    #[test]
    fn unsharp_zero_residual_is_identity() {
        let flat = RgbaImage::from_pixel(8, 8, Rgba([120, 120, 120, 255]));
        let sharpened = unsharp_mask(&flat, SharpenProfile::aggressive());
        assert_eq!(sharpened, flat);
    }

    #[test]
    fn unsharp_threshold_gates_small_residuals() {
        // Residuals on this gentle ramp stay below the subtle tier's
        // threshold of 5, so the pass must not touch anything.
        let ramp = RgbaImage::from_fn(16, 1, |x, _| {
            let v = 100 + x as u8; // max neighbor delta 1
            Rgba([v, v, v, 255])
        });
        let sharpened = unsharp_mask(&ramp, SharpenProfile::subtle());
        assert_eq!(sharpened, ramp);
    }

    #[test]
    fn unsharp_amplifies_hard_edges() {
        // Black/white step: the white side of the edge must get pushed up
        // against the blur, the black side down. With u8 clamping the
        // observable effect is that edge-adjacent pixels move away from the
        // blurred midtone.
        let step = RgbaImage::from_fn(16, 1, |x, _| {
            if x < 8 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let sharpened = unsharp_mask(&step, SharpenProfile::moderate());
        // extremes clamp in place
        assert_eq!(sharpened.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(sharpened.get_pixel(15, 0).0, [255, 255, 255, 255]);
        // alpha untouched everywhere
        assert!(sharpened.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn unsharp_leaves_alpha_untouched() {
        let img = RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([(x * 30) as u8, (y * 30) as u8, 0, (x * 20) as u8])
        });
        let sharpened = unsharp_mask(&img, SharpenProfile::aggressive());
        for (a, b) in sharpened.pixels().zip(img.pixels()) {
            assert_eq!(a.0[3], b.0[3]);
        }
    }
}
