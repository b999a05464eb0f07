//! Lossless rectangular crop.

use super::ImagingError;
use crate::raster::{Raster, Rectangle};

/// Extract a pixel-exact sub-rectangle from `source`.
///
/// Copies `[left, left+width) × [top, top+height)` row by row into a fresh
/// raster. No resampling, no interpolation: output pixels are bit-identical
/// to the corresponding source pixels, which is the lossless guarantee —
/// cropping never blends, filters, or recompresses values.
///
/// Fails with [`ImagingError::OutOfBounds`] when the region does not lie
/// fully inside the source; the region is never clamped, and nothing is
/// allocated on failure.
pub fn crop(source: &Raster, region: Rectangle) -> Result<Raster, ImagingError> {
    if !region.fits_within(source.width(), source.height()) {
        return Err(ImagingError::out_of_bounds(
            region,
            source.width(),
            source.height(),
        ));
    }

    let mut pixels = Vec::with_capacity((region.width as usize) * (region.height as usize) * 4);
    for y in region.top..region.top + region.height {
        pixels.extend_from_slice(source.row_span(region.left, y, region.width));
    }
    Raster::from_raw(region.width, region.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Px;

    /// Gradient raster where every pixel encodes its own coordinates.
    fn gradient(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| Px {
            r: (x % 256) as u8,
            g: (y % 256) as u8,
            b: ((x + y) % 256) as u8,
            a: 255,
        })
        .unwrap()
    }

    #[test]
    fn crop_is_lossless() {
        let source = gradient(20, 15);
        let region = Rectangle::new(3, 4, 10, 8);
        let cropped = crop(&source, region).unwrap();

        assert_eq!(cropped.dimensions(), (10, 8));
        for y in 0..8 {
            for x in 0..10 {
                assert_eq!(
                    cropped.pixel(x, y),
                    source.pixel(x + region.left, y + region.top),
                    "pixel mismatch at ({x},{y})"
                );
            }
        }
    }

    #[test]
    fn crop_full_extent_copies_everything() {
        let source = gradient(7, 5);
        let cropped = crop(&source, Rectangle::new(0, 0, 7, 5)).unwrap();
        assert_eq!(cropped, source);
    }

    #[test]
    fn crop_single_pixel() {
        let source = gradient(10, 10);
        let cropped = crop(&source, Rectangle::new(6, 3, 1, 1)).unwrap();
        assert_eq!(cropped.dimensions(), (1, 1));
        assert_eq!(cropped.pixel(0, 0), source.pixel(6, 3));
    }

    #[test]
    fn crop_width_overflow_is_out_of_bounds() {
        let source = gradient(10, 10);
        let err = crop(&source, Rectangle::new(5, 0, 6, 5)).unwrap_err();
        assert!(matches!(err, ImagingError::OutOfBounds { .. }));
    }

    #[test]
    fn crop_height_overflow_is_out_of_bounds() {
        let source = gradient(10, 10);
        let err = crop(&source, Rectangle::new(0, 9, 5, 2)).unwrap_err();
        assert!(matches!(err, ImagingError::OutOfBounds { .. }));
    }

    #[test]
    fn crop_zero_size_region_is_out_of_bounds() {
        let source = gradient(10, 10);
        assert!(crop(&source, Rectangle::new(0, 0, 0, 5)).is_err());
        assert!(crop(&source, Rectangle::new(0, 0, 5, 0)).is_err());
    }

    #[test]
    fn crop_leaves_source_untouched() {
        let source = gradient(10, 10);
        let before = source.clone();
        let _ = crop(&source, Rectangle::new(2, 2, 4, 4)).unwrap();
        assert_eq!(source, before);
    }
}
