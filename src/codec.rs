//! Raster I/O adapter — decode and encode on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, WebP) | `image::load_from_memory` (pure Rust decoders) |
//! | Normalize | `DynamicImage::into_rgba8` — everything becomes RGBA8 |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//!
//! Decoding is the pipeline's trust boundary with the codec ecosystem: any
//! decodable input comes out as a well-formed [`Raster`], and everything
//! downstream can rely on the buffer invariant. Encoding targets PNG only —
//! the one alpha-preserving lossless format the pipeline assumes throughout.
//! Color management is out of scope; samples pass through as-is.

use crate::raster::Raster;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("PNG encode failed: {0}")]
    Encode(String),
}

/// Decode an encoded image blob into an RGBA8 raster.
///
/// Accepts any format whose decoder is compiled in (PNG, JPEG, WebP); the
/// container format is sniffed from the bytes, not from a filename. Whatever
/// the source color type, the result is normalized to RGBA8.
pub fn decode(bytes: &[u8]) -> Result<Raster, CodecError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_raw(width, height, rgba.into_raw())
        .map_err(|e| CodecError::Decode(e.to_string()))
}

/// Decode an image file from disk.
pub fn decode_file(path: &Path) -> Result<Raster, CodecError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
        .map_err(|e| CodecError::Decode(format!("{}: {}", path.display(), source_of(e))))
}

/// Encode a raster as PNG bytes — lossless, alpha-preserving.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            raster.pixels(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(out)
}

/// Encode a raster and write it to disk as PNG.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), CodecError> {
    let bytes = encode_png(raster)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn source_of(err: CodecError) -> String {
    match err {
        CodecError::Io(e) => e.to_string(),
        CodecError::Decode(msg) | CodecError::Encode(msg) => msg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Px;

    fn gradient(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| Px {
            r: (x % 256) as u8,
            g: (y % 256) as u8,
            b: ((x * y) % 256) as u8,
            a: if x % 2 == 0 { 255 } else { 128 },
        })
        .unwrap()
    }

    #[test]
    fn png_roundtrip_preserves_every_sample() {
        let original = gradient(33, 17);
        let bytes = encode_png(&original).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_garbage_is_an_error() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn decode_empty_input_is_an_error() {
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn decode_jpeg_normalizes_to_rgba() {
        // Encode an RGB (no alpha) JPEG, decode it back: the raster must be
        // RGBA8 with fully opaque alpha.
        let rgb = image::RgbImage::from_fn(20, 10, |x, y| {
            image::Rgb([(x * 12) as u8, (y * 25) as u8, 60])
        });
        let mut bytes = Vec::new();
        image::codecs::jpeg::JpegEncoder::new(&mut bytes)
            .write_image(rgb.as_raw(), 20, 10, ExtendedColorType::Rgb8)
            .unwrap();

        let raster = decode(&bytes).unwrap();
        assert_eq!(raster.dimensions(), (20, 10));
        assert!((0..10).all(|y| (0..20).all(|x| raster.pixel(x, y).a == 255)));
    }

    #[test]
    fn write_and_decode_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.png");

        let original = gradient(8, 8);
        write_png(&original, &path).unwrap();

        let read_back = decode_file(&path).unwrap();
        assert_eq!(read_back, original);
    }

    #[test]
    fn decode_file_missing_path_is_io_error() {
        let err = decode_file(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
