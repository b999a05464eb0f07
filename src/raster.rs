//! In-memory bitmap representation shared by every pipeline operator.
//!
//! A [`Raster`] is a width, a height, and a flat, contiguous RGBA8 buffer of
//! exactly `width × height × 4` bytes. The buffer layout is identical to
//! `image::RgbaImage`, so conversion between the two is a plain buffer move —
//! no per-pixel shuffling. Call sites never do channel-index arithmetic on
//! the buffer; they go through the typed accessors ([`Raster::pixel`],
//! [`Raster::for_each_pixel_mut`], [`Raster::row`]).
//!
//! Ownership follows the pipeline contract: every operator allocates a fresh
//! `Raster` for its output and never mutates one it did not allocate.

use crate::imaging::ImagingError;
use serde::{Deserialize, Serialize};

/// Bytes per RGBA8 sample.
const CHANNELS: usize = 4;

/// A single RGBA8 sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Px {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Px {
    pub const TRANSPARENT: Px = Px {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A decoded bitmap: dimensions plus a flat RGBA8 pixel buffer.
///
/// The length invariant (`pixels.len() == width × height × 4`, both
/// dimensions nonzero) is enforced at every constructor, so a `Raster`
/// obtained safely is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Build a raster from an existing RGBA8 buffer.
    ///
    /// Fails with [`ImagingError::MalformedRaster`] when either dimension is
    /// zero or the buffer length does not match `width × height × 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImagingError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS));
        match expected {
            Some(expected) if width > 0 && height > 0 && pixels.len() == expected => Ok(Self {
                width,
                height,
                pixels,
            }),
            _ => Err(ImagingError::MalformedRaster {
                width,
                height,
                expected: expected.unwrap_or(0),
                actual: pixels.len(),
            }),
        }
    }

    /// A fully transparent canvas of the given size.
    pub fn blank(width: u32, height: u32) -> Result<Self, ImagingError> {
        if width == 0 || height == 0 {
            return Err(ImagingError::MalformedRaster {
                width,
                height,
                expected: 0,
                actual: 0,
            });
        }
        let len = (width as usize) * (height as usize) * CHANNELS;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Build a raster by evaluating a function at every coordinate.
    /// Mirrors `image::RgbaImage::from_fn`; mostly useful in tests and
    /// synthetic-input tooling.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Px,
    ) -> Result<Self, ImagingError> {
        let mut raster = Self::blank(width, height)?;
        for y in 0..height {
            for x in 0..width {
                raster.put_pixel(x, y, f(x, y));
            }
        }
        Ok(raster)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw RGBA8 buffer, row-major, no padding.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster, yielding its buffer (used for zero-copy handoff
    /// to the codec layer).
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Re-check the buffer invariant at an operator boundary.
    ///
    /// Constructors already enforce it; operators call this defensively so a
    /// malformed input is reported as an error rather than a panic deep in a
    /// pixel loop.
    pub fn validate(&self) -> Result<(), ImagingError> {
        let expected = (self.width as usize) * (self.height as usize) * CHANNELS;
        if self.width == 0 || self.height == 0 || self.pixels.len() != expected {
            return Err(ImagingError::MalformedRaster {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }

    /// Read the sample at `(x, y)`. Panics on out-of-range coordinates, same
    /// as slice indexing — callers index within `(width, height)`.
    pub fn pixel(&self, x: u32, y: u32) -> Px {
        let i = self.offset(x, y);
        Px {
            r: self.pixels[i],
            g: self.pixels[i + 1],
            b: self.pixels[i + 2],
            a: self.pixels[i + 3],
        }
    }

    /// Overwrite the sample at `(x, y)`.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Px) {
        let i = self.offset(x, y);
        self.pixels[i] = px.r;
        self.pixels[i + 1] = px.g;
        self.pixels[i + 2] = px.b;
        self.pixels[i + 3] = px.a;
    }

    /// One full row of raw RGBA8 bytes.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.offset(0, y);
        &self.pixels[start..start + (self.width as usize) * CHANNELS]
    }

    /// A horizontal span of `len` pixels starting at `(x, y)`, as raw bytes.
    /// Lets the crop operator copy row segments without index math at the
    /// call site.
    pub fn row_span(&self, x: u32, y: u32, len: u32) -> &[u8] {
        let start = self.offset(x, y);
        &self.pixels[start..start + (len as usize) * CHANNELS]
    }

    /// Visit every sample mutably, in row-major order.
    pub fn for_each_pixel_mut(&mut self, mut f: impl FnMut(&mut Px)) {
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            let mut px = Px {
                r: chunk[0],
                g: chunk[1],
                b: chunk[2],
                a: chunk[3],
            };
            f(&mut px);
            chunk[0] = px.r;
            chunk[1] = px.g;
            chunk[2] = px.b;
            chunk[3] = px.a;
        }
    }
}

/// A crop region in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether this region lies fully inside a `source_width × source_height`
    /// raster. Zero-sized regions never fit.
    pub fn fits_within(&self, source_width: u32, source_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && (self.left as u64 + self.width as u64) <= source_width as u64
            && (self.top as u64 + self.height as u64) <= source_height as u64
    }
}
