//! Pixel-level pipeline operators — pure functions over [`Raster`]s.
//!
//! | Operation | Module / crate function |
//! |---|---|
//! | **Crop** | [`crop`] — row-wise copy, bit-identical pixels |
//! | **Matting** | [`matte`] — conjunctive near-white test, alpha-only edit |
//! | **Resample** | [`resample`] — `image::imageops` Lanczos3 + unsharp mask |
//! | **Geometry** | [`calculations`] — pure dimension math, no pixels |
//!
//! The module is split into:
//! - **Params**: [`FitMode`], size-tiered [`SharpenProfile`]s
//! - **Calculations**: pure functions for placement math and tier selection
//! - **Operators**: crop, matte, resample — each takes a borrowed raster and
//!   returns a freshly allocated one
//!
//! Every operator is synchronous, CPU-bound, and free of shared state, so
//! callers (notably the [`batch`](crate::batch) orchestrator) may run them
//! from worker threads against a shared read-only source.
//!
//! [`Raster`]: crate::raster::Raster

pub mod calculations;
pub mod crop;
pub mod matte;
pub mod params;
pub mod resample;

use crate::raster::Rectangle;
use thiserror::Error;

pub use crop::crop;
pub use matte::{DEFAULT_MATTE_THRESHOLD, remove_near_white};
pub use params::{FitMode, SharpenProfile};
pub use resample::resample;

/// Failures raised by the pipeline operators.
///
/// Precondition violations are reported, never corrected: an out-of-bounds
/// crop is not clamped and a zero resample target is not substituted.
#[derive(Error, Debug)]
pub enum ImagingError {
    #[error(
        "crop region {left},{top} {width}x{height} exceeds source extent {source_width}x{source_height}"
    )]
    OutOfBounds {
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },
    #[error("target dimensions {width}x{height} must both be nonzero")]
    InvalidDimensions { width: u32, height: u32 },
    #[error(
        "raster buffer of {actual} bytes does not match {width}x{height} RGBA8 ({expected} bytes)"
    )]
    MalformedRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl ImagingError {
    pub(crate) fn out_of_bounds(region: Rectangle, source_width: u32, source_height: u32) -> Self {
        Self::OutOfBounds {
            left: region.left,
            top: region.top,
            width: region.width,
            height: region.height,
            source_width,
            source_height,
        }
    }
}
