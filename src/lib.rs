//! # iconsmith
//!
//! A client-side raster transformation pipeline: lossless rectangular crop,
//! near-white background matting, quality-aware Lanczos resampling with
//! size-tiered sharpening, and batch icon-set export. Everything runs
//! in-process on plain RGBA8 buffers — no server round-trips, no image
//! persisted beyond the edit that produced it.
//!
//! # Architecture: Operators Over Owned Rasters
//!
//! Each stage is a pure function from a borrowed [`Raster`] to a freshly
//! allocated one:
//!
//! ```text
//! decode → crop → matte (optional) → resample → encode
//!                                       ↑
//!                       batch orchestrator (one call per size)
//! ```
//!
//! No operator mutates a raster it did not allocate, no stage retains its
//! input after handing the output on, and nothing is shared across pipeline
//! invocations. That discipline is what lets the batch orchestrator fan
//! sizes out over worker threads with nothing but an immutable borrow of the
//! shared source.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`raster`] | `Raster` and `Rectangle`: flat RGBA8 buffer with typed pixel accessors |
//! | [`codec`] | Decode (PNG/JPEG/WebP → RGBA8) and encode (→ PNG) on the `image` crate |
//! | [`imaging`] | The operators: crop, matte, resample, plus pure geometry math |
//! | [`batch`] | Multi-size export: rayon fan-out, ordered all-or-nothing join |
//! | [`config`] | Optional TOML file supplying CLI defaults |
//!
//! # Design Decisions
//!
//! ## One Pixel Layout, Everywhere
//!
//! A [`Raster`] is always `width × height × 4` contiguous RGBA8 bytes — the
//! same layout `image::RgbaImage` uses — so handoff to the codec and the
//! resampling kernel is a buffer move, not a conversion. Call sites go
//! through typed accessors instead of channel-index arithmetic; the
//! invariant is enforced at every constructor and re-checked defensively at
//! operator boundaries.
//!
//! ## Lanczos + Explicit Unsharp
//!
//! Resampling uses the `image` crate's Lanczos3 filter in both directions.
//! The post-resample unsharp mask is implemented explicitly (blur, residual,
//! gain, threshold) because the tier contract needs a fractional gain that
//! `imageops::unsharpen` does not expose. Tier parameters key off the
//! *target* width: icons get an aggressive pass, large output a subtle one.
//!
//! ## Errors Are Reported, Never Repaired
//!
//! An out-of-bounds crop is not clamped, a zero resample target is not
//! substituted, and a failed batch yields no partial results. Every error is
//! local to the invocation that raised it; there is no global error state
//! and no retry anywhere in the core.

pub mod batch;
pub mod codec;
pub mod config;
pub mod imaging;
pub mod raster;

pub use batch::{BatchError, ExportResult, ICON_SIZES, SizeSet, generate_set};
pub use codec::{CodecError, decode, decode_file, encode_png, write_png};
pub use imaging::{
    DEFAULT_MATTE_THRESHOLD, FitMode, ImagingError, SharpenProfile, crop, remove_near_white,
    resample,
};
pub use raster::{Px, Raster, Rectangle};
