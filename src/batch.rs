//! Batch export orchestration — one source raster, many target sizes.
//!
//! The orchestrator fans each entry of a [`SizeSet`] out over the
//! [rayon](https://docs.rs/rayon) worker pool, resamples independently
//! against a shared read-only borrow of the source, PNG-encodes each
//! result, and joins back into a vector that preserves the input order.
//!
//! Aggregation is all-or-nothing: if any member fails, the batch reports the
//! first failure in input order and no partial results survive. Callers that
//! want partial results should drive [`resample`] per size themselves.

use crate::codec::{self, CodecError};
use crate::imaging::{FitMode, ImagingError, resample};
use crate::raster::Raster;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stock icon-set edges, in export order.
pub const ICON_SIZES: [u32; 8] = [16, 19, 24, 32, 48, 128, 256, 512];

/// An ordered batch of target dimensions.
///
/// Duplicates are permitted and processed independently; order is the order
/// results come back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSet(Vec<(u32, u32)>);

impl SizeSet {
    pub fn new(pairs: Vec<(u32, u32)>) -> Self {
        Self(pairs)
    }

    /// Square targets from a list of edge lengths.
    pub fn squares(edges: &[u32]) -> Self {
        Self(edges.iter().map(|&e| (e, e)).collect())
    }

    pub fn pairs(&self) -> &[(u32, u32)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The stock icon set: `{16, 19, 24, 32, 48, 128, 256, 512}` squares.
impl Default for SizeSet {
    fn default() -> Self {
        Self::squares(&ICON_SIZES)
    }
}

/// One successfully exported variant: target size plus encoded PNG bytes.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// A batch failure, wrapping the first failing member in input order.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("resample to {width}x{height} failed: {source}")]
    Resample {
        width: u32,
        height: u32,
        source: ImagingError,
    },
    #[error("encoding the {width}x{height} variant failed: {source}")]
    Encode {
        width: u32,
        height: u32,
        source: CodecError,
    },
}

/// Resample `source` to every entry of `sizes` and encode each result as PNG.
///
/// Entries are independent: each worker reads the shared source immutably
/// and allocates its own output, so per-size work parallelizes freely while
/// the returned vector still matches `sizes` entry for entry.
pub fn generate_set(
    source: &Raster,
    sizes: &SizeSet,
    mode: FitMode,
) -> Result<Vec<ExportResult>, BatchError> {
    let outcomes: Vec<Result<ExportResult, BatchError>> = sizes
        .pairs()
        .par_iter()
        .map(|&(width, height)| {
            let raster = resample(source, width, height, mode).map_err(|source| {
                BatchError::Resample {
                    width,
                    height,
                    source,
                }
            })?;
            let png = codec::encode_png(&raster).map_err(|source| BatchError::Encode {
                width,
                height,
                source,
            })?;
            Ok(ExportResult { width, height, png })
        })
        .collect();

    // Join in input order so the reported failure is the first one a
    // sequential run would have hit, not whichever worker lost the race.
    let mut results = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        results.push(outcome?);
    }
    Ok(results)
}
