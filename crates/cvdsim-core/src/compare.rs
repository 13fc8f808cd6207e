//! Byte-level comparison of RGBA8 images against a reference.
//!
//! Used to check simulation output against golden images, where a difference
//! of one code value per channel is tolerated to absorb float rounding.

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};
use crate::image::CHANNELS;

/// Default per-channel tolerance for golden-image checks.
pub const DEFAULT_TOLERANCE: u8 = 1;

/// First channel found outside tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub x: usize,
    pub y: usize,
    /// 0–3 for R, G, B, A.
    pub channel: usize,
    pub expected: u8,
    pub actual: u8,
}

impl Mismatch {
    pub fn diff(&self) -> u8 {
        self.expected.abs_diff(self.actual)
    }
}

/// Result of comparing two images of the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Largest absolute difference over every channel, alpha included.
    pub max_diff: u8,
    /// Number of channel values whose difference exceeds the tolerance.
    pub mismatched: usize,
    /// Row-major first channel above tolerance.
    pub first_mismatch: Option<Mismatch>,
}

impl Comparison {
    pub fn passed(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// Compare two tightly packed RGBA8 buffers of the same `width`.
pub fn compare_rgba(
    expected: &[u8],
    actual: &[u8],
    width: usize,
    tolerance: u8,
) -> SimulationResult<Comparison> {
    if expected.len() != actual.len() {
        return Err(SimulationError::SizeMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    let row_bytes = width.checked_mul(CHANNELS).ok_or(SimulationError::GeometryOverflow {
        width,
        height: 0,
        bytes_per_row: 0,
    })?;
    let whole_rows = match row_bytes {
        0 => expected.is_empty(),
        n => expected.len() % n == 0,
    };
    if !whole_rows {
        return Err(SimulationError::SizeMismatch {
            expected: row_bytes,
            actual: expected.len(),
        });
    }

    let mut comparison = Comparison {
        max_diff: 0,
        mismatched: 0,
        first_mismatch: None,
    };

    for (i, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        let diff = e.abs_diff(a);
        comparison.max_diff = comparison.max_diff.max(diff);
        if diff > tolerance {
            comparison.mismatched += 1;
            if comparison.first_mismatch.is_none() {
                let pixel = i / CHANNELS;
                comparison.first_mismatch = Some(Mismatch {
                    x: pixel % width,
                    y: pixel / width,
                    channel: i % CHANNELS,
                    expected: e,
                    actual: a,
                });
            }
        }
    }

    Ok(comparison)
}
