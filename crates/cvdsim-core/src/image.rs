//! Borrowed view over a caller-owned RGBA8 buffer.
//!
//! The simulators never allocate image storage. They walk a strided,
//! row-major byte region that the caller owns and rewrite it in place.

use crate::error::{SimulationError, SimulationResult};

/// Bytes per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

/// One RGBA8 pixel. Channels 0–2 are sRGB-encoded color, channel 3 is alpha.
pub type Pixel = [u8; CHANNELS];

/// Mutable, bounds-checked view over an RGBA8 image with an arbitrary row stride.
///
/// Geometry is validated once in [`RgbaImageMut::new`]; every later access is
/// guaranteed to stay inside the borrowed slice. Bytes between `width * 4`
/// and `bytes_per_row` in each row are padding and are never touched.
#[derive(Debug)]
pub struct RgbaImageMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
}

impl<'a> RgbaImageMut<'a> {
    /// Wrap `data` as a `width × height` RGBA8 image.
    ///
    /// `bytes_per_row == 0` selects the tight stride `width * 4`. The buffer
    /// must hold at least `(height - 1) * bytes_per_row + width * 4` bytes;
    /// trailing padding after the last row is optional.
    pub fn new(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        bytes_per_row: usize,
    ) -> SimulationResult<Self> {
        let overflow = || SimulationError::GeometryOverflow {
            width,
            height,
            bytes_per_row,
        };

        let row_bytes = width.checked_mul(CHANNELS).ok_or_else(overflow)?;
        let bytes_per_row = if bytes_per_row == 0 {
            row_bytes
        } else {
            bytes_per_row
        };

        if bytes_per_row < row_bytes {
            return Err(SimulationError::StrideTooSmall {
                bytes_per_row,
                min: row_bytes,
            });
        }

        let required = if height == 0 || row_bytes == 0 {
            0
        } else {
            (height - 1)
                .checked_mul(bytes_per_row)
                .and_then(|v| v.checked_add(row_bytes))
                .ok_or_else(overflow)?
        };

        if data.len() < required {
            return Err(SimulationError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            bytes_per_row,
        })
    }

    /// Wrap a tightly packed buffer (`bytes_per_row == width * 4`).
    pub fn tight(data: &'a mut [u8], width: usize, height: usize) -> SimulationResult<Self> {
        Self::new(data, width, height, 0)
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolved row stride in bytes (never the `0` sentinel unless width is 0).
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Meaningful bytes per row (`width * 4`).
    pub fn row_bytes(&self) -> usize {
        self.width * CHANNELS
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether the image covers no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y * self.bytes_per_row + x * CHANNELS;
        let px = &self.data[start..start + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Rows of pixels, top to bottom. Padding bytes are excluded.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> + '_ {
        let row_bytes = self.row_bytes();
        let rows = if row_bytes == 0 { 0 } else { self.height };
        self.data
            .chunks_mut(self.bytes_per_row.max(1))
            .take(rows)
            .map(move |row| bytemuck::cast_slice_mut::<u8, Pixel>(&mut row[..row_bytes]))
    }

    /// Rows of pixels as independent rayon work items.
    #[cfg(feature = "parallel")]
    pub fn par_rows_mut(
        &mut self,
    ) -> impl rayon::iter::IndexedParallelIterator<Item = &mut [Pixel]> + '_ {
        use rayon::prelude::*;

        let row_bytes = self.row_bytes();
        let rows = if row_bytes == 0 { 0 } else { self.height };
        self.data
            .par_chunks_mut(self.bytes_per_row.max(1))
            .take(rows)
            .map(move |row| bytemuck::cast_slice_mut::<u8, Pixel>(&mut row[..row_bytes]))
    }
}
