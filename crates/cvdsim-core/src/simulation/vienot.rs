//! Viénot, Brettel & Mollon (1999) single-plane projection.
//!
//! With one projection plane the whole LMS round trip reduces to a single
//! 3x3 matrix in linear RGB, so there is no per-pixel branch. Cheaper than
//! [`Brettel1997`](super::Brettel1997) and equally good for protanopia and
//! deuteranopia, but it does not hold for tritanopia.

use crate::color_management::ColorMatrix;

use super::CvdSimulator;
use super::Deficiency;
use super::params;

/// Single-matrix simulator for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vienot1999 {
    matrix: ColorMatrix,
}

impl Vienot1999 {
    /// Simulator using the built-in matrix for `deficiency`.
    ///
    /// `Deficiency::Tritan` is accepted but inaccurate.
    pub fn new(deficiency: Deficiency) -> Self {
        Self {
            matrix: *params::vienot1999(deficiency),
        }
    }

    /// Simulator using a caller-supplied matrix.
    pub fn with_matrix(matrix: ColorMatrix) -> Self {
        Self { matrix }
    }

    /// The matrix in use.
    pub fn matrix(&self) -> &ColorMatrix {
        &self.matrix
    }
}

impl CvdSimulator for Vienot1999 {
    #[inline]
    fn project(&self, rgb: [f32; 3]) -> [f32; 3] {
        self.matrix.apply(rgb)
    }
}
