//! Brettel, Viénot & Mollon (1997) two half-plane projection.
//!
//! The dichromat's color gamut is modelled as two half-planes in LMS space
//! that meet along the neutral axis. Every color is projected onto one of
//! them, chosen by the side of a separation plane the color falls on.
//!
//! Accurate for all three deficiencies and the only correct choice for
//! tritanopia.

use crate::color_management::color_space::dot3;

use super::CvdSimulator;
use super::Deficiency;
use super::params::{self, Brettel1997Params};

/// Two-plane simulator for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brettel1997 {
    params: Brettel1997Params,
}

impl Brettel1997 {
    /// Simulator using the built-in calibration for `deficiency`.
    pub fn new(deficiency: Deficiency) -> Self {
        Self {
            params: *params::brettel1997(deficiency),
        }
    }

    /// Simulator using a caller-supplied calibration.
    pub fn with_params(params: Brettel1997Params) -> Self {
        Self { params }
    }

    /// The calibration in use.
    pub fn params(&self) -> &Brettel1997Params {
        &self.params
    }

    /// Which half-plane `rgb` projects onto: `1` or `2`.
    ///
    /// The boundary (`dot == 0`, which includes the whole neutral axis)
    /// belongs to plane 1.
    #[inline]
    pub fn plane_for(&self, rgb: [f32; 3]) -> u8 {
        if dot3(rgb, self.params.separation_plane_normal_in_rgb) >= 0.0 {
            1
        } else {
            2
        }
    }
}

impl CvdSimulator for Brettel1997 {
    #[inline]
    fn project(&self, rgb: [f32; 3]) -> [f32; 3] {
        let matrix = if self.plane_for(rgb) == 1 {
            &self.params.rgb_cvd_from_rgb_1
        } else {
            &self.params.rgb_cvd_from_rgb_2
        };
        matrix.apply(rgb)
    }
}
