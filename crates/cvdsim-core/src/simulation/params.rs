//! Precomputed calibration data for both simulation models.
//!
//! # LMS model
//! Linear RGB → CIE XYZ uses the sRGB standard and CIE XYZ → LMS uses
//! Smith & Pokorny (1975), i.e. the cone model of Viénot, Brettel and Mollon
//! upgraded to sRGB primaries.
//!
//! # Brettel 1997 planes
//! The two half-planes are anchored on RGB white rather than equal-energy E.
//! This widens the set of colors that project inside the sRGB gamut. Each
//! projection is fused with the LMS↔RGB conversions into one RGB matrix, and
//! the separation-plane normal is already expressed in linear RGB, so no LMS
//! coordinates are needed at run time.
//!
//! Values carry five decimals. They are fixed data, not derived at run time.

use crate::color_management::ColorMatrix;

use super::Deficiency;

/// Brettel 1997 parameters for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brettel1997Params {
    /// `rgb_from_lms · projection_1 · lms_from_rgb`.
    pub rgb_cvd_from_rgb_1: ColorMatrix,
    /// `rgb_from_lms · projection_2 · lms_from_rgb`.
    pub rgb_cvd_from_rgb_2: ColorMatrix,
    /// `normal_in_lms · lms_from_rgb`. A non-negative dot product selects plane 1.
    pub separation_plane_normal_in_rgb: [f32; 3],
}

pub static BRETTEL_PROTAN: Brettel1997Params = Brettel1997Params {
    rgb_cvd_from_rgb_1: ColorMatrix::from_rows([
        0.14510, 1.20165, -0.34675, //
        0.10447, 0.85316, 0.04237, //
        0.00429, -0.00603, 1.00174,
    ]),
    rgb_cvd_from_rgb_2: ColorMatrix::from_rows([
        0.14115, 1.16782, -0.30897, //
        0.10495, 0.85730, 0.03776, //
        0.00431, -0.00586, 1.00155,
    ]),
    separation_plane_normal_in_rgb: [0.00048, 0.00416, -0.00464],
};

pub static BRETTEL_DEUTAN: Brettel1997Params = Brettel1997Params {
    rgb_cvd_from_rgb_1: ColorMatrix::from_rows([
        0.36198, 0.86755, -0.22953, //
        0.26099, 0.64512, 0.09389, //
        -0.01975, 0.02686, 0.99289,
    ]),
    rgb_cvd_from_rgb_2: ColorMatrix::from_rows([
        0.37009, 0.88540, -0.25549, //
        0.25767, 0.63782, 0.10451, //
        -0.01950, 0.02741, 0.99209,
    ]),
    separation_plane_normal_in_rgb: [-0.00293, -0.00645, 0.00938],
};

pub static BRETTEL_TRITAN: Brettel1997Params = Brettel1997Params {
    rgb_cvd_from_rgb_1: ColorMatrix::from_rows([
        1.01354, 0.14268, -0.15622, //
        -0.01181, 0.87561, 0.13619, //
        0.07707, 0.81208, 0.11085,
    ]),
    rgb_cvd_from_rgb_2: ColorMatrix::from_rows([
        0.93337, 0.19999, -0.13336, //
        0.05809, 0.82565, 0.11626, //
        -0.37923, 1.13825, 0.24098,
    ]),
    separation_plane_normal_in_rgb: [0.03960, -0.02831, -0.01129],
};

// Viénot 1999 has a single projection plane, so the whole pipeline collapses
// to one linear RGB matrix per deficiency.

pub static VIENOT_PROTAN: ColorMatrix = ColorMatrix::from_rows([
    0.10889, 0.89111, -0.00000, //
    0.10889, 0.89111, 0.00000, //
    0.00447, -0.00447, 1.00000,
]);

pub static VIENOT_DEUTAN: ColorMatrix = ColorMatrix::from_rows([
    0.29031, 0.70969, -0.00000, //
    0.29031, 0.70969, -0.00000, //
    -0.02197, 0.02197, 1.00000,
]);

/// Not accurate for tritanopia; kept so the model can be forced explicitly.
pub static VIENOT_TRITAN: ColorMatrix = ColorMatrix::from_rows([
    1.00000, 0.15236, -0.15236, //
    0.00000, 0.86717, 0.13283, //
    -0.00000, 0.86717, 0.13283,
]);

/// Brettel 1997 parameters for `deficiency`.
pub fn brettel1997(deficiency: Deficiency) -> &'static Brettel1997Params {
    match deficiency {
        Deficiency::Protan => &BRETTEL_PROTAN,
        Deficiency::Deutan => &BRETTEL_DEUTAN,
        Deficiency::Tritan => &BRETTEL_TRITAN,
    }
}

/// Viénot 1999 matrix for `deficiency`.
pub fn vienot1999(deficiency: Deficiency) -> &'static ColorMatrix {
    match deficiency {
        Deficiency::Protan => &VIENOT_PROTAN,
        Deficiency::Deutan => &VIENOT_DEUTAN,
        Deficiency::Tritan => &VIENOT_TRITAN,
    }
}
