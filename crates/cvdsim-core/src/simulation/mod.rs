//! Color vision deficiency simulation: models, calibration data, and dispatch.
//!
//! Two models are available:
//!
//! - [`Brettel1997`]: two half-plane projection, accurate for every deficiency.
//! - [`Vienot1999`]: one fixed matrix, slightly cheaper, wrong for tritanopia.
//!
//! [`simulate_cvd`] picks between them with [`Algorithm::Auto`]: Brettel for
//! tritanopia, Viénot otherwise.

pub mod brettel;
pub mod params;
pub mod severity;
pub mod vienot;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_management::transfer::{decode_rgb, encode_rgb_into};
use crate::error::{SimulationError, SimulationResult};
use crate::image::{Pixel, RgbaImageMut};

pub use brettel::Brettel1997;
pub use params::Brettel1997Params;
pub use vienot::Vienot1999;

/// The three kinds of dichromacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Missing or defective L cones (red).
    #[serde(alias = "protanopia")]
    Protan,
    /// Missing or defective M cones (green).
    #[serde(alias = "deuteranopia")]
    Deutan,
    /// Missing or defective S cones (blue).
    #[serde(alias = "tritanopia")]
    Tritan,
}

impl Deficiency {
    /// Human-readable name of the full dichromacy.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Protan => "Protanopia",
            Self::Deutan => "Deuteranopia",
            Self::Tritan => "Tritanopia",
        }
    }

    /// Short lowercase identifier, also used in file names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protan => "protan",
            Self::Deutan => "deutan",
            Self::Tritan => "tritan",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [Deficiency; 3] = [Deficiency::Protan, Deficiency::Deutan, Deficiency::Tritan];
        &ALL
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Deficiency {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protan" | "protanopia" => Ok(Self::Protan),
            "deutan" | "deuteranopia" => Ok(Self::Deutan),
            "tritan" | "tritanopia" => Ok(Self::Tritan),
            _ => Err(SimulationError::UnknownDeficiency(s.to_string())),
        }
    }
}

/// Which simulation model to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Brettel 1997 for tritanopia, Viénot 1999 otherwise.
    #[default]
    Auto,
    /// Always use the two-plane model.
    #[serde(alias = "brettel")]
    Brettel1997,
    /// Always use the single-matrix model.
    #[serde(alias = "vienot")]
    Vienot1999,
}

impl Algorithm {
    /// Resolve [`Algorithm::Auto`] to a concrete model for `deficiency`.
    ///
    /// Viénot 1999 is not accurate for tritanopia. For the other two kinds
    /// both models are equally good and Viénot is cheaper.
    pub const fn resolve(self, deficiency: Deficiency) -> Self {
        match (self, deficiency) {
            (Self::Auto, Deficiency::Tritan) => Self::Brettel1997,
            (Self::Auto, _) => Self::Vienot1999,
            (other, _) => other,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Brettel1997 => "brettel1997",
            Self::Vienot1999 => "vienot1999",
        }
    }

    /// The two concrete models.
    pub fn concrete() -> &'static [Self] {
        const CONCRETE: [Algorithm; 2] = [Algorithm::Brettel1997, Algorithm::Vienot1999];
        &CONCRETE
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "brettel" | "brettel1997" => Ok(Self::Brettel1997),
            "vienot" | "vienot1999" | "viénot" | "viénot1999" => Ok(Self::Vienot1999),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A per-pixel dichromacy model operating in linear RGB.
pub trait CvdSimulator: Send + Sync {
    /// Project a linear RGB color onto the dichromat's gamut (severity 1).
    fn project(&self, rgb: [f32; 3]) -> [f32; 3];

    /// Simulate at `severity`, blending with the input color.
    #[inline]
    fn simulate_linear(&self, rgb: [f32; 3], severity: f32) -> [f32; 3] {
        severity::blend(self.project(rgb), rgb, severity)
    }

    /// Simulate one sRGB-encoded RGBA pixel in place. Alpha is untouched.
    #[inline]
    fn simulate_pixel(&self, pixel: &mut Pixel, severity: f32) {
        let rgb = decode_rgb(pixel);
        encode_rgb_into(self.simulate_linear(rgb, severity), pixel);
    }

    /// Simulate every pixel of `image` in place, row by row.
    fn apply(&self, image: &mut RgbaImageMut<'_>, severity: f32) {
        for row in image.rows_mut() {
            for pixel in row.iter_mut() {
                self.simulate_pixel(pixel, severity);
            }
        }
    }

    /// Like [`CvdSimulator::apply`], with rows spread over the rayon pool.
    ///
    /// Pixels are independent, so the output is byte-identical.
    #[cfg(feature = "parallel")]
    fn apply_parallel(&self, image: &mut RgbaImageMut<'_>, severity: f32) {
        use rayon::prelude::*;

        image.par_rows_mut().for_each(|row| {
            for pixel in row.iter_mut() {
                self.simulate_pixel(pixel, severity);
            }
        });
    }
}

/// A concrete model selected at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Simulator {
    Brettel1997(Brettel1997),
    Vienot1999(Vienot1999),
}

impl Simulator {
    /// Build the simulator for `algorithm`, resolving [`Algorithm::Auto`] first.
    pub fn new(algorithm: Algorithm, deficiency: Deficiency) -> Self {
        match algorithm.resolve(deficiency) {
            Algorithm::Brettel1997 => Self::Brettel1997(Brettel1997::new(deficiency)),
            Algorithm::Vienot1999 => Self::Vienot1999(Vienot1999::new(deficiency)),
            Algorithm::Auto => unreachable!("Algorithm::resolve never returns Auto"),
        }
    }

    /// The concrete algorithm this simulator runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Brettel1997(_) => Algorithm::Brettel1997,
            Self::Vienot1999(_) => Algorithm::Vienot1999,
        }
    }
}

impl CvdSimulator for Simulator {
    #[inline]
    fn project(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Brettel1997(s) => s.project(rgb),
            Self::Vienot1999(s) => s.project(rgb),
        }
    }
}

fn prepare(
    algorithm: Algorithm,
    deficiency: Deficiency,
    severity: f32,
    image: &RgbaImageMut<'_>,
) -> Simulator {
    let simulator = Simulator::new(algorithm, deficiency);
    if !severity::is_nominal(severity) {
        tracing::warn!("severity {severity} is outside [0, 1]; the blend will extrapolate");
    }
    tracing::debug!(
        "simulating {deficiency} with {} (requested {algorithm}), severity {severity}, {}x{} stride {}",
        simulator.algorithm(),
        image.width(),
        image.height(),
        image.bytes_per_row(),
    );
    simulator
}

/// Simulate `deficiency` on a validated image with an explicit algorithm.
pub fn simulate_image_with(
    algorithm: Algorithm,
    deficiency: Deficiency,
    severity: f32,
    image: &mut RgbaImageMut<'_>,
) {
    let simulator = prepare(algorithm, deficiency, severity, image);
    simulator.apply(image, severity);
}

/// Simulate `deficiency` on a validated image, picking the model automatically.
pub fn simulate_image(deficiency: Deficiency, severity: f32, image: &mut RgbaImageMut<'_>) {
    simulate_image_with(Algorithm::Auto, deficiency, severity, image);
}

/// Parallel counterpart of [`simulate_image_with`].
#[cfg(feature = "parallel")]
pub fn simulate_image_parallel(
    algorithm: Algorithm,
    deficiency: Deficiency,
    severity: f32,
    image: &mut RgbaImageMut<'_>,
) {
    let simulator = prepare(algorithm, deficiency, severity, image);
    simulator.apply_parallel(image, severity);
}

/// Simulate a color vision deficiency on an sRGB RGBA8 buffer, in place.
///
/// Uses Brettel 1997 for tritanopia and Viénot 1999 for protanopia and
/// deuteranopia.
///
/// - `severity` should be in `[0, 1]`; it blends linearly with the original.
///   Values outside the range extrapolate.
/// - `bytes_per_row == 0` means `width * 4`.
///
/// Fails without touching the buffer if it is too small for the geometry.
pub fn simulate_cvd(
    deficiency: Deficiency,
    severity: f32,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
) -> SimulationResult<()> {
    simulate_cvd_with(
        Algorithm::Auto,
        deficiency,
        severity,
        buffer,
        width,
        height,
        bytes_per_row,
    )
}

/// [`simulate_cvd`] forced to the Brettel 1997 model.
pub fn simulate_cvd_brettel1997(
    deficiency: Deficiency,
    severity: f32,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
) -> SimulationResult<()> {
    simulate_cvd_with(
        Algorithm::Brettel1997,
        deficiency,
        severity,
        buffer,
        width,
        height,
        bytes_per_row,
    )
}

/// [`simulate_cvd`] forced to the Viénot 1999 model.
///
/// Not accurate for [`Deficiency::Tritan`].
pub fn simulate_cvd_vienot1999(
    deficiency: Deficiency,
    severity: f32,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
) -> SimulationResult<()> {
    simulate_cvd_with(
        Algorithm::Vienot1999,
        deficiency,
        severity,
        buffer,
        width,
        height,
        bytes_per_row,
    )
}

/// [`simulate_cvd`] with an explicit [`Algorithm`].
pub fn simulate_cvd_with(
    algorithm: Algorithm,
    deficiency: Deficiency,
    severity: f32,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
) -> SimulationResult<()> {
    let mut image = RgbaImageMut::new(buffer, width, height, bytes_per_row)?;
    simulate_image_with(algorithm, deficiency, severity, &mut image);
    Ok(())
}

/// [`simulate_cvd`] with rows processed on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn simulate_cvd_parallel(
    deficiency: Deficiency,
    severity: f32,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
) -> SimulationResult<()> {
    let mut image = RgbaImageMut::new(buffer, width, height, bytes_per_row)?;
    simulate_image_parallel(Algorithm::Auto, deficiency, severity, &mut image);
    Ok(())
}
