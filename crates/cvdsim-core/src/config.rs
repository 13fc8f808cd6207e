//! Serializable simulation settings.
//!
//! `SimulationConfig` is the whole configuration surface of the core: which
//! deficiency, how strongly, and which model. Color space and pixel format
//! are fixed (sRGB, RGBA8).

use serde::{Deserialize, Serialize};

use crate::error::SimulationResult;
use crate::image::RgbaImageMut;
use crate::simulation::{self, Algorithm, Deficiency};

/// One simulation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Which dichromacy to simulate.
    pub deficiency: Deficiency,
    /// Blend factor: 0.0 = unchanged, 1.0 = full simulation.
    #[serde(default = "SimulationConfig::default_severity")]
    pub severity: f32,
    /// Model selection; `auto` applies the built-in dispatch policy.
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    /// Full-strength simulation of `deficiency` with automatic model selection.
    pub fn new(deficiency: Deficiency) -> Self {
        Self {
            deficiency,
            severity: Self::default_severity(),
            algorithm: Algorithm::Auto,
        }
    }

    /// Default for serde deserialization when the field is absent.
    fn default_severity() -> f32 {
        1.0
    }

    /// The model that will actually run.
    pub fn resolved_algorithm(&self) -> Algorithm {
        self.algorithm.resolve(self.deficiency)
    }

    /// Run this configuration on a raw RGBA8 buffer.
    pub fn apply(
        &self,
        buffer: &mut [u8],
        width: usize,
        height: usize,
        bytes_per_row: usize,
    ) -> SimulationResult<()> {
        simulation::simulate_cvd_with(
            self.algorithm,
            self.deficiency,
            self.severity,
            buffer,
            width,
            height,
            bytes_per_row,
        )
    }

    /// Run this configuration on a validated image view.
    pub fn apply_image(&self, image: &mut RgbaImageMut<'_>) {
        simulation::simulate_image_with(self.algorithm, self.deficiency, self.severity, image);
    }

    /// [`SimulationConfig::apply_image`] with rows spread over the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn apply_image_parallel(&self, image: &mut RgbaImageMut<'_>) {
        simulation::simulate_image_parallel(self.algorithm, self.deficiency, self.severity, image);
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Deficiency::Protan)
    }
}
