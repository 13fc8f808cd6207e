//! cvdsim core: color vision deficiency simulation for RGBA8 images.
//!
//! Simulates protanopia, deuteranopia and tritanopia on sRGB-encoded RGBA8
//! buffers, in place. No file I/O and no GPU dependencies.
//!
//! ```
//! use cvdsim_core::{Deficiency, simulate_cvd};
//!
//! let mut pixels = vec![255u8, 0, 0, 255, 0, 255, 0, 128];
//! simulate_cvd(Deficiency::Protan, 1.0, &mut pixels, 2, 1, 0)?;
//! assert_eq!(pixels[3], 255);
//! assert_eq!(pixels[7], 128);
//! # Ok::<(), cvdsim_core::SimulationError>(())
//! ```

pub mod color_management;
pub mod compare;
pub mod config;
pub mod error;
pub mod image;
pub mod simulation;

// Re-exports for convenience.
pub use color_management::{linear_to_srgb_u8, srgb_u8_to_linear};
pub use config::SimulationConfig;
pub use error::{SimulationError, SimulationResult};
pub use image::{Pixel, RgbaImageMut};
pub use simulation::{
    Algorithm, Brettel1997, CvdSimulator, Deficiency, Simulator, Vienot1999, simulate_cvd,
    simulate_cvd_brettel1997, simulate_cvd_vienot1999, simulate_cvd_with, simulate_image,
    simulate_image_with,
};

#[cfg(feature = "parallel")]
pub use simulation::{simulate_cvd_parallel, simulate_image_parallel};
