//! CLI command implementations

pub mod compare;
pub mod render_all;
pub mod simulate;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use cvdsim_core::{RgbaImageMut, SimulationConfig};
use image::RgbaImage;

use crate::image_loader;

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    image_loader::load_rgba8(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbaImage) -> Result<()> {
    image_loader::save_rgba8(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Run one configuration over `image` in place and log how long it took.
pub fn simulate_in_place(config: &SimulationConfig, image: &mut RgbaImage) -> Result<()> {
    let (width, height) = image.dimensions();
    let mut view = RgbaImageMut::tight(image, width as usize, height as usize)
        .context("Image buffer does not match its dimensions")?;

    let start = Instant::now();
    #[cfg(feature = "parallel")]
    config.apply_image_parallel(&mut view);
    #[cfg(not(feature = "parallel"))]
    config.apply_image(&mut view);
    let elapsed = start.elapsed();

    tracing::info!(
        "{} {} severity {} on {width}x{height}: {:.2} ms",
        config.resolved_algorithm(),
        config.deficiency,
        config.severity,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

/// File-name form of a severity: `1.0`, `0.55`.
pub fn severity_label(severity: f32) -> String {
    if severity.fract() == 0.0 {
        format!("{severity:.1}")
    } else {
        format!("{severity}")
    }
}
