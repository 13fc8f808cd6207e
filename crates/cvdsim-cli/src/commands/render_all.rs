//! Render the full reference set for one input image

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cvdsim_core::{Algorithm, Deficiency, SimulationConfig};
use image::RgbaImage;

use crate::RenderAllArgs;

/// Severities rendered for every model and deficiency.
pub const REFERENCE_SEVERITIES: [f32; 2] = [1.0, 0.55];

/// Output file for one configuration, e.g. `vienot1999_protan_1.0.png`.
pub fn reference_path(dir: &Path, config: &SimulationConfig) -> PathBuf {
    dir.join(format!(
        "{}_{}_{}.png",
        config.algorithm,
        config.deficiency,
        super::severity_label(config.severity)
    ))
}

/// Every configuration in the reference set, explicit models first.
pub fn reference_configs() -> Vec<SimulationConfig> {
    let mut configs = Vec::new();
    for algorithm in [Algorithm::Brettel1997, Algorithm::Vienot1999, Algorithm::Auto] {
        for &deficiency in Deficiency::all() {
            for severity in REFERENCE_SEVERITIES {
                configs.push(SimulationConfig {
                    deficiency,
                    severity,
                    algorithm,
                });
            }
        }
    }
    configs
}

pub fn run(args: RenderAllArgs) -> Result<()> {
    let source = super::load_image(&args.input)?;
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create: {}", args.output_dir.display()))?;

    let configs = reference_configs();
    for config in &configs {
        let mut image: RgbaImage = source.clone();
        super::simulate_in_place(config, &mut image)?;
        let path = reference_path(&args.output_dir, config);
        super::save_image(&path, &image)?;
        tracing::debug!("wrote {}", path.display());
    }

    tracing::info!("rendered {} images into {}", configs.len(), args.output_dir.display());
    Ok(())
}
