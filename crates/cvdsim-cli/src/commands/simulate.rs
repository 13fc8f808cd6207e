//! Single-image simulation command

use anyhow::Result;

use crate::SimulateArgs;
use crate::config::{AppConfig, ConfigFile, Overrides};

pub fn run(args: SimulateArgs) -> Result<()> {
    let file = args.config.as_deref().map(ConfigFile::load).transpose()?;
    let overrides = Overrides {
        deficiency: args.deficiency,
        severity: args.severity,
        algorithm: args.algorithm,
    };
    let config = AppConfig::default().resolve(file.as_ref(), &overrides)?;

    let mut image = super::load_image(&args.input)?;
    super::simulate_in_place(&config, &mut image)?;
    super::save_image(&args.output, &image)?;

    tracing::info!("wrote {}", args.output.display());
    Ok(())
}
