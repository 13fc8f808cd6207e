//! Runtime configuration for the command line tool.
//!
//! Settings are layered: command line flags win over the JSON config file,
//! which wins over the environment, which wins over built-in defaults.

use std::path::Path;

use anyhow::{Context, Result, bail};
use cvdsim_core::{Algorithm, Deficiency, SimulationConfig};
use serde::Deserialize;

/// Default severity when nothing else sets one.
const DEFAULT_SEVERITY: f32 = 1.0;

/// Environment-derived defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Severity used when neither the file nor the command line sets one.
    pub severity: f32,
    /// Model used when neither the file nor the command line sets one.
    pub algorithm: Algorithm,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            severity: std::env::var("CVDSIM_SEVERITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SEVERITY),
            algorithm: std::env::var("CVDSIM_ALGORITHM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Contents of a `--config` file. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub deficiency: Option<Deficiency>,
    pub severity: Option<f32>,
    pub algorithm: Option<Algorithm>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Values given directly on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub deficiency: Option<Deficiency>,
    pub severity: Option<f32>,
    pub algorithm: Option<Algorithm>,
}

impl AppConfig {
    /// Merge the layers into one simulation request.
    pub fn resolve(&self, file: Option<&ConfigFile>, cli: &Overrides) -> Result<SimulationConfig> {
        let file = file.copied().unwrap_or_default();
        let Some(deficiency) = cli.deficiency.or(file.deficiency) else {
            bail!("No deficiency given: pass --deficiency or set it in the config file");
        };
        Ok(SimulationConfig {
            deficiency,
            severity: cli.severity.or(file.severity).unwrap_or(self.severity),
            algorithm: cli.algorithm.or(file.algorithm).unwrap_or(self.algorithm),
        })
    }
}
