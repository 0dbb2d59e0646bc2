// init_config.rs
// Handles loading the initial simulation configuration from brownian.toml

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Default configuration file name looked up in the working directory.
pub const INIT_CONFIG_PATH: &str = "brownian.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationSection>,
}

/// Every field is optional; omitted values fall back to the `SimConfig`
/// defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationSection {
    pub domain_width: Option<f32>,
    pub domain_height: Option<f32>,
    pub num_solvent_particles: Option<usize>,
    pub solvent_radius: Option<f32>,
    pub tracer_radius: Option<f32>,
    pub temperature: Option<f32>,
    pub seed: Option<u64>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file(INIT_CONFIG_PATH)
    }

    pub fn into_sim_config(self) -> SimConfig {
        let mut config = SimConfig::default();
        if let Some(sim) = self.simulation {
            if let Some(v) = sim.domain_width {
                config.domain_width = v;
            }
            if let Some(v) = sim.domain_height {
                config.domain_height = v;
            }
            if let Some(v) = sim.num_solvent_particles {
                config.num_solvent_particles = v;
            }
            if let Some(v) = sim.solvent_radius {
                config.solvent_radius = v;
            }
            if let Some(v) = sim.tracer_radius {
                config.tracer_radius = v;
            }
            if let Some(v) = sim.temperature {
                config.temperature = v;
            }
            if sim.seed.is_some() {
                config.seed = sim.seed;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn partial_file_merges_over_defaults() {
        let parsed: InitConfig =
            toml::from_str("[simulation]\ntemperature = 350.0\nseed = 9\n").unwrap();
        let cfg = parsed.into_sim_config();
        assert_eq!(cfg.temperature, 350.0);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.domain_width, config::DOMAIN_WIDTH);
        assert_eq!(cfg.num_solvent_particles, config::NUM_SOLVENT_PARTICLES);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let parsed: InitConfig = toml::from_str("").unwrap();
        let cfg = parsed.into_sim_config();
        assert_eq!(cfg.domain_width, config::DOMAIN_WIDTH);
        assert_eq!(cfg.temperature, config::DEFAULT_TEMPERATURE_K);
        assert_eq!(cfg.seed, None);
    }
}
