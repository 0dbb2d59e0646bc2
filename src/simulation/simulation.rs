// simulation/simulation.rs
// Contains the Simulation struct: temperature ownership, per-frame phase
// ordering, and read-only snapshots for rendering and measurement

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use ultraviolet::Vec2;

use super::medium::Medium;
use super::tracer::Tracer;
use crate::body::ParticleView;
use crate::config::{self, SimConfig};
use crate::error::{DomainError, Result};
use crate::physics::{diffusion_coefficient, mean_squared_displacement, water_viscosity};
use crate::units::METERS_PER_PIXEL;

/// One diffusion measurement: elapsed wall-clock time, the Stokes-Einstein
/// coefficient at the current temperature and tracer radius, and the mean
/// squared displacement of the recorded trail.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DiffusionRecord {
    pub elapsed_secs: f64,
    pub temperature: f32,
    pub tracer_radius: f32,
    pub diffusion_coefficient: f64,
    pub mean_squared_displacement: f64,
}

/// The whole simulation: temperature state, the solvent medium, the tracer,
/// and the single seedable RNG driving both. Constructed once and stepped
/// from exactly one control thread per frame.
pub struct Simulation {
    pub frame: usize,
    temperature: f32,
    medium: Medium,
    tracer: Tracer,
    rng: StdRng,
    started: Instant,
}

impl Simulation {
    /// Build the medium, then the tracer, from the config's seed. The spawn
    /// order is fixed so a given seed reproduces identical initial states.
    pub fn new(config: &SimConfig) -> Result<Self> {
        if config.temperature <= 0.0 {
            return Err(DomainError::NonPositiveTemperature {
                kelvin: f64::from(config.temperature),
            });
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let medium = Medium::new(config, &mut rng);
        let tracer = Tracer::new(config, &mut rng);
        Ok(Self {
            frame: 0,
            temperature: config.temperature,
            medium,
            tracer,
            rng,
            started: Instant::now(),
        })
    }

    /// Advance one frame: medium phase, then tracer phase, in that fixed
    /// order. The medium phase writes solvent state; the tracer phase
    /// writes tracer state and solvent velocities.
    pub fn step(&mut self) -> Result<()> {
        let eta = water_viscosity(f64::from(self.temperature))?;
        self.medium.update(self.temperature, eta, &mut self.rng)?;
        let solvent_radius = self.medium.radius();
        self.tracer
            .update(self.temperature, self.medium.particles_mut(), solvent_radius);
        self.frame += 1;
        Ok(())
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Set the temperature, clamped to the documented UI range. The engines
    /// themselves accept any positive temperature.
    pub fn set_temperature(&mut self, kelvin: f32) {
        self.temperature = kelvin.clamp(config::MIN_TEMPERATURE_K, config::MAX_TEMPERATURE_K);
    }

    pub fn set_tracer_radius(&mut self, radius: f32) {
        self.tracer.set_radius(radius);
    }

    pub fn set_solvent_radius(&mut self, radius: f32) {
        self.medium.set_radius(radius);
    }

    /// Read-only snapshot of the solvent ensemble.
    pub fn particles(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.medium.particles()
    }

    pub fn solvent_radius(&self) -> f32 {
        self.medium.radius()
    }

    pub fn tracer_position(&self) -> Vec2 {
        self.tracer.position()
    }

    pub fn tracer_radius(&self) -> f32 {
        self.tracer.radius()
    }

    /// Oldest-first iteration over the tracer's recorded path.
    pub fn trajectory(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.tracer.trajectory()
    }

    /// Clear the trail and restart the elapsed-time counter. Particle
    /// positions and velocities are kept as they are.
    pub fn reset(&mut self) {
        self.tracer.clear_trail();
        self.frame = 0;
        self.started = Instant::now();
    }

    /// Report the current diffusion statistics. The tracer's pixel radius
    /// is converted to meters for the Stokes-Einstein input.
    pub fn record(&self) -> Result<DiffusionRecord> {
        let kelvin = f64::from(self.temperature);
        let eta = water_viscosity(kelvin)?;
        let radius_m = f64::from(self.tracer.radius()) * METERS_PER_PIXEL;
        let d = diffusion_coefficient(kelvin, radius_m, eta)?;
        let msd = mean_squared_displacement(self.tracer.trajectory());
        Ok(DiffusionRecord {
            elapsed_secs: self.started.elapsed().as_secs_f64(),
            temperature: self.temperature,
            tracer_radius: self.tracer.radius(),
            diffusion_coefficient: d,
            mean_squared_displacement: msd,
        })
    }
}
