// simulation/medium.rs
// Solvent ensemble engine: diffusive stepping, wall reflection, and
// pairwise elastic collisions

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use ultraviolet::Vec2;

use super::{boundary, collision};
use crate::body::{Particle, ParticleView};
use crate::config::{self, SimConfig};
use crate::error::Result;
use crate::physics::diffusion_coefficient;

/// The ensemble of solvent particles agitating the tracer.
pub struct Medium {
    width: f32,
    height: f32,
    radius: f32,
    particles: Vec<Particle>,
}

impl Medium {
    /// Spawn the ensemble with uniform-random positions inside the spawn
    /// margin and uniform-random velocities.
    pub fn new(config: &SimConfig, rng: &mut StdRng) -> Self {
        let mut particles = Vec::with_capacity(config.num_solvent_particles);
        for _ in 0..config.num_solvent_particles {
            let pos = Vec2::new(
                rng.gen_range(config::SPAWN_MARGIN..=config.domain_width - config::SPAWN_MARGIN),
                rng.gen_range(config::SPAWN_MARGIN..=config.domain_height - config::SPAWN_MARGIN),
            );
            let vel = Vec2::new(
                rng.gen_range(-config::INITIAL_SPEED..=config::INITIAL_SPEED),
                rng.gen_range(-config::INITIAL_SPEED..=config::INITIAL_SPEED),
            );
            particles.push(Particle::new(pos, vel));
        }
        Self {
            width: config.domain_width,
            height: config.domain_height,
            radius: config.solvent_radius,
            particles,
        }
    }

    /// Advance the ensemble by one frame at the given temperature and
    /// solvent viscosity.
    ///
    /// Each particle takes a drift step scaled by `(T - 273) / 10` plus an
    /// independent Gaussian positional jitter with standard deviation
    /// `sqrt(2 D)` per axis, then reflects off the walls; afterwards every
    /// colliding pair exchanges its normal velocity component.
    pub fn update(&mut self, temperature: f32, eta: f64, rng: &mut StdRng) -> Result<()> {
        let d = diffusion_coefficient(
            f64::from(temperature),
            config::SOLVENT_HYDRODYNAMIC_RADIUS_M,
            eta,
        )?;
        let step_std = (2.0 * d).sqrt() as f32;
        let drift = (temperature - config::DRIFT_REFERENCE_K) / config::DRIFT_SCALE_DIVISOR;

        for particle in &mut self.particles {
            let jx: f64 = StandardNormal.sample(rng);
            let jy: f64 = StandardNormal.sample(rng);
            let jitter = Vec2::new(jx as f32, jy as f32) * step_std;
            particle.pos += particle.vel * drift + jitter;
            boundary::reflect_at_walls(
                &mut particle.pos,
                &mut particle.vel,
                self.radius,
                self.width,
                self.height,
            );
        }

        collision::collide_pairs(&mut self.particles, self.radius);
        Ok(())
    }

    /// Read-only snapshot view for rendering.
    pub fn particles(&self) -> impl Iterator<Item = ParticleView> + '_ {
        let radius = self.radius;
        self.particles.iter().map(move |p| ParticleView { pos: p.pos, radius })
    }

    /// Tracer-phase write access to the solvent arena. The tracer phase
    /// writes velocities only; see the controller for the phase ordering.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        if radius > 0.0 {
            self.radius = radius;
        }
    }
}
