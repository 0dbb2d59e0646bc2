// simulation/tracer.rs
// Tracer engine: ballistic stepping, wall reflection, trail recording, and
// collisions against the solvent ensemble

use rand::rngs::StdRng;
use rand::Rng;
use ultraviolet::Vec2;

use super::{boundary, collision};
use crate::body::{Particle, Trail};
use crate::config::{self, SimConfig};

/// The large particle whose path is recorded. Buffeted by the solvent via
/// equal-mass impulse exchange, an intentional simplification: a physical
/// tracer would be far heavier than the solvent particles.
pub struct Tracer {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) radius: f32,
    pub(crate) trail: Trail,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Tracer {
    pub fn new(config: &SimConfig, rng: &mut StdRng) -> Self {
        let pos = Vec2::new(
            rng.gen_range(config::SPAWN_MARGIN..=config.domain_width - config::SPAWN_MARGIN),
            rng.gen_range(config::SPAWN_MARGIN..=config.domain_height - config::SPAWN_MARGIN),
        );
        let vel = Vec2::new(
            rng.gen_range(-config::INITIAL_SPEED..=config::INITIAL_SPEED),
            rng.gen_range(-config::INITIAL_SPEED..=config::INITIAL_SPEED),
        );
        Self {
            pos,
            vel,
            radius: config.tracer_radius,
            trail: Trail::new(config::TRAIL_CAPACITY),
            width: config.domain_width,
            height: config.domain_height,
        }
    }

    /// Advance the tracer by one frame against this frame's solvent state:
    /// ballistic step scaled by `max(0.1, T / 298)`, wall reflection, trail
    /// recording, then impulse exchange with every solvent particle in
    /// contact. Writes solvent velocities; the tracer phase owns them.
    pub fn update(&mut self, temperature: f32, solvent: &mut [Particle], solvent_radius: f32) {
        let scale = (temperature / config::ROOM_TEMPERATURE_K).max(config::MIN_BALLISTIC_SCALE);
        self.pos += self.vel * scale;
        boundary::reflect_at_walls(
            &mut self.pos,
            &mut self.vel,
            self.radius,
            self.width,
            self.height,
        );
        self.trail.push(self.pos);

        let contact = self.radius + solvent_radius + config::CONTACT_EPSILON_PX;
        let contact_sq = contact * contact;
        for water in solvent.iter_mut() {
            let d = self.pos - water.pos;
            if d.mag_sq() >= contact_sq {
                continue;
            }
            if let Some(impulse) = collision::elastic_impulse(d, self.vel - water.vel) {
                self.vel -= impulse;
                water.vel += impulse;
            }
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        if radius > 0.0 {
            self.radius = radius;
        }
    }

    /// Oldest-first iteration over the recorded path, at most the trail
    /// capacity's most recent points.
    pub fn trajectory(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}
