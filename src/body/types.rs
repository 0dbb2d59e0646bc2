// body/types.rs
// Plain data aggregates for solvent particles

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

/// One solvent particle. The contact radius is shared across the ensemble
/// and lives on the `Medium`, not here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// Read-only render view of a solvent particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
}
