// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

// ====================
// Domain Parameters
// ====================
/// Simulation domain width in pixels.
pub const DOMAIN_WIDTH: f32 = 800.0;
/// Simulation domain height in pixels.
pub const DOMAIN_HEIGHT: f32 = 600.0;
/// Margin kept free of particles when spawning.
pub const SPAWN_MARGIN: f32 = 50.0;

// ====================
// Solvent Parameters
// ====================
pub const NUM_SOLVENT_PARTICLES: usize = 200;
/// On-screen solvent particle radius in pixels, used for contact tests.
pub const SOLVENT_RADIUS_PX: f32 = 3.0;
/// Hydrodynamic radius fed to the Stokes-Einstein relation, in meters.
/// Independent of the pixel radius above.
pub const SOLVENT_HYDRODYNAMIC_RADIUS_M: f64 = 1.0e-6;
/// Initial velocity components are drawn uniformly from [-INITIAL_SPEED, INITIAL_SPEED].
pub const INITIAL_SPEED: f32 = 1.0;

// ====================
// Tracer Parameters
// ====================
pub const TRACER_RADIUS_PX: f32 = 8.0;
/// Maximum number of recorded trail points; oldest are evicted first.
pub const TRAIL_CAPACITY: usize = 10_000;
/// Extra contact slack for tracer-solvent collisions, in pixels.
pub const CONTACT_EPSILON_PX: f32 = 2.0;
/// Reference temperature for the tracer's ballistic scale factor.
pub const ROOM_TEMPERATURE_K: f32 = 298.0;
/// Floor on the ballistic scale factor; guards degenerate motion at low T.
pub const MIN_BALLISTIC_SCALE: f32 = 0.1;

// ====================
// Temperature
// ====================
pub const DEFAULT_TEMPERATURE_K: f32 = 300.0;
/// Lower bound of the runtime-adjustable temperature range.
pub const MIN_TEMPERATURE_K: f32 = 1.0;
/// Upper bound of the runtime-adjustable temperature range.
pub const MAX_TEMPERATURE_K: f32 = 1000.0;
/// Solvent velocity drift per frame is scaled by (T - reference) / divisor.
pub const DRIFT_REFERENCE_K: f32 = 273.0;
pub const DRIFT_SCALE_DIVISOR: f32 = 10.0;

/// Runtime simulation parameters, settable from an init file or by the
/// embedding UI before construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub domain_width: f32,
    pub domain_height: f32,
    pub num_solvent_particles: usize,
    pub solvent_radius: f32,
    pub tracer_radius: f32,
    /// Initial temperature in kelvin.
    pub temperature: f32,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            domain_width: DOMAIN_WIDTH,
            domain_height: DOMAIN_HEIGHT,
            num_solvent_particles: NUM_SOLVENT_PARTICLES,
            solvent_radius: SOLVENT_RADIUS_PX,
            tracer_radius: TRACER_RADIUS_PX,
            temperature: DEFAULT_TEMPERATURE_K,
            seed: None,
        }
    }
}
