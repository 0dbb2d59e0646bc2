//! Physical constants and unit conversions.
//!
//! Simulation space is measured in pixels; the quantities fed to the
//! Stokes-Einstein relation are SI (kelvin, meters, pascal-seconds).

/// Boltzmann constant in J/K.
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;
/// Offset between the Celsius and Kelvin scales.
pub const ZERO_CELSIUS_K: f64 = 273.15;
/// Physical length of one simulation pixel in meters.
/// Chosen so the default 8 px tracer corresponds to a 1 micron particle.
pub const METERS_PER_PIXEL: f64 = 1.25e-7;
