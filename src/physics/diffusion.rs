// physics/diffusion.rs
// Stokes-Einstein diffusion coefficient and mean squared displacement

use std::f64::consts::PI;

use ultraviolet::Vec2;

use crate::error::{DomainError, Result};
use crate::units::BOLTZMANN_CONSTANT;

/// Stokes-Einstein diffusion coefficient `D = k_B T / (6 pi eta r)`,
/// in m^2/s.
pub fn diffusion_coefficient(kelvin: f64, radius_m: f64, eta: f64) -> Result<f64> {
    if kelvin <= 0.0 {
        return Err(DomainError::NonPositiveTemperature { kelvin });
    }
    if radius_m <= 0.0 {
        return Err(DomainError::NonPositiveRadius { meters: radius_m });
    }
    if eta <= 0.0 {
        return Err(DomainError::NonPositiveViscosity {
            pascal_seconds: eta,
        });
    }
    Ok(BOLTZMANN_CONSTANT * kelvin / (6.0 * PI * eta * radius_m))
}

/// Mean of the squared displacement of each subsequent point from the
/// path's starting point. Paths shorter than two points yield 0.
pub fn mean_squared_displacement<I>(path: I) -> f64
where
    I: IntoIterator<Item = Vec2>,
{
    let mut points = path.into_iter();
    let origin = match points.next() {
        Some(p) => p,
        None => return 0.0,
    };
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for p in points {
        sum += f64::from((p - origin).mag_sq());
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
