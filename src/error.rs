// error.rs
// Crate-wide error type for invalid physical parameters

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Invalid physical parameter fed to one of the pure physics functions.
///
/// These are detected at the function boundary and surfaced to the caller;
/// the engines never clamp them away silently.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("temperature must be above absolute zero, got {kelvin} K")]
    NonPositiveTemperature { kelvin: f64 },

    #[error("particle radius must be positive, got {meters} m")]
    NonPositiveRadius { meters: f64 },

    #[error("viscosity must be positive, got {pascal_seconds} Pa*s")]
    NonPositiveViscosity { pascal_seconds: f64 },

    /// The empirical viscosity fit produced a non-finite or non-positive
    /// value. The fit has a singularity near 140 K.
    #[error("viscosity fit is not defined at {kelvin} K")]
    ViscosityOutOfRange { kelvin: f64 },
}
