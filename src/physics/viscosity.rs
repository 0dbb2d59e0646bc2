// physics/viscosity.rs
// Empirical dynamic viscosity of the solvent as a function of temperature

use crate::error::{DomainError, Result};
use crate::units::ZERO_CELSIUS_K;

/// Dynamic viscosity of water in Pa*s at the given temperature, from the
/// Vogel-style empirical fit `2.414e-5 * 10^(247.8 / (T_C + 133.15))`.
///
/// Out-of-domain temperatures are rejected rather than clamped:
/// non-positive kelvin yields `NonPositiveTemperature`, and inputs where the
/// fit diverges yield `ViscosityOutOfRange` instead of propagating Inf.
pub fn water_viscosity(kelvin: f64) -> Result<f64> {
    if kelvin <= 0.0 {
        return Err(DomainError::NonPositiveTemperature { kelvin });
    }
    let celsius = kelvin - ZERO_CELSIUS_K;
    let eta = 2.414e-5 * 10f64.powf(247.8 / (celsius + 133.15));
    if !eta.is_finite() || eta <= 0.0 {
        return Err(DomainError::ViscosityOutOfRange { kelvin });
    }
    Ok(eta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_temperature_matches_tabulated_water() {
        let eta = water_viscosity(298.0).unwrap();
        assert!(eta > 0.00089 && eta < 0.0010, "eta = {eta}");
    }

    #[test]
    fn colder_water_is_more_viscous() {
        let cold = water_viscosity(278.0).unwrap();
        let warm = water_viscosity(358.0).unwrap();
        assert!(cold > warm);
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        assert_eq!(
            water_viscosity(0.0),
            Err(DomainError::NonPositiveTemperature { kelvin: 0.0 })
        );
        assert!(water_viscosity(-5.0).is_err());
    }
}
