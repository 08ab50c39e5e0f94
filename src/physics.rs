//! Orbital geometry and Doppler line shift
//!
//! Pure functions only. Angles are degrees at the API boundary and are
//! normalized modulo 360 into [0, 360); rejecting non-finite input is
//! the single error path.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::{normalize_angle_deg, polar_to_cartesian};

/// Star and planet configuration at one orbital angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalSnapshot {
    /// Planet position about the center of mass (plot units)
    pub planet_pos: DVec2,
    /// Star position, opposite phase to the planet
    pub star_pos: DVec2,
    /// Line-of-sight velocity of the star (km/s)
    pub radial_velocity: f64,
    /// Observed H-alpha wavelength (nm)
    pub shifted_wavelength: f64,
}

/// Doppler-shifted H-alpha wavelength for an angle the caller already
/// knows to be finite (quiz targets, stored submissions).
pub(crate) fn wavelength_of(angle_deg: f64) -> f64 {
    let radial_velocity = MAX_RADIAL_VELOCITY_KM_S * angle_deg.to_radians().cos();
    BASE_WAVELENGTH_NM * (1.0 - radial_velocity / SPEED_OF_LIGHT_KM_S)
}

/// Compute the orbital snapshot for an angle in degrees.
///
/// Finite input is normalized modulo 360; NaN and infinities are
/// rejected with [`SimError::InvalidAngle`].
pub fn compute(angle_degrees: f64) -> Result<OrbitalSnapshot> {
    if !angle_degrees.is_finite() {
        return Err(SimError::InvalidAngle(angle_degrees));
    }

    let theta = normalize_angle_deg(angle_degrees).to_radians();
    let radial_velocity = MAX_RADIAL_VELOCITY_KM_S * theta.cos();
    let shifted_wavelength = BASE_WAVELENGTH_NM * (1.0 - radial_velocity / SPEED_OF_LIGHT_KM_S);

    Ok(OrbitalSnapshot {
        planet_pos: polar_to_cartesian(PLANET_DISTANCE, theta),
        star_pos: -polar_to_cartesian(STAR_DISTANCE, theta),
        radial_velocity,
        shifted_wavelength,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blueshift_at_zero_degrees() {
        let snap = compute(0.0).unwrap();
        assert_eq!(snap.radial_velocity, MAX_RADIAL_VELOCITY_KM_S);
        let expected = 656.3 * (1.0 - 30.0 / 299_792.458);
        assert!((snap.shifted_wavelength - expected).abs() < 1e-12);
        // ~656.234 nm, approaching star
        assert!(snap.shifted_wavelength < BASE_WAVELENGTH_NM);
        assert!((snap.shifted_wavelength - 656.2343).abs() < 1e-3);
    }

    #[test]
    fn test_redshift_at_180_degrees() {
        let snap = compute(180.0).unwrap();
        assert!((snap.radial_velocity + MAX_RADIAL_VELOCITY_KM_S).abs() < 1e-9);
        assert!(snap.shifted_wavelength > BASE_WAVELENGTH_NM);
        assert!((snap.shifted_wavelength - 656.3657).abs() < 1e-3);
    }

    #[test]
    fn test_rest_wavelength_at_quadrature() {
        for angle in [90.0, 270.0] {
            let snap = compute(angle).unwrap();
            assert!(snap.radial_velocity.abs() < 1e-9);
            assert!((snap.shifted_wavelength - BASE_WAVELENGTH_NM).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_opposite_planet() {
        let snap = compute(30.0).unwrap();
        // Star sits on the far side of the center of mass, at half the radius
        let ratio = STAR_DISTANCE / PLANET_DISTANCE;
        assert!((snap.star_pos.x + snap.planet_pos.x * ratio).abs() < 1e-12);
        assert!((snap.star_pos.y + snap.planet_pos.y * ratio).abs() < 1e-12);
        assert!((snap.planet_pos.length() - PLANET_DISTANCE).abs() < 1e-12);
        assert!((snap.star_pos.length() - STAR_DISTANCE).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_angles_normalize() {
        let a = compute(450.0).unwrap();
        let b = compute(90.0).unwrap();
        assert_eq!(a.shifted_wavelength, b.shifted_wavelength);

        let a = compute(-90.0).unwrap();
        let b = compute(270.0).unwrap();
        assert_eq!(a.shifted_wavelength, b.shifted_wavelength);
    }

    #[test]
    fn test_rejects_non_finite_angles() {
        assert!(matches!(
            compute(f64::NAN),
            Err(SimError::InvalidAngle(_))
        ));
        assert!(matches!(
            compute(f64::INFINITY),
            Err(SimError::InvalidAngle(_))
        ));
    }

    proptest! {
        #[test]
        fn wavelength_is_periodic(angle in -720.0f64..720.0) {
            let a = compute(angle).unwrap();
            let b = compute(angle + 360.0).unwrap();
            prop_assert!((a.shifted_wavelength - b.shifted_wavelength).abs() < 1e-9);
        }

        #[test]
        fn wavelength_stays_in_physical_band(angle in -720.0f64..720.0) {
            let snap = compute(angle).unwrap();
            let max_shift = BASE_WAVELENGTH_NM * MAX_RADIAL_VELOCITY_KM_S / SPEED_OF_LIGHT_KM_S;
            prop_assert!(snap.shifted_wavelength >= BASE_WAVELENGTH_NM - max_shift - 1e-9);
            prop_assert!(snap.shifted_wavelength <= BASE_WAVELENGTH_NM + max_shift + 1e-9);
        }
    }
}
