//! Doppler Match - an exoplanet radial-velocity matching game
//!
//! Core modules:
//! - `physics`: Orbital geometry and Doppler line shift
//! - `scoring`: Wavelength-accuracy feedback levels
//! - `session`: Session state and quiz progression
//! - `settings`: Session configuration and display language
//!
//! Everything in this crate is pure and deterministic: seeded RNG only,
//! no rendering or platform dependencies. A presentation shell owns the
//! widgets and plots, keeps the [`SessionState`] value alive between
//! renders, and drives it through [`session::view`] / [`session::handle`].

pub mod error;
pub mod physics;
pub mod scoring;
pub mod session;
pub mod settings;

pub use error::{Result, SimError};
pub use physics::OrbitalSnapshot;
pub use scoring::FeedbackLevel;
pub use session::{Interaction, InteractionResult, Mode, Question, SessionState};
pub use settings::{Language, SessionConfig};

use glam::DVec2;

/// Physical and gameplay constants
pub mod consts {
    /// Rest wavelength of the H-alpha line (nm)
    pub const BASE_WAVELENGTH_NM: f64 = 656.3;
    /// Speed of light (km/s)
    pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
    /// Peak radial velocity of the star along the line of sight (km/s)
    pub const MAX_RADIAL_VELOCITY_KM_S: f64 = 30.0;

    /// Star orbit radius about the center of mass (plot units)
    pub const STAR_DISTANCE: f64 = 0.5;
    /// Planet orbit radius about the center of mass (plot units)
    pub const PLANET_DISTANCE: f64 = 1.0;
    /// Star mass in solar masses (display only)
    pub const STAR_MASS: f64 = 1.0;
    /// Planet mass in solar masses, roughly Jupiter (display only)
    pub const PLANET_MASS: f64 = 0.001;

    /// Deviation below which a guess rates Excellent (nm)
    pub const EXCELLENT_DIFF_NM: f64 = 0.002;
    /// Deviation below which a guess rates Good (nm)
    pub const GOOD_DIFF_NM: f64 = 0.005;

    /// Points per correct answer in the fixed four-question quiz
    pub const FIXED_QUIZ_POINTS: u32 = 25;
    /// Points per correct answer in the random five-question quiz
    pub const RANDOM_QUIZ_POINTS: u32 = 20;
    /// Number of questions in the random quiz
    pub const RANDOM_QUIZ_LEN: usize = 5;

    /// Half-width of the relative jitter on the free-input target line
    pub const TARGET_JITTER: f64 = 1.0e-4;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_angle_deg(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Round a wavelength to display precision (3 decimals, nm)
#[inline]
pub fn display_nm(nm: f64) -> f64 {
    (nm * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_deg() {
        assert_eq!(normalize_angle_deg(0.0), 0.0);
        assert_eq!(normalize_angle_deg(360.0), 0.0);
        assert_eq!(normalize_angle_deg(450.0), 90.0);
        assert_eq!(normalize_angle_deg(-90.0), 270.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(1.0, 0.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);

        let p = polar_to_cartesian(2.0, std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_nm() {
        assert_eq!(display_nm(656.30049), 656.3);
        assert_eq!(display_nm(656.2344), 656.234);
    }
}
