//! Question data and generation
//!
//! The curated bank is plain data, not logic: correct angles come from
//! the set {0, 45, 90, 180, 225, 270, 315} while each question offers
//! only four choices, so a correct angle is not guaranteed a slot among
//! the options. Callers with different curricula can overwrite
//! `SessionState::questions` with their own bank before play starts.

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::state::Question;
use crate::physics;

/// Angle pool for generated questions: multiples of 45° in [0, 360)
pub const ANGLE_POOL: [u32; 8] = [0, 45, 90, 135, 180, 225, 270, 315];

/// Choices offered per question
pub const OPTIONS_PER_QUESTION: usize = 4;

fn question(correct: &[u32], options: &[u32], target_angle: u32) -> Question {
    Question {
        target_wavelength: physics::wavelength_of(f64::from(target_angle)),
        correct_angles: correct.to_vec(),
        angle_options: options.to_vec(),
    }
}

/// The curated four-question bank
pub fn fixed_bank() -> Vec<Question> {
    vec![
        // Maximum blueshift: star approaching head-on
        question(&[0], &[0, 90, 180, 270], 0),
        // Quadrature: 90 and 270 both leave the line at rest
        question(&[90, 270], &[45, 90, 180, 315], 90),
        // Maximum redshift
        question(&[180], &[0, 45, 180, 270], 180),
        // 45 never appears as a choice; its mirror 315 does
        question(&[45, 315], &[90, 180, 270, 315], 45),
    ]
}

/// Generate one random-quiz question: four distinct pool angles, one of
/// them correct, the target taken from its line shift.
pub fn generate(rng: &mut Pcg32) -> Question {
    let angle_options: Vec<u32> = ANGLE_POOL
        .choose_multiple(rng, OPTIONS_PER_QUESTION)
        .copied()
        .collect();
    let correct = angle_options[rng.random_range(0..angle_options.len())];

    Question {
        target_wavelength: physics::wavelength_of(f64::from(correct)),
        correct_angles: vec![correct],
        angle_options,
    }
}
