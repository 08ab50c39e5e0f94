//! Session state and question data
//!
//! All state that must survive re-renders lives here. The shell owns
//! the [`SessionState`] value: created at session start, discarded at
//! session end, serializable in between if the shell wants to stash it.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::question;
use crate::consts::*;
use crate::settings::{Language, SessionConfig};

/// Session operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// One-shot angle entry against a jittered target line
    FreeInput,
    /// Four curated questions with a confirm/next step
    FixedQuiz,
    /// Five generated questions, advancing on every answer
    RandomQuiz,
}

/// RNG stream carrying the free-input target draw
const TARGET_STREAM: u64 = 0;
/// First RNG stream used for question generation
const QUESTION_STREAM_BASE: u64 = 1;

/// RNG state wrapper for serialization
///
/// Content is derived from (seed, stream index), so lazily generated
/// questions come out identical across re-renders and serde round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Independent generator for the given stream index
    pub fn stream(&self, stream: u64) -> Pcg32 {
        Pcg32::new(self.seed, stream)
    }
}

/// A single quiz question
///
/// Never mutated after creation. `correct_angles` may hold symmetric
/// positions (90/270 shift the line identically), and in the curated
/// bank it may hold angles that never appear in `angle_options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Wavelength the player must match (nm)
    pub target_wavelength: f64,
    /// Angles accepted as correct (degrees)
    pub correct_angles: Vec<u32>,
    /// Choices offered, in display order (degrees)
    pub angle_options: Vec<u32>,
}

impl Question {
    pub fn is_correct(&self, angle: u32) -> bool {
        self.correct_angles.contains(&angle)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Operating mode
    pub mode: Mode,
    /// Display language (cosmetic)
    pub language: Language,
    /// Free-input target line (nm); quiz targets live on each question
    pub target_wavelength: Option<f64>,
    /// Free-input one-attempt flag
    pub locked: bool,
    /// Angle behind the current feedback, if any (degrees, normalized)
    pub submitted_angle: Option<f64>,
    /// Questions: the fixed bank up front, the random quiz fills lazily
    pub questions: Vec<Question>,
    /// Index of the question in play
    pub current_question_index: usize,
    /// Current fixed-quiz question has been answered
    pub answered: bool,
    /// Cumulative score
    pub score: u32,
    /// Quiz finished; the session is permanently immutable
    pub completed: bool,
}

impl SessionState {
    /// Create a session from a config, resolving the seed (OS entropy
    /// when the config leaves it unset)
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_seed(config.mode, config.language, config.resolve_seed())
    }

    /// Create a session from an explicit seed
    pub fn with_seed(mode: Mode, language: Language, seed: u64) -> Self {
        let rng_state = RngState::new(seed);

        // The free-input target is drawn exactly once, here
        let target_wavelength = match mode {
            Mode::FreeInput => {
                let mut rng = rng_state.stream(TARGET_STREAM);
                let u = rng.random_range(-TARGET_JITTER..=TARGET_JITTER);
                Some(BASE_WAVELENGTH_NM * (1.0 + u))
            }
            Mode::FixedQuiz | Mode::RandomQuiz => None,
        };

        let questions = match mode {
            Mode::FixedQuiz => question::fixed_bank(),
            Mode::FreeInput | Mode::RandomQuiz => Vec::new(),
        };

        Self {
            seed,
            rng_state,
            mode,
            language,
            target_wavelength,
            locked: false,
            submitted_angle: None,
            questions,
            current_question_index: 0,
            answered: false,
            score: 0,
            completed: false,
        }
    }

    /// Total questions for the session's quiz mode (0 for free input)
    pub fn question_count(&self) -> usize {
        match self.mode {
            Mode::FreeInput => 0,
            Mode::FixedQuiz => self.questions.len(),
            Mode::RandomQuiz => RANDOM_QUIZ_LEN,
        }
    }

    /// Whether further input can still change this session
    pub fn is_finished(&self) -> bool {
        match self.mode {
            Mode::FreeInput => self.locked,
            Mode::FixedQuiz | Mode::RandomQuiz => self.completed,
        }
    }

    /// Generate random-quiz questions up to and including `index`,
    /// memoized: an existing question is never regenerated, so the
    /// options a player saw stay stable across re-renders.
    pub(crate) fn ensure_question(&mut self, index: usize) {
        debug_assert_eq!(self.mode, Mode::RandomQuiz);
        while self.questions.len() <= index {
            let stream = QUESTION_STREAM_BASE + self.questions.len() as u64;
            let mut rng = self.rng_state.stream(stream);
            self.questions.push(question::generate(&mut rng));
        }
    }
}
