//! Interaction handling
//!
//! One call per user action, request/response style: the shell owns the
//! [`SessionState`] value and passes it to [`view`] when it renders or
//! to [`handle`] when the user acts. Everything that could go wrong at
//! runtime degrades to "no state change, report the current bundle";
//! the only hard error is a non-finite submitted angle.

use serde::{Deserialize, Serialize};

use super::state::{Mode, Question, SessionState};
use crate::consts::{FIXED_QUIZ_POINTS, RANDOM_QUIZ_POINTS};
use crate::error::Result;
use crate::normalize_angle_deg;
use crate::physics;
use crate::scoring::{self, FeedbackLevel};

/// One user action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Interaction {
    /// Free-input angle submission (degrees)
    SubmitAngle(f64),
    /// Quiz answer by option position (0-3)
    SelectOption(usize),
    /// Fixed-quiz confirm step to the next question
    Advance,
}

/// Result bundle for the shell to display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// Observed wavelength of the evaluated angle (nm), when one exists
    pub shifted_wavelength: Option<f64>,
    /// Absolute deviation from the target (nm)
    pub wavelength_diff: Option<f64>,
    /// Accuracy rating of the evaluated angle
    pub feedback: Option<FeedbackLevel>,
    /// Target line for the question in view (nm)
    pub target_wavelength: Option<f64>,
    /// Question in view (quiz modes)
    pub question: Option<Question>,
    /// Index of the question in view
    pub question_index: usize,
    /// Cumulative score
    pub score: u32,
    /// No further input can change the session
    pub locked_or_completed: bool,
}

/// Render the current session without acting on it.
///
/// Idempotent: calling this any number of times returns the same bundle
/// and, for the random quiz, the same lazily generated question.
pub fn view(state: &mut SessionState) -> InteractionResult {
    match state.mode {
        Mode::FreeInput => free_view(state),
        Mode::FixedQuiz | Mode::RandomQuiz => quiz_view(state),
    }
}

/// Apply one user action and return the bundle to display.
pub fn handle(state: &mut SessionState, input: &Interaction) -> Result<InteractionResult> {
    match (state.mode, *input) {
        (Mode::FreeInput, Interaction::SubmitAngle(angle)) => submit_angle(state, angle),
        (Mode::FixedQuiz, Interaction::SelectOption(option)) => Ok(answer_fixed(state, option)),
        (Mode::FixedQuiz, Interaction::Advance) => Ok(advance_fixed(state)),
        (Mode::RandomQuiz, Interaction::SelectOption(option)) => Ok(answer_random(state, option)),
        // An action that does not apply to the mode degrades to a render
        _ => Ok(view(state)),
    }
}

fn base_result(state: &SessionState) -> InteractionResult {
    InteractionResult {
        shifted_wavelength: None,
        wavelength_diff: None,
        feedback: None,
        target_wavelength: None,
        question: None,
        question_index: state.current_question_index,
        score: state.score,
        locked_or_completed: state.is_finished(),
    }
}

/// Bundle for a quiz that has run out of questions
fn completed_view(state: &SessionState) -> InteractionResult {
    let mut result = base_result(state);
    result.locked_or_completed = true;
    result
}

fn evaluate(result: &mut InteractionResult, angle_deg: f64, target: f64) {
    let shifted = physics::wavelength_of(angle_deg);
    let diff = (shifted - target).abs();
    result.shifted_wavelength = Some(shifted);
    result.wavelength_diff = Some(diff);
    result.feedback = Some(scoring::score_feedback(diff));
}

fn free_view(state: &SessionState) -> InteractionResult {
    let mut result = base_result(state);
    result.target_wavelength = state.target_wavelength;
    if let (Some(angle), Some(target)) = (state.submitted_angle, state.target_wavelength) {
        evaluate(&mut result, angle, target);
    }
    result
}

fn quiz_view(state: &mut SessionState) -> InteractionResult {
    let total = state.question_count();
    let index = state.current_question_index;
    // An index past the last question reads as completed, never as an error
    if state.completed || index >= total {
        return completed_view(state);
    }

    if state.mode == Mode::RandomQuiz {
        state.ensure_question(index);
    }
    let question = state.questions[index].clone();

    let mut result = base_result(state);
    result.target_wavelength = Some(question.target_wavelength);
    if state.answered {
        if let Some(angle) = state.submitted_angle {
            evaluate(&mut result, angle, question.target_wavelength);
        }
    }
    result.question = Some(question);
    result
}

fn submit_angle(state: &mut SessionState, angle: f64) -> Result<InteractionResult> {
    if state.locked {
        log::debug!("angle submission ignored: already locked");
        return Ok(free_view(state));
    }

    // Validate before touching any state
    let snapshot = physics::compute(angle)?;
    let normalized = normalize_angle_deg(angle);
    state.submitted_angle = Some(normalized);
    state.locked = true;
    log::info!(
        "angle locked at {normalized:.0}° ({:.3} nm)",
        snapshot.shifted_wavelength
    );
    Ok(free_view(state))
}

fn answer_fixed(state: &mut SessionState, option: usize) -> InteractionResult {
    let total = state.question_count();
    let index = state.current_question_index;
    if state.completed || index >= total {
        return completed_view(state);
    }
    if state.answered {
        log::debug!("answer ignored: question {index} already answered");
        return quiz_view(state);
    }
    let Some(&angle) = state.questions[index].angle_options.get(option) else {
        log::debug!("answer ignored: option {option} out of range");
        return quiz_view(state);
    };

    if state.questions[index].is_correct(angle) {
        state.score += FIXED_QUIZ_POINTS;
    }
    state.answered = true;
    state.submitted_angle = Some(f64::from(angle));
    quiz_view(state)
}

fn advance_fixed(state: &mut SessionState) -> InteractionResult {
    // Advancing before answering (or after the end) changes nothing
    if state.completed || !state.answered {
        return quiz_view(state);
    }

    state.answered = false;
    state.submitted_angle = None;
    state.current_question_index += 1;
    if state.current_question_index >= state.question_count() {
        state.completed = true;
        log::info!("fixed quiz completed with score {}", state.score);
    }
    quiz_view(state)
}

fn answer_random(state: &mut SessionState, option: usize) -> InteractionResult {
    let total = state.question_count();
    let index = state.current_question_index;
    if state.completed || index >= total {
        return completed_view(state);
    }

    state.ensure_question(index);
    let question = state.questions[index].clone();
    let Some(&angle) = question.angle_options.get(option) else {
        log::debug!("answer ignored: option {option} out of range");
        return quiz_view(state);
    };

    if question.is_correct(angle) {
        state.score += RANDOM_QUIZ_POINTS;
    }
    // One evaluation per question: the index moves on immediately
    state.current_question_index += 1;
    if state.current_question_index >= total {
        state.completed = true;
        log::info!("random quiz completed with score {}", state.score);
    }

    let mut result = base_result(state);
    result.question_index = index;
    result.target_wavelength = Some(question.target_wavelength);
    evaluate(&mut result, f64::from(angle), question.target_wavelength);
    result.question = Some(question);
    result
}
