//! Doppler Match entry point
//!
//! A minimal text shell that drives one scripted session per mode and
//! prints what a real widget layer would render. The shell owns the
//! `SessionState` value and is responsible for storing it between
//! interactions; here that is just a local variable.

use doppler_match::consts::BASE_WAVELENGTH_NM;
use doppler_match::session::{self, Interaction, Mode, SessionState};
use doppler_match::settings::SessionConfig;

fn main() {
    env_logger::init();
    log::info!("Doppler Match (demo shell) starting...");

    let seed = rand::random::<u64>();
    log::info!("Session seed: {seed}");

    free_input_demo(seed);
    fixed_quiz_demo();
    random_quiz_demo(seed);
}

fn print_result(result: &session::InteractionResult, config: &SessionConfig) {
    if let Some(wavelength) = result.shifted_wavelength {
        println!("Your guessed wavelength: {wavelength:.3} nm");
    }
    if let Some(diff) = result.wavelength_diff {
        println!("Difference from target:  {diff:.3} nm");
    }
    if let Some(feedback) = result.feedback {
        println!("Feedback: {}", feedback.message(config.language));
    }
}

fn free_input_demo(seed: u64) {
    let config = SessionConfig::seeded(Mode::FreeInput, seed);
    let mut state = SessionState::new(&config);

    println!("== Free input ==");
    println!("Base wavelength: {BASE_WAVELENGTH_NM:.3} nm");
    let target = session::view(&mut state)
        .target_wavelength
        .unwrap_or(BASE_WAVELENGTH_NM);
    println!("Goal: adjust the planet's angle to land near {target:.3} nm");

    let result = session::handle(&mut state, &Interaction::SubmitAngle(75.0))
        .expect("finite angle");
    println!("Angle locked at 75°");
    print_result(&result, &config);

    // One chance only: this submission changes nothing
    let again = session::handle(&mut state, &Interaction::SubmitAngle(180.0))
        .expect("finite angle");
    assert_eq!(again, result);
    println!();
}

fn fixed_quiz_demo() {
    let config = SessionConfig::with_mode(Mode::FixedQuiz);
    let mut state = SessionState::new(&config);

    println!("== Fixed quiz ==");
    while !state.completed {
        let bundle = session::view(&mut state);
        let Some(question) = bundle.question else {
            break;
        };
        println!(
            "Q{}: match {:.3} nm  options: {:?}",
            bundle.question_index + 1,
            question.target_wavelength,
            question.angle_options
        );

        // Play perfectly: the bank data is open to the shell
        let option = question
            .angle_options
            .iter()
            .position(|a| question.is_correct(*a))
            .unwrap_or(0);
        let result = session::handle(&mut state, &Interaction::SelectOption(option))
            .expect("selection is not an angle");
        print_result(&result, &config);
        session::handle(&mut state, &Interaction::Advance).expect("advance");
    }
    println!("Final score: {}/100", state.score);
    println!();
}

fn random_quiz_demo(seed: u64) {
    let config = SessionConfig::seeded(Mode::RandomQuiz, seed);
    let mut state = SessionState::new(&config);

    println!("== Random quiz ==");
    while !state.completed {
        let bundle = session::view(&mut state);
        let Some(question) = bundle.question else {
            break;
        };
        println!(
            "Q{}: match {:.3} nm  options: {:?}",
            bundle.question_index + 1,
            question.target_wavelength,
            question.angle_options
        );

        // Always pick the first option; the answer advances the quiz
        let result = session::handle(&mut state, &Interaction::SelectOption(0))
            .expect("selection is not an angle");
        print_result(&result, &config);
    }
    println!("Final score: {}/100", state.score);

    // What a shell would stash between requests
    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("session snapshot: {json}"),
        Err(e) => log::warn!("snapshot failed: {e}"),
    }
}
