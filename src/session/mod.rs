//! Session state and quiz progression
//!
//! The controller must stay pure and deterministic:
//! - One call per user action (request/response, no hidden re-runs)
//! - Seeded RNG only, one stream per question index
//! - Lazy question generation is memoized so re-renders are idempotent
//! - No rendering or platform dependencies

pub mod controller;
pub mod question;
pub mod state;

pub use controller::{Interaction, InteractionResult, handle, view};
pub use question::{ANGLE_POOL, OPTIONS_PER_QUESTION, fixed_bank};
pub use state::{Mode, Question, RngState, SessionState};
