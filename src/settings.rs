//! Session configuration
//!
//! Owned by the presentation shell and handed to [`SessionState::new`]
//! once per session. The shell persists it however it likes; everything
//! here is plain serializable data.
//!
//! [`SessionState::new`]: crate::session::SessionState::new

use serde::{Deserialize, Serialize};

use crate::session::Mode;

/// Display language for feedback strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "tr" | "turkish" | "türkçe" => Some(Language::Tr),
            _ => None,
        }
    }
}

/// Per-session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Operating mode, fixed for the session lifetime
    pub mode: Mode,
    /// Seed for target and question generation; `None` draws from OS entropy
    pub random_seed: Option<u64>,
    /// Display language (never affects scoring)
    pub language: Language,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::FreeInput,
            random_seed: None,
            language: Language::En,
        }
    }
}

impl SessionConfig {
    /// Config for a mode with everything else defaulted
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Deterministic config: same seed, same targets and questions
    pub fn seeded(mode: Mode, seed: u64) -> Self {
        Self {
            mode,
            random_seed: Some(seed),
            language: Language::En,
        }
    }

    /// Resolve the session seed, drawing one from OS entropy when unseeded
    pub fn resolve_seed(&self) -> u64 {
        self.random_seed.unwrap_or_else(rand::random)
    }
}
