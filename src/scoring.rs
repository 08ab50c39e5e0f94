//! Wavelength-accuracy feedback
//!
//! Maps the absolute deviation between a guessed line and the target
//! line onto a categorical rating. Thresholds are half-open: strict `<`
//! on both boundaries.

use serde::{Deserialize, Serialize};

use crate::consts::{EXCELLENT_DIFF_NM, GOOD_DIFF_NM};
use crate::settings::Language;

/// Accuracy rating for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackLevel {
    /// Within 0.002 nm of the target
    Excellent,
    /// Within 0.005 nm of the target
    Good,
    /// Everything further out
    TryAgain,
}

impl FeedbackLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackLevel::Excellent => "Excellent",
            FeedbackLevel::Good => "Good",
            FeedbackLevel::TryAgain => "TryAgain",
        }
    }

    /// Display message for the given language (cosmetic only)
    pub fn message(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, FeedbackLevel::Excellent) => {
                "Excellent! You've matched the position perfectly."
            }
            (Language::En, FeedbackLevel::Good) => "Good! You're close to the correct position.",
            (Language::En, FeedbackLevel::TryAgain) => "Keep trying to get closer next time!",
            (Language::Tr, FeedbackLevel::Excellent) => {
                "Mükemmel! Konumu tam olarak eşleştirdin."
            }
            (Language::Tr, FeedbackLevel::Good) => "Güzel! Doğru konuma oldukça yakınsın.",
            (Language::Tr, FeedbackLevel::TryAgain) => {
                "Bir dahaki sefere daha da yaklaşmayı dene!"
            }
        }
    }
}

/// Rate the absolute deviation from the target wavelength (nm)
pub fn score_feedback(diff: f64) -> FeedbackLevel {
    if diff < EXCELLENT_DIFF_NM {
        FeedbackLevel::Excellent
    } else if diff < GOOD_DIFF_NM {
        FeedbackLevel::Good
    } else {
        FeedbackLevel::TryAgain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_boundaries() {
        assert_eq!(score_feedback(0.0), FeedbackLevel::Excellent);
        assert_eq!(score_feedback(0.0019999), FeedbackLevel::Excellent);
        assert_eq!(score_feedback(0.002), FeedbackLevel::Good);
        assert_eq!(score_feedback(0.0049999), FeedbackLevel::Good);
        assert_eq!(score_feedback(0.005), FeedbackLevel::TryAgain);
        assert_eq!(score_feedback(1.0), FeedbackLevel::TryAgain);
    }

    #[test]
    fn test_messages_cover_all_languages() {
        for level in [
            FeedbackLevel::Excellent,
            FeedbackLevel::Good,
            FeedbackLevel::TryAgain,
        ] {
            for lang in [Language::En, Language::Tr] {
                assert!(!level.message(lang).is_empty());
            }
        }
    }
}
