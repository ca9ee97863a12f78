//! Feedback tiers for the UI/audio collaborators

use serde::Serialize;

use super::config::ScoringConfig;

/// Total number of pins on the lane
pub const PIN_COUNT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackTier {
    /// All ten pins down
    Strike,
    /// At least `good_threshold` pins down
    Good,
    Miss,
}

/// Sound the JS side should play for an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundCue {
    Throw,
    Strike,
    Good,
    Miss,
}

impl FeedbackTier {
    pub fn from_score(score: u32, good_threshold: u32) -> Self {
        if score == PIN_COUNT {
            FeedbackTier::Strike
        } else if score >= good_threshold {
            FeedbackTier::Good
        } else {
            FeedbackTier::Miss
        }
    }

    pub fn for_config(score: u32, scoring: &ScoringConfig) -> Self {
        Self::from_score(score, scoring.good_threshold)
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Strike => "★ COSMIC STRIKE!! ★",
            FeedbackTier::Good => "Nice throw!",
            FeedbackTier::Miss => "Try again...",
        }
    }

    /// CSS color for the message
    pub fn css_color(self) -> &'static str {
        match self {
            FeedbackTier::Strike => "#00ff00",
            FeedbackTier::Good => "#ffff00",
            FeedbackTier::Miss => "#ff4444",
        }
    }

    pub fn sound(self) -> SoundCue {
        match self {
            FeedbackTier::Strike => SoundCue::Strike,
            FeedbackTier::Good => SoundCue::Good,
            FeedbackTier::Miss => SoundCue::Miss,
        }
    }

    /// Spoken when the sound cue cannot be played
    pub fn speech_fallback(self) -> &'static str {
        match self {
            FeedbackTier::Strike => "Strike!",
            FeedbackTier::Good => "Well done",
            FeedbackTier::Miss => "Oops, not great",
        }
    }

    /// Strike gets the extra camera bounce
    pub fn has_bonus_animation(self) -> bool {
        matches!(self, FeedbackTier::Strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_cover_every_score() {
        for score in 0..=PIN_COUNT {
            let tier = FeedbackTier::from_score(score, 3);
            let expected = match score {
                10 => FeedbackTier::Strike,
                3..=9 => FeedbackTier::Good,
                _ => FeedbackTier::Miss,
            };
            assert_eq!(tier, expected, "score {}", score);
        }
    }

    #[test]
    fn three_is_the_inclusive_boundary() {
        assert_eq!(FeedbackTier::from_score(2, 3), FeedbackTier::Miss);
        assert_eq!(FeedbackTier::from_score(3, 3), FeedbackTier::Good);
    }

    #[test]
    fn only_strike_has_bonus() {
        assert!(FeedbackTier::Strike.has_bonus_animation());
        assert!(!FeedbackTier::Good.has_bonus_animation());
        assert!(!FeedbackTier::Miss.has_bonus_animation());
        assert_eq!(FeedbackTier::Miss.sound(), SoundCue::Miss);
    }
}
