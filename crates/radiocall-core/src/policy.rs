//! Per-difficulty generation rules.

use serde::Serialize;

use crate::models::{Category, Difficulty};
use crate::subcategory::Subcategory;

/// Advisory delivery speed for text-to-speech consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakingPace {
    Slow,
    Normal,
    Fast,
}

/// Broad callsign families a tier is meant to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallsignStyle {
    Airline,
    Registration,
}

/// Rules for one difficulty tier.
#[derive(Debug, Clone, Serialize)]
pub struct DifficultyPolicy {
    /// Inclusive (min, max) instruction count target
    pub instructions_per_call: (u32, u32),
    pub callsign_styles: &'static [CallsignStyle],
    /// Conditional clearances ("behind the landing traffic...") may appear
    pub include_conditional: bool,
    /// Amended clearances may appear
    pub include_amendment: bool,
    pub speaking_pace: SpeakingPace,
    pub categories: &'static [Category],
    pub subcategories: &'static [Subcategory],
}

const SUPER_EASY_SUBCATEGORIES: &[Subcategory] = &[
    Subcategory::Taxi,
    Subcategory::TakeoffClearance,
    Subcategory::LandingClearance,
    Subcategory::HoldShort,
    Subcategory::FrequencyChange,
];

const EASY_SUBCATEGORIES: &[Subcategory] = &[
    Subcategory::Taxi,
    Subcategory::TakeoffClearance,
    Subcategory::LandingClearance,
    Subcategory::HoldShort,
    Subcategory::FrequencyChange,
    Subcategory::AltitudeChange,
    Subcategory::LineUp,
    Subcategory::InitialClimb,
];

const MEDIUM_SUBCATEGORIES: &[Subcategory] = &[
    Subcategory::Taxi,
    Subcategory::TakeoffClearance,
    Subcategory::LandingClearance,
    Subcategory::HoldShort,
    Subcategory::FrequencyChange,
    Subcategory::AltitudeChange,
    Subcategory::LineUp,
    Subcategory::InitialClimb,
    Subcategory::HeadingAssignment,
    Subcategory::SpeedControl,
    Subcategory::ApproachClearance,
];

const HARD_SUBCATEGORIES: &[Subcategory] = &[
    Subcategory::Taxi,
    Subcategory::TakeoffClearance,
    Subcategory::LandingClearance,
    Subcategory::HoldShort,
    Subcategory::FrequencyChange,
    Subcategory::AltitudeChange,
    Subcategory::LineUp,
    Subcategory::InitialClimb,
    Subcategory::HeadingAssignment,
    Subcategory::SpeedControl,
    Subcategory::ApproachClearance,
    Subcategory::GoAround,
    Subcategory::DirectRouting,
    Subcategory::VacateRunway,
];

const BASIC_CATEGORIES: &[Category] = &[Category::Ground, Category::Departure, Category::Landing];

const ALL_CATEGORIES: &[Category] = &[
    Category::Ground,
    Category::Departure,
    Category::Enroute,
    Category::Arrival,
    Category::Landing,
];

static SUPER_EASY: DifficultyPolicy = DifficultyPolicy {
    instructions_per_call: (1, 1),
    callsign_styles: &[CallsignStyle::Airline],
    include_conditional: false,
    include_amendment: false,
    speaking_pace: SpeakingPace::Slow,
    categories: BASIC_CATEGORIES,
    subcategories: SUPER_EASY_SUBCATEGORIES,
};

static EASY: DifficultyPolicy = DifficultyPolicy {
    instructions_per_call: (1, 2),
    callsign_styles: &[CallsignStyle::Airline],
    include_conditional: false,
    include_amendment: false,
    speaking_pace: SpeakingPace::Normal,
    categories: ALL_CATEGORIES,
    subcategories: EASY_SUBCATEGORIES,
};

static MEDIUM: DifficultyPolicy = DifficultyPolicy {
    instructions_per_call: (2, 3),
    callsign_styles: &[CallsignStyle::Airline, CallsignStyle::Registration],
    include_conditional: true,
    include_amendment: false,
    speaking_pace: SpeakingPace::Normal,
    categories: ALL_CATEGORIES,
    subcategories: MEDIUM_SUBCATEGORIES,
};

static HARD: DifficultyPolicy = DifficultyPolicy {
    instructions_per_call: (3, 4),
    callsign_styles: &[CallsignStyle::Airline, CallsignStyle::Registration],
    include_conditional: true,
    include_amendment: true,
    speaking_pace: SpeakingPace::Fast,
    categories: ALL_CATEGORIES,
    subcategories: HARD_SUBCATEGORIES,
};

impl Difficulty {
    /// Generation rules for this tier.
    pub fn policy(self) -> &'static DifficultyPolicy {
        match self {
            Difficulty::SuperEasy => &SUPER_EASY,
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_ranges_are_well_formed() {
        for d in Difficulty::ALL {
            let (min, max) = d.policy().instructions_per_call;
            assert!(min >= 1);
            assert!(min <= max);
        }
    }

    #[test]
    fn test_subcategories_grow_with_difficulty() {
        for pair in Difficulty::ALL.windows(2) {
            let easier = pair[0].policy().subcategories;
            let harder = pair[1].policy().subcategories;
            for sub in easier {
                assert!(harder.contains(sub), "{} missing from {}", sub, pair[1]);
            }
        }
    }

    #[test]
    fn test_conditional_and_amendment_flags() {
        assert!(!Difficulty::SuperEasy.policy().include_conditional);
        assert!(!Difficulty::Easy.policy().include_amendment);
        assert!(Difficulty::Medium.policy().include_conditional);
        assert!(!Difficulty::Medium.policy().include_amendment);
        assert!(Difficulty::Hard.policy().include_conditional);
        assert!(Difficulty::Hard.policy().include_amendment);
    }

    #[test]
    fn test_super_easy_is_single_instruction() {
        assert_eq!(Difficulty::SuperEasy.policy().instructions_per_call, (1, 1));
        assert_eq!(Difficulty::SuperEasy.policy().speaking_pace, SpeakingPace::Slow);
    }
}
