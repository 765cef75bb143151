//! Core data models for the radiocall generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::subcategory::Subcategory;

// ========== DIFFICULTY ==========

/// Learner level. Ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    SuperEasy,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::SuperEasy,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::SuperEasy => "super_easy",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// This tier and every harder one.
    pub fn and_harder(self) -> impl Iterator<Item = Difficulty> {
        Self::ALL.into_iter().filter(move |d| *d >= self)
    }

    /// True for the two beginner tiers, which draw values from curated sets.
    pub fn is_beginner(self) -> bool {
        matches!(self, Difficulty::SuperEasy | Difficulty::Easy)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| ParseError::UnknownDifficulty(s.to_string()))
    }
}

// ========== SCENARIO CLASSIFICATION ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ground,
    Departure,
    Enroute,
    Arrival,
    Landing,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ground => "ground",
            Category::Departure => "departure",
            Category::Enroute => "enroute",
            Category::Arrival => "arrival",
            Category::Landing => "landing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller position issuing the transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerPosition {
    Clearance,
    Ground,
    Tower,
    Departure,
    Approach,
    Center,
}

impl ControllerPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            ControllerPosition::Clearance => "clearance",
            ControllerPosition::Ground => "ground",
            ControllerPosition::Tower => "tower",
            ControllerPosition::Departure => "departure",
            ControllerPosition::Approach => "approach",
            ControllerPosition::Center => "center",
        }
    }
}

impl fmt::Display for ControllerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    Preflight,
    TaxiOut,
    Departure,
    Climb,
    Cruise,
    Descent,
    Approach,
    Landing,
    TaxiIn,
}

impl FlightPhase {
    /// Phases where altitudes are assigned as flight levels rather than feet.
    pub fn uses_flight_levels(self) -> bool {
        matches!(
            self,
            FlightPhase::Climb | FlightPhase::Cruise | FlightPhase::Descent
        )
    }
}

// ========== REFERENCE DATA ==========

/// A class of ATC instruction and its grading properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionType {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub display_name: String,
    pub category: Category,
    pub requires_readback: bool,
    /// Safety-critical if misread
    pub is_critical: bool,
    /// 0.0 - 1.0
    pub grading_weight: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example_phrase: String,
}

/// Pattern for producing aircraft callsigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallsignTemplate {
    #[serde(default)]
    pub airline_code: Option<String>,
    #[serde(default)]
    pub airline_callsign: Option<String>,
    /// e.g. `{airline} {number}`, `D-{registration}`, `N{number}{letters}`
    pub format_pattern: String,
    #[serde(default)]
    pub region: String,
    /// Lowest tier at which the template may be used
    pub difficulty: Difficulty,
    pub is_registration_based: bool,
    #[serde(default)]
    pub phonetic_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    #[serde(default)]
    pub icao: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Runway pairs, e.g. `"07L/25R, 07R/25L"`
    #[serde(default)]
    pub runways_available: Option<String>,
}

// ========== GENERATED RECORDS ==========

/// One concrete value rendered four ways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionValue {
    pub raw: String,
    pub display: String,
    pub phonetic: String,
    pub readback: String,
    pub unit: Option<String>,
}

impl InstructionValue {
    /// Value whose display, phonetic and readback forms are all the same text.
    pub fn verbatim(raw: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            raw: raw.into(),
            display: text.clone(),
            phonetic: text.clone(),
            readback: text,
            unit: None,
        }
    }
}

/// One atomic element of a transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Id of the referenced [`InstructionType`]
    pub instruction_type: String,
    /// 1-based position within the parent radiocall
    pub sequence: u32,
    pub raw_value: String,
    pub display_text: String,
    pub phonetic_text: String,
    pub readback_text: String,
    pub unit: Option<String>,
    pub is_conditional: bool,
    pub condition_text: Option<String>,
}

/// A controller transmission with its expected readback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radiocall {
    /// Id of the [`Airport`] the call is set at
    pub airport: String,
    pub category: Category,
    pub subcategory: Subcategory,
    pub difficulty: Difficulty,
    pub flight_phase: FlightPhase,
    pub controller_position: ControllerPosition,
    pub aircraft_callsign: String,
    pub callsign_phonetic: String,
    pub full_transmission: String,
    pub expected_readback: String,
    /// Instruction type codes that must be read back correctly to pass
    pub critical_elements: Vec<String>,
    pub instruction_count: u32,
    pub has_conditional: bool,
    pub is_amendment: bool,
    pub notes: Option<String>,
}

/// Alternate readback that is graded as equally correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptableVariation {
    pub variation_text: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Style,
}

/// A canned readback mistake attached to a radiocall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonError {
    pub error_code: String,
    pub severity: Severity,
    pub description: String,
    pub example: String,
    pub feedback_text: String,
}

/// Everything produced by one successful generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiocallBundle {
    pub radiocall: Radiocall,
    pub instructions: Vec<Instruction>,
    pub variations: Vec<AcceptableVariation>,
    pub errors: Vec<CommonError>,
}
