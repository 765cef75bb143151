//! Transmission subcategories and how they classify a scenario.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::models::{Category, ControllerPosition, FlightPhase};

/// Fine-grained instruction theme of a transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    Startup,
    Pushback,
    Taxi,
    HoldShort,
    LineUp,
    TakeoffClearance,
    InitialClimb,
    FrequencyChange,
    AltitudeChange,
    HeadingAssignment,
    SpeedControl,
    DirectRouting,
    ApproachClearance,
    LandingClearance,
    GoAround,
    VacateRunway,
}

impl Subcategory {
    pub const ALL: [Subcategory; 16] = [
        Subcategory::Startup,
        Subcategory::Pushback,
        Subcategory::Taxi,
        Subcategory::HoldShort,
        Subcategory::LineUp,
        Subcategory::TakeoffClearance,
        Subcategory::InitialClimb,
        Subcategory::FrequencyChange,
        Subcategory::AltitudeChange,
        Subcategory::HeadingAssignment,
        Subcategory::SpeedControl,
        Subcategory::DirectRouting,
        Subcategory::ApproachClearance,
        Subcategory::LandingClearance,
        Subcategory::GoAround,
        Subcategory::VacateRunway,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subcategory::Startup => "startup",
            Subcategory::Pushback => "pushback",
            Subcategory::Taxi => "taxi",
            Subcategory::HoldShort => "hold_short",
            Subcategory::LineUp => "line_up",
            Subcategory::TakeoffClearance => "takeoff_clearance",
            Subcategory::InitialClimb => "initial_climb",
            Subcategory::FrequencyChange => "frequency_change",
            Subcategory::AltitudeChange => "altitude_change",
            Subcategory::HeadingAssignment => "heading_assignment",
            Subcategory::SpeedControl => "speed_control",
            Subcategory::DirectRouting => "direct_routing",
            Subcategory::ApproachClearance => "approach_clearance",
            Subcategory::LandingClearance => "landing_clearance",
            Subcategory::GoAround => "go_around",
            Subcategory::VacateRunway => "vacate_runway",
        }
    }

    pub fn category(self) -> Category {
        use Subcategory::*;
        match self {
            Startup | Pushback | Taxi | HoldShort => Category::Ground,
            LineUp | TakeoffClearance | InitialClimb => Category::Departure,
            FrequencyChange | AltitudeChange | HeadingAssignment | SpeedControl
            | DirectRouting => Category::Enroute,
            ApproachClearance => Category::Arrival,
            LandingClearance | GoAround | VacateRunway => Category::Landing,
        }
    }

    pub fn controller_position(self) -> ControllerPosition {
        use Subcategory::*;
        match self {
            Startup => ControllerPosition::Clearance,
            Pushback | Taxi | HoldShort => ControllerPosition::Ground,
            LineUp | TakeoffClearance | InitialClimb | LandingClearance | GoAround
            | VacateRunway => ControllerPosition::Tower,
            FrequencyChange => ControllerPosition::Departure,
            AltitudeChange | DirectRouting => ControllerPosition::Center,
            HeadingAssignment | SpeedControl | ApproachClearance => ControllerPosition::Approach,
        }
    }

    pub fn flight_phase(self) -> FlightPhase {
        use Subcategory::*;
        match self {
            Startup | Pushback => FlightPhase::Preflight,
            Taxi | HoldShort => FlightPhase::TaxiOut,
            LineUp | TakeoffClearance => FlightPhase::Departure,
            InitialClimb => FlightPhase::Climb,
            FrequencyChange | AltitudeChange | DirectRouting => FlightPhase::Cruise,
            HeadingAssignment | SpeedControl | ApproachClearance => FlightPhase::Approach,
            LandingClearance | GoAround => FlightPhase::Landing,
            VacateRunway => FlightPhase::TaxiIn,
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "vacate" is the short label some content sets use
        if s == "vacate" {
            return Ok(Subcategory::VacateRunway);
        }
        Self::ALL
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSubcategory(s.to_string()))
    }
}
