//! Scenario builders, one per branch.
//!
//! A builder appends instructions, transmission clauses, readback clauses
//! and critical element codes to a [`Composition`]. Steps whose instruction
//! type is not configured are skipped.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use std::collections::HashMap;

use crate::models::{Difficulty, FlightPhase, Instruction, InstructionType, InstructionValue};
use crate::phonetics::runway_to_phonetic;
use crate::reference::codes;
use crate::subcategory::Subcategory;
use crate::values;

/// Builder signature shared by every branch.
pub type BranchBuilder = fn(&mut Composition<'_>, &mut dyn RngCore);

/// The scenario shapes the composer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Taxi,
    TakeoffClearance,
    LandingClearance,
    AltitudeChange,
    HeadingAssignment,
    FrequencyChange,
    ApproachClearance,
    HoldShort,
    LineUp,
    /// Single altitude assignment for subcategories without a dedicated shape
    GenericAltitude,
}

impl Branch {
    pub fn builder(self) -> BranchBuilder {
        match self {
            Branch::Taxi => build_taxi,
            Branch::TakeoffClearance => build_takeoff,
            Branch::LandingClearance => build_landing,
            Branch::AltitudeChange => build_altitude_change,
            Branch::HeadingAssignment => build_heading,
            Branch::FrequencyChange => build_frequency_change,
            Branch::ApproachClearance => build_approach,
            Branch::HoldShort => build_hold_short,
            Branch::LineUp => build_line_up,
            Branch::GenericAltitude => build_generic_altitude,
        }
    }
}

impl From<Subcategory> for Branch {
    fn from(sub: Subcategory) -> Self {
        match sub {
            Subcategory::Taxi => Branch::Taxi,
            Subcategory::TakeoffClearance => Branch::TakeoffClearance,
            Subcategory::LandingClearance => Branch::LandingClearance,
            Subcategory::AltitudeChange => Branch::AltitudeChange,
            Subcategory::HeadingAssignment => Branch::HeadingAssignment,
            Subcategory::FrequencyChange => Branch::FrequencyChange,
            Subcategory::ApproachClearance => Branch::ApproachClearance,
            Subcategory::HoldShort => Branch::HoldShort,
            Subcategory::LineUp => Branch::LineUp,
            Subcategory::Startup
            | Subcategory::Pushback
            | Subcategory::InitialClimb
            | Subcategory::SpeedControl
            | Subcategory::DirectRouting
            | Subcategory::GoAround
            | Subcategory::VacateRunway => Branch::GenericAltitude,
        }
    }
}

/// Working state of one scenario while its branch builder runs.
pub struct Composition<'a> {
    types: &'a HashMap<String, InstructionType>,
    pub difficulty: Difficulty,
    pub flight_phase: FlightPhase,
    pub runway: String,
    /// Target instruction count drawn from the tier range
    pub target: u32,
    pub instructions: Vec<Instruction>,
    pub transmission: Vec<String>,
    pub readback: Vec<String>,
    pub critical_elements: Vec<String>,
}

impl<'a> Composition<'a> {
    pub fn new(
        types: &'a HashMap<String, InstructionType>,
        difficulty: Difficulty,
        flight_phase: FlightPhase,
        runway: String,
        target: u32,
    ) -> Self {
        Self {
            types,
            difficulty,
            flight_phase,
            runway,
            target,
            instructions: Vec::new(),
            transmission: Vec::new(),
            readback: Vec::new(),
            critical_elements: Vec::new(),
        }
    }

    /// Append an instruction of type `code`.
    ///
    /// Returns false, leaving the composition untouched, when no instruction
    /// type with that code is configured.
    pub fn push(&mut self, code: &str, value: InstructionValue) -> bool {
        let Some(instruction_type) = self.types.get(code) else {
            tracing::debug!(code, "instruction type not configured, skipping step");
            return false;
        };
        self.instructions.push(Instruction {
            instruction_type: instruction_type.id.clone(),
            sequence: self.instructions.len() as u32 + 1,
            raw_value: value.raw,
            display_text: value.display,
            phonetic_text: value.phonetic,
            readback_text: value.readback,
            unit: value.unit,
            is_conditional: false,
            condition_text: None,
        });
        true
    }

    fn say(&mut self, clause: impl Into<String>) {
        self.transmission.push(clause.into());
    }

    /// Close the previous transmission clause with a comma.
    fn end_clause(&mut self) {
        if let Some(last) = self.transmission.last_mut() {
            if !last.ends_with(',') {
                last.push(',');
            }
        }
    }

    fn read_back(&mut self, clause: impl Into<String>) {
        self.readback.push(clause.into());
    }

    /// Clearances are read back first.
    fn read_back_first(&mut self, clause: impl Into<String>) {
        self.readback.insert(0, clause.into());
    }

    fn critical(&mut self, code: &str) {
        self.critical_elements.push(code.to_string());
    }

    fn runway_value(&self, prefix: &str, readback: String) -> InstructionValue {
        InstructionValue {
            raw: self.runway.clone(),
            display: format!("{} runway {}", prefix, self.runway),
            phonetic: format!("{} runway {}", prefix, runway_to_phonetic(&self.runway)),
            readback,
            unit: None,
        }
    }
}

// ========== GROUND ==========

fn build_taxi(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    let route = values::taxi_route(rng, c.difficulty);
    let display = format!("taxi to holding point runway {} {}", c.runway, route.display);
    let value = InstructionValue {
        phonetic: format!(
            "taxi to holding point runway {} {}",
            runway_to_phonetic(&c.runway),
            route.phonetic
        ),
        readback: format!("Taxi holding point runway {} {}", c.runway, route.readback),
        display: display.clone(),
        raw: route.raw,
        unit: None,
    };
    let readback = value.readback.clone();
    if c.push(codes::TAXI_INSTRUCTION, value) {
        c.say(display);
        c.read_back(readback);
    }

    if c.target > 1 {
        let readback = format!("hold short runway {}", c.runway);
        let value = c.runway_value("hold short", readback.clone());
        if c.push(codes::HOLD_SHORT, value) {
            c.end_clause();
            c.say(readback.clone());
            c.read_back(readback);
            c.critical(codes::HOLD_SHORT);
        }
    }
}

fn build_hold_short(c: &mut Composition<'_>, _rng: &mut dyn RngCore) {
    let value = c.runway_value("hold short", format!("hold short runway {}", c.runway));
    let display = value.display.clone();
    if c.push(codes::HOLD_SHORT, value) {
        c.say(display);
        let readback = format!("Hold short runway {}", c.runway);
        c.read_back(readback);
        c.critical(codes::HOLD_SHORT);
    }
}

// ========== RUNWAY ==========

/// A runway clearance phrase and how it is read back.
struct Clearance {
    code: &'static str,
    raw: &'static str,
    phrase: &'static str,
    readback: &'static str,
}

const TAKEOFF: Clearance = Clearance {
    code: codes::TAKEOFF_CLEARANCE,
    raw: "cleared_takeoff",
    phrase: "cleared for takeoff",
    readback: "Cleared for takeoff",
};

const LANDING: Clearance = Clearance {
    code: codes::LANDING_CLEARANCE,
    raw: "cleared_land",
    phrase: "cleared to land",
    readback: "Cleared to land",
};

/// Wind, runway, then the clearance itself.
fn runway_clearance(c: &mut Composition<'_>, rng: &mut dyn RngCore, clearance: &Clearance) {
    // Informational, no readback
    let wind = values::wind(rng);
    c.say(format!("{},", wind.clause()));

    let runway = InstructionValue {
        raw: c.runway.clone(),
        display: format!("runway {}", c.runway),
        phonetic: format!("runway {}", runway_to_phonetic(&c.runway)),
        readback: format!("runway {}", c.runway),
        unit: None,
    };
    let clause = runway.readback.clone();
    if c.push(codes::RUNWAY_ASSIGNMENT, runway) {
        c.say(format!("{},", clause));
        c.read_back(clause);
        c.critical(codes::RUNWAY_ASSIGNMENT);
    }

    if c.push(clearance.code, InstructionValue::verbatim(clearance.raw, clearance.phrase)) {
        c.say(clearance.phrase);
        c.read_back_first(clearance.readback);
        c.critical(clearance.code);
    }
}

fn build_takeoff(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    runway_clearance(c, rng, &TAKEOFF);
}

fn build_landing(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    runway_clearance(c, rng, &LANDING);
}

fn build_line_up(c: &mut Composition<'_>, _rng: &mut dyn RngCore) {
    let value = c.runway_value("line up and wait", format!("lining up runway {}", c.runway));
    let display = value.display.clone();
    if c.push(codes::LINE_UP, value) {
        c.say(display);
        let readback = format!("Lining up runway {}", c.runway);
        c.read_back(readback);
        c.critical(codes::LINE_UP);
    }
}

// ========== AIRBORNE ==========

/// Push a value whose transmission and readback clauses are its display
/// and readback forms.
fn push_plain(c: &mut Composition<'_>, code: &str, value: InstructionValue) -> bool {
    let display = value.display.clone();
    let readback = value.readback.clone();
    if !c.push(code, value) {
        return false;
    }
    c.say(display);
    c.read_back(readback);
    c.critical(code);
    true
}

fn build_altitude_change(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    let alt = values::altitude(rng, c.difficulty, c.flight_phase);
    let action = *["climb and maintain", "descend and maintain"]
        .choose(rng)
        .unwrap_or(&"climb and maintain");
    let verb = action.split_whitespace().next().unwrap_or(action);
    let value = InstructionValue {
        raw: alt.raw,
        display: format!("{} {}", action, alt.display),
        phonetic: format!("{} {}", action, alt.phonetic),
        readback: format!("{} {}", verb, alt.readback),
        unit: alt.unit,
    };
    push_plain(c, codes::ALTITUDE_ASSIGNMENT, value);

    if c.target > 1 && rng.random_bool(0.5) {
        let speed = values::speed(rng);
        push_plain(c, codes::SPEED_ASSIGNMENT, speed);
    }
}

fn build_heading(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    let direction = *["turn left", "turn right"].choose(rng).unwrap_or(&"turn left");
    let heading = values::heading(rng);
    let value = InstructionValue {
        raw: heading.raw,
        display: format!("{} {}", direction, heading.display),
        phonetic: format!("{} {}", direction, heading.phonetic),
        readback: format!("{} {}", direction, heading.readback),
        unit: heading.unit,
    };
    push_plain(c, codes::HEADING_ASSIGNMENT, value);
}

fn build_frequency_change(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    use crate::models::ControllerPosition::{Approach, Center, Departure, Tower};

    let next = *[Approach, Departure, Center, Tower].choose(rng).unwrap_or(&Approach);
    let freq = values::frequency(rng, next);
    let value = InstructionValue {
        raw: freq.raw,
        display: format!("contact {} {}", next, freq.display),
        phonetic: format!("contact {} {}", next, freq.phonetic),
        readback: format!("{} {}", next, freq.readback),
        unit: freq.unit,
    };
    push_plain(c, codes::FREQUENCY_CHANGE, value);
}

fn build_approach(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    let approach = values::approach_type(rng);
    let display = format!("cleared {} approach runway {}", approach.display, c.runway);
    let value = InstructionValue {
        raw: format!("{}_{}", approach.code, c.runway),
        phonetic: format!(
            "cleared {} approach runway {}",
            approach.phonetic,
            runway_to_phonetic(&c.runway)
        ),
        readback: display.clone(),
        display,
        unit: None,
    };
    if push_plain(c, codes::APPROACH_CLEARANCE, value) {
        // The runway is embedded in the clearance, not a separate instruction
        c.critical(codes::RUNWAY_ASSIGNMENT);
    }
}

/// Always a cruise altitude, whatever the subcategory's own flight phase.
fn build_generic_altitude(c: &mut Composition<'_>, rng: &mut dyn RngCore) {
    let alt = values::altitude(rng, c.difficulty, FlightPhase::Cruise);
    push_plain(c, codes::ALTITUDE_ASSIGNMENT, alt);
}
