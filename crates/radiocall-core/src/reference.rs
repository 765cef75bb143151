//! Built-in reference data: instruction types, callsign templates, error
//! templates and the value tables the generators draw from.

use crate::models::{
    CallsignTemplate, Category, ControllerPosition, Difficulty, InstructionType, Severity,
};

/// Instruction type codes the composer looks up.
pub mod codes {
    pub const RUNWAY_ASSIGNMENT: &str = "runway_assignment";
    pub const TAKEOFF_CLEARANCE: &str = "takeoff_clearance";
    pub const LANDING_CLEARANCE: &str = "landing_clearance";
    pub const LINE_UP: &str = "line_up";
    pub const HOLD_SHORT: &str = "hold_short";
    pub const ALTITUDE_ASSIGNMENT: &str = "altitude_assignment";
    pub const HEADING_ASSIGNMENT: &str = "heading_assignment";
    pub const SPEED_ASSIGNMENT: &str = "speed_assignment";
    pub const FREQUENCY_CHANGE: &str = "frequency_change";
    pub const TAXI_INSTRUCTION: &str = "taxi_instruction";
    pub const APPROACH_CLEARANCE: &str = "approach_clearance";
}

// ========== INSTRUCTION TYPES ==========

/// (code, display name, category, requires readback, critical, weight, description, example)
struct TypeSpec(
    &'static str,
    &'static str,
    Category,
    bool,
    bool,
    f64,
    &'static str,
    &'static str,
);

const INSTRUCTION_TYPES: &[TypeSpec] = &[
    // Runway operations
    TypeSpec("runway_assignment", "Runway Assignment", Category::Ground, true, true, 1.0,
        "Assignment of a runway for takeoff or landing", "runway 25L"),
    TypeSpec("takeoff_clearance", "Takeoff Clearance", Category::Departure, true, true, 1.0,
        "Clearance to take off", "cleared for takeoff"),
    TypeSpec("landing_clearance", "Landing Clearance", Category::Landing, true, true, 1.0,
        "Clearance to land", "cleared to land"),
    TypeSpec("line_up", "Line Up / Position and Hold", Category::Departure, true, true, 1.0,
        "Instruction to enter runway and wait", "line up runway 25L"),
    TypeSpec("hold_short", "Hold Short", Category::Ground, true, true, 1.0,
        "Instruction to hold short of a runway or taxiway", "hold short runway 07R"),
    TypeSpec("crossing_clearance", "Runway Crossing Clearance", Category::Ground, true, true, 1.0,
        "Clearance to cross an active runway", "cross runway 25R"),
    // Vertical and lateral
    TypeSpec("altitude_assignment", "Altitude Assignment", Category::Enroute, true, true, 0.95,
        "Climb or descend to a specific altitude or flight level",
        "climb and maintain flight level 350"),
    TypeSpec("altitude_restriction", "Altitude Restriction", Category::Enroute, true, true, 0.9,
        "Altitude restrictions (at or above, at or below)", "descend to reach 4000 feet by ALPHA"),
    TypeSpec("heading_assignment", "Heading Assignment", Category::Enroute, true, true, 0.9,
        "Turn to a specific heading", "turn right heading 090"),
    TypeSpec("speed_assignment", "Speed Assignment", Category::Enroute, true, true, 0.85,
        "Speed instruction or restriction", "reduce speed 220 knots"),
    TypeSpec("frequency_change", "Frequency Change", Category::Enroute, true, true, 0.9,
        "Handoff to another controller frequency", "contact approach 119.850"),
    TypeSpec("squawk_code", "Squawk/Transponder Code", Category::Enroute, true, true, 0.85,
        "Transponder code assignment", "squawk 4521"),
    // Ground movement
    TypeSpec("taxi_instruction", "Taxi Instruction", Category::Ground, true, false, 0.7,
        "Taxi route via taxiways", "taxi via Alpha, Bravo, hold short runway 25L"),
    TypeSpec("pushback_approved", "Pushback Approval", Category::Ground, true, false, 0.6,
        "Clearance to push back from gate", "pushback approved, facing west"),
    TypeSpec("startup_approved", "Startup Approval", Category::Ground, true, false, 0.5,
        "Clearance to start engines", "startup approved"),
    // Arrival
    TypeSpec("approach_clearance", "Approach Clearance", Category::Arrival, true, true, 0.95,
        "Clearance for an instrument approach", "cleared ILS approach runway 25L"),
    TypeSpec("go_around", "Go Around", Category::Landing, true, true, 1.0,
        "Instruction to abort landing and go around", "go around, climb 3000 feet"),
    // Information only
    TypeSpec("wind_information", "Wind Information", Category::Departure, false, false, 0.0,
        "Current wind conditions", "wind 270 degrees 8 knots"),
    TypeSpec("traffic_information", "Traffic Information", Category::Enroute, false, false, 0.0,
        "Traffic advisory", "traffic 2 o'clock, 5 miles, opposite direction"),
    TypeSpec("atis_information", "ATIS Information", Category::Ground, false, false, 0.0,
        "ATIS information letter", "information Charlie"),
    TypeSpec("altimeter_setting", "Altimeter Setting", Category::Enroute, true, false, 0.6,
        "QNH or altimeter pressure setting", "QNH 1013"),
    // Procedures
    TypeSpec("sid_assignment", "SID Assignment", Category::Departure, true, true, 0.85,
        "Standard Instrument Departure assignment", "cleared TOBAK 1 Alpha departure"),
    TypeSpec("star_assignment", "STAR Assignment", Category::Arrival, true, true, 0.85,
        "Standard Terminal Arrival Route assignment", "cleared RILAX 2 Bravo arrival"),
    TypeSpec("direct_to", "Direct To", Category::Enroute, true, true, 0.8,
        "Direct routing to a waypoint", "proceed direct ROMEO"),
    TypeSpec("vacate_instruction", "Vacate Runway", Category::Landing, true, false, 0.5,
        "Instruction to exit the runway", "vacate left Alpha"),
];

/// Default instruction types with sequential ids starting at "1".
pub fn default_instruction_types() -> Vec<InstructionType> {
    INSTRUCTION_TYPES
        .iter()
        .enumerate()
        .map(|(i, t)| InstructionType {
            id: (i + 1).to_string(),
            code: t.0.to_string(),
            display_name: t.1.to_string(),
            category: t.2,
            requires_readback: t.3,
            is_critical: t.4,
            grading_weight: t.5,
            description: t.6.to_string(),
            example_phrase: t.7.to_string(),
        })
        .collect()
}

// ========== CALLSIGN TEMPLATES ==========

struct AirlineSpec {
    code: &'static str,
    callsign: &'static str,
    region: &'static str,
    difficulty: Difficulty,
    phonetic_template: &'static str,
}

const AIRLINES: &[AirlineSpec] = &[
    AirlineSpec { code: "DLH", callsign: "Lufthansa", region: "DACH", difficulty: Difficulty::SuperEasy, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "EWG", callsign: "Eurowings", region: "DACH", difficulty: Difficulty::Easy, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "CFG", callsign: "Condor", region: "DACH", difficulty: Difficulty::Easy, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "AUA", callsign: "Austrian", region: "DACH", difficulty: Difficulty::Easy, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "SWR", callsign: "Swiss", region: "DACH", difficulty: Difficulty::Easy, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "EDW", callsign: "Edelweiss", region: "DACH", difficulty: Difficulty::Medium, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "BAW", callsign: "Speedbird", region: "EU", difficulty: Difficulty::Medium, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "AFR", callsign: "Air France", region: "EU", difficulty: Difficulty::Medium, phonetic_template: "{airline} {number_individual}" },
    AirlineSpec { code: "KLM", callsign: "KLM", region: "EU", difficulty: Difficulty::Easy, phonetic_template: "K L M {number_individual}" },
];

struct RegistrationSpec {
    pattern: &'static str,
    region: &'static str,
    difficulty: Difficulty,
    phonetic_template: &'static str,
}

const REGISTRATIONS: &[RegistrationSpec] = &[
    RegistrationSpec { pattern: "D-{registration}", region: "DACH", difficulty: Difficulty::Medium, phonetic_template: "Delta {registration_phonetic}" },
    RegistrationSpec { pattern: "OE-{registration}", region: "DACH", difficulty: Difficulty::Medium, phonetic_template: "Oscar Echo {registration_phonetic}" },
    RegistrationSpec { pattern: "HB-{registration}", region: "DACH", difficulty: Difficulty::Medium, phonetic_template: "Hotel Bravo {registration_phonetic}" },
    RegistrationSpec { pattern: "N{number}{letters}", region: "US", difficulty: Difficulty::Hard, phonetic_template: "November {number_individual} {letters_phonetic}" },
];

/// Default airline and registration callsign templates.
pub fn default_callsign_templates() -> Vec<CallsignTemplate> {
    let airlines = AIRLINES.iter().map(|a| CallsignTemplate {
        airline_code: Some(a.code.to_string()),
        airline_callsign: Some(a.callsign.to_string()),
        format_pattern: "{airline} {number}".to_string(),
        region: a.region.to_string(),
        difficulty: a.difficulty,
        is_registration_based: false,
        phonetic_template: a.phonetic_template.to_string(),
    });
    let registrations = REGISTRATIONS.iter().map(|r| CallsignTemplate {
        airline_code: None,
        airline_callsign: None,
        format_pattern: r.pattern.to_string(),
        region: r.region.to_string(),
        difficulty: r.difficulty,
        is_registration_based: true,
        phonetic_template: r.phonetic_template.to_string(),
    });
    airlines.chain(registrations).collect()
}

// ========== COMMON ERRORS ==========

/// Canned readback mistake for an instruction type.
#[derive(Debug, Clone, Copy)]
pub struct ErrorTemplate {
    pub error_code: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub example: &'static str,
    pub feedback_text: &'static str,
}

const RUNWAY_ERRORS: &[ErrorTemplate] = &[
    ErrorTemplate {
        error_code: "omit_runway",
        severity: Severity::Critical,
        description: "Pilot omits runway designator from readback",
        example: "Cleared for takeoff, Lufthansa 450",
        feedback_text: "CRITICAL: You must always read back the runway assignment. Wrong runway = potential disaster.",
    },
    ErrorTemplate {
        error_code: "wrong_runway_number",
        severity: Severity::Critical,
        description: "Pilot reads back incorrect runway number",
        example: "Runway 25R instead of 25L",
        feedback_text: "CRITICAL: Wrong runway! This is a potential runway incursion.",
    },
    ErrorTemplate {
        error_code: "omit_runway_designator",
        severity: Severity::Critical,
        description: "Pilot omits L/R/C designator",
        example: "Runway 25 instead of 25L",
        feedback_text: "You must include the L/R/C designator when present.",
    },
];

const ALTITUDE_ERRORS: &[ErrorTemplate] = &[
    ErrorTemplate {
        error_code: "wrong_altitude",
        severity: Severity::Critical,
        description: "Pilot reads back incorrect altitude",
        example: "Flight level 320 instead of FL350",
        feedback_text: "CRITICAL: Wrong altitude! This could cause a TCAS event or collision.",
    },
    ErrorTemplate {
        error_code: "omit_altitude",
        severity: Severity::Critical,
        description: "Pilot omits altitude from readback",
        example: "Climbing, Lufthansa 450",
        feedback_text: "CRITICAL: Always read back altitude assignments.",
    },
    ErrorTemplate {
        error_code: "fl_vs_feet_confusion",
        severity: Severity::Major,
        description: "Confusing flight level with feet",
        example: "35000 feet instead of FL350",
        feedback_text: "Above transition altitude, use Flight Level, not feet.",
    },
];

const HEADING_ERRORS: &[ErrorTemplate] = &[
    ErrorTemplate {
        error_code: "wrong_heading",
        severity: Severity::Critical,
        description: "Pilot reads back incorrect heading",
        example: "Heading 270 instead of 090",
        feedback_text: "CRITICAL: Wrong heading! You could be flying the opposite direction.",
    },
    ErrorTemplate {
        error_code: "omit_heading",
        severity: Severity::Critical,
        description: "Pilot omits heading from readback",
        example: "",
        feedback_text: "Always read back heading assignments.",
    },
];

const FREQUENCY_ERRORS: &[ErrorTemplate] = &[
    ErrorTemplate {
        error_code: "wrong_frequency",
        severity: Severity::Critical,
        description: "Pilot reads back incorrect frequency",
        example: "119.850 instead of 119.580",
        feedback_text: "Wrong frequency! You won't be able to contact the next controller.",
    },
    ErrorTemplate {
        error_code: "omit_frequency",
        severity: Severity::Major,
        description: "Pilot doesn't read back frequency",
        example: "",
        feedback_text: "Read back frequencies to confirm you have them correct.",
    },
];

const SQUAWK_ERRORS: &[ErrorTemplate] = &[ErrorTemplate {
    error_code: "wrong_squawk",
    severity: Severity::Critical,
    description: "Pilot reads back incorrect transponder code",
    example: "Squawk 4512 instead of 4521",
    feedback_text: "Wrong squawk code! Controller won't be able to identify you.",
}];

const HOLD_SHORT_ERRORS: &[ErrorTemplate] = &[
    ErrorTemplate {
        error_code: "omit_hold_short",
        severity: Severity::Critical,
        description: "Pilot doesn't acknowledge hold short",
        example: "",
        feedback_text: "CRITICAL: You MUST acknowledge hold short instructions. This prevents runway incursions.",
    },
    ErrorTemplate {
        error_code: "continue_instead_hold",
        severity: Severity::Critical,
        description: "Pilot misunderstands as continue",
        example: "",
        feedback_text: "CRITICAL: Hold short means STOP. Do not enter the runway.",
    },
];

/// Error templates for an instruction type code, most common first.
pub fn common_errors(code: &str) -> &'static [ErrorTemplate] {
    match code {
        "runway_assignment" => RUNWAY_ERRORS,
        "altitude_assignment" => ALTITUDE_ERRORS,
        "heading_assignment" => HEADING_ERRORS,
        "frequency_change" => FREQUENCY_ERRORS,
        "squawk_code" => SQUAWK_ERRORS,
        "hold_short" => HOLD_SHORT_ERRORS,
        _ => &[],
    }
}

// ========== VALUE TABLES ==========

/// Fallback when an airport has no usable runway data.
pub const DEFAULT_RUNWAYS: &str = "07L/25R, 07R/25L";

/// Published frequencies (DACH region) for a controller position.
pub fn frequencies(position: ControllerPosition) -> &'static [&'static str] {
    match position {
        ControllerPosition::Tower => &["118.500", "119.900", "120.775", "118.025", "121.100"],
        ControllerPosition::Ground => &["121.850", "121.900", "121.750", "121.650", "121.975"],
        ControllerPosition::Approach => &["119.850", "120.150", "121.025", "118.950", "120.350"],
        ControllerPosition::Departure => &["120.775", "125.350", "121.225", "119.225", "120.125"],
        ControllerPosition::Center => &["132.475", "133.650", "125.750", "127.725", "134.225"],
        ControllerPosition::Clearance => &["121.775", "121.825", "121.925", "118.025", "121.700"],
    }
}

pub const TAXIWAYS: &[&str] = &[
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliet",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
];

/// Instrument and visual approach procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachType {
    pub code: &'static str,
    pub display: &'static str,
    pub phonetic: &'static str,
}

pub const APPROACH_TYPES: &[ApproachType] = &[
    ApproachType { code: "ILS", display: "ILS", phonetic: "I L S" },
    ApproachType { code: "VOR", display: "VOR", phonetic: "V O R" },
    ApproachType { code: "RNAV", display: "RNAV", phonetic: "R-NAV" },
    ApproachType { code: "NDB", display: "NDB", phonetic: "N D B" },
    ApproachType { code: "VISUAL", display: "visual", phonetic: "visual" },
];

/// Indicated airspeeds, knots.
pub const SPEEDS_KT: &[u32] = &[160, 180, 200, 210, 220, 230, 250, 280, 300, 320];

/// Flight levels offered to beginners.
pub const BEGINNER_FLIGHT_LEVELS: &[u32] = &[100, 120, 150, 180, 200, 250, 280, 300, 320, 350];

/// Altitudes in feet offered to beginners.
pub const BEGINNER_ALTITUDES_FT: &[u32] = &[2000, 3000, 4000, 5000, 6000];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_instruction_type_codes_unique() {
        let types = default_instruction_types();
        let codes: HashSet<_> = types.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes.len(), types.len());
    }

    #[test]
    fn test_composer_codes_present() {
        let types = default_instruction_types();
        for code in [
            codes::RUNWAY_ASSIGNMENT,
            codes::TAKEOFF_CLEARANCE,
            codes::LANDING_CLEARANCE,
            codes::LINE_UP,
            codes::HOLD_SHORT,
            codes::ALTITUDE_ASSIGNMENT,
            codes::HEADING_ASSIGNMENT,
            codes::SPEED_ASSIGNMENT,
            codes::FREQUENCY_CHANGE,
            codes::TAXI_INSTRUCTION,
            codes::APPROACH_CLEARANCE,
        ] {
            assert!(types.iter().any(|t| t.code == code), "missing {}", code);
        }
    }

    #[test]
    fn test_information_types_need_no_readback() {
        let types = default_instruction_types();
        let wind = types.iter().find(|t| t.code == "wind_information").unwrap();
        assert!(!wind.requires_readback);
        assert_eq!(wind.grading_weight, 0.0);
    }

    #[test]
    fn test_callsign_templates_cover_super_easy() {
        let templates = default_callsign_templates();
        assert!(templates.iter().any(|t| t.difficulty == Difficulty::SuperEasy));
        assert_eq!(templates.iter().filter(|t| t.is_registration_based).count(), 4);
    }

    #[test]
    fn test_common_errors_lookup() {
        assert_eq!(common_errors("runway_assignment")[0].error_code, "omit_runway");
        assert_eq!(common_errors("hold_short").len(), 2);
        assert!(common_errors("taxi_instruction").is_empty());
    }
}
