//! Instruction value generators.
//!
//! Each generator draws one concrete value from the supplied random source
//! and renders it as an [`InstructionValue`].

use rand::seq::{index, IndexedRandom};
use rand::Rng;

use crate::models::{Airport, ControllerPosition, Difficulty, FlightPhase, InstructionValue};
use crate::phonetics::{digits_to_phonetic, frequency_to_phonetic};
use crate::reference::{
    ApproachType, APPROACH_TYPES, BEGINNER_ALTITUDES_FT, BEGINNER_FLIGHT_LEVELS, DEFAULT_RUNWAYS,
    SPEEDS_KT, TAXIWAYS,
};

/// Surface wind report. Informational, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wind {
    pub direction_deg: u32,
    pub speed_kt: u32,
}

impl Wind {
    /// `"wind 250 degrees 12 knots"`
    pub fn clause(&self) -> String {
        format!("wind {:03} degrees {} knots", self.direction_deg, self.speed_kt)
    }
}

fn runway_pairs(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect()
}

/// Pick one runway end from the airport's runway pairs.
///
/// A `"07L/25R"` pair is always resolved to a single end. Missing or
/// unusable runway data falls back to [`DEFAULT_RUNWAYS`].
pub fn runway<R: Rng + ?Sized>(rng: &mut R, airport: &Airport) -> String {
    let mut pairs = airport
        .runways_available
        .as_deref()
        .map(runway_pairs)
        .unwrap_or_default();
    if pairs.is_empty() {
        pairs = runway_pairs(DEFAULT_RUNWAYS);
    }

    let pair = pairs.choose(rng).copied().unwrap_or("25L");
    let ends: Vec<&str> = pair
        .split('/')
        .map(str::trim)
        .filter(|end| !end.is_empty())
        .collect();
    ends.choose(rng).copied().unwrap_or(pair).to_string()
}

/// Assigned altitude: a flight level in climb/cruise/descent, feet otherwise.
pub fn altitude<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Difficulty,
    phase: FlightPhase,
) -> InstructionValue {
    if phase.uses_flight_levels() {
        let fl = if difficulty.is_beginner() {
            *BEGINNER_FLIGHT_LEVELS.choose(rng).unwrap_or(&100)
        } else {
            rng.random_range(80..=410) / 10 * 10
        };
        InstructionValue {
            raw: (fl * 100).to_string(),
            display: format!("flight level {}", fl),
            phonetic: format!("flight level {}", digits_to_phonetic(&fl.to_string(), true)),
            readback: format!("FL{}", fl),
            unit: Some("FL".to_string()),
        }
    } else {
        let feet = if difficulty.is_beginner() {
            *BEGINNER_ALTITUDES_FT.choose(rng).unwrap_or(&3000)
        } else {
            rng.random_range(15..=90) * 100
        };
        InstructionValue {
            raw: feet.to_string(),
            display: format!("{} feet", feet),
            phonetic: format!("{} feet", digits_to_phonetic(&feet.to_string(), true)),
            readback: format!("{} feet", feet),
            unit: Some("feet".to_string()),
        }
    }
}

/// Magnetic heading, a multiple of ten between 010 and 360.
pub fn heading<R: Rng + ?Sized>(rng: &mut R) -> InstructionValue {
    let heading = format!("{:03}", rng.random_range(1..=36u32) * 10);
    InstructionValue {
        display: format!("heading {}", heading),
        phonetic: format!("heading {}", digits_to_phonetic(&heading, true)),
        readback: format!("heading {}", heading),
        unit: Some("degrees".to_string()),
        raw: heading,
    }
}

pub fn speed<R: Rng + ?Sized>(rng: &mut R) -> InstructionValue {
    let speed = *SPEEDS_KT.choose(rng).unwrap_or(&250);
    InstructionValue {
        raw: speed.to_string(),
        display: format!("speed {} knots", speed),
        phonetic: format!("speed {} knots", digits_to_phonetic(&speed.to_string(), true)),
        readback: format!("speed {} knots", speed),
        unit: Some("knots".to_string()),
    }
}

/// A published frequency for `position`.
pub fn frequency<R: Rng + ?Sized>(rng: &mut R, position: ControllerPosition) -> InstructionValue {
    let freq = crate::reference::frequencies(position)
        .choose(rng)
        .copied()
        .unwrap_or("121.500");
    InstructionValue {
        raw: freq.to_string(),
        display: freq.to_string(),
        phonetic: frequency_to_phonetic(freq),
        readback: freq.to_string(),
        unit: Some("MHz".to_string()),
    }
}

/// Transponder code, four octal digits.
pub fn squawk<R: Rng + ?Sized>(rng: &mut R) -> InstructionValue {
    let code: String = (0..4)
        .map(|_| char::from(b'0' + rng.random_range(0..=7u8)))
        .collect();
    InstructionValue {
        display: format!("squawk {}", code),
        phonetic: format!("squawk {}", digits_to_phonetic(&code, true)),
        readback: format!("squawk {}", code),
        unit: None,
        raw: code,
    }
}

/// Number of taxiways in a route at `difficulty`.
fn taxiway_count<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::SuperEasy => 1,
        Difficulty::Easy => rng.random_range(1..=2),
        Difficulty::Medium => rng.random_range(2..=3),
        Difficulty::Hard => rng.random_range(2..=4),
    }
}

/// Taxi route of distinct taxiways, read out in the sampled order.
pub fn taxi_route<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> InstructionValue {
    let count = taxiway_count(rng, difficulty).min(TAXIWAYS.len());
    let route = index::sample(rng, TAXIWAYS.len(), count)
        .into_iter()
        .map(|i| TAXIWAYS[i])
        .collect::<Vec<_>>()
        .join(", ");
    let text = format!("via {}", route);
    InstructionValue {
        raw: route,
        display: text.clone(),
        phonetic: text.clone(),
        readback: text,
        unit: None,
    }
}

pub fn wind<R: Rng + ?Sized>(rng: &mut R) -> Wind {
    Wind {
        direction_deg: rng.random_range(1..=36) * 10,
        speed_kt: rng.random_range(3..=20),
    }
}

pub fn approach_type<R: Rng + ?Sized>(rng: &mut R) -> ApproachType {
    APPROACH_TYPES.choose(rng).copied().unwrap_or(APPROACH_TYPES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn airport(runways: Option<&str>) -> Airport {
        Airport {
            id: "1".to_string(),
            icao: Some("EDDF".to_string()),
            name: None,
            runways_available: runways.map(str::to_string),
        }
    }

    #[test]
    fn test_runway_resolves_single_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let apt = airport(Some("07C/25C, 18/36"));
        for _ in 0..50 {
            let rwy = runway(&mut rng, &apt);
            assert!(["07C", "25C", "18", "36"].contains(&rwy.as_str()), "{}", rwy);
        }
    }

    #[test]
    fn test_runway_fallbacks() {
        let mut rng = StdRng::seed_from_u64(42);
        for apt in [airport(None), airport(Some("")), airport(Some(" , "))] {
            let rwy = runway(&mut rng, &apt);
            assert!(["07L", "25R", "07R", "25L"].contains(&rwy.as_str()), "{}", rwy);
        }
    }

    #[test]
    fn test_flight_level_for_cruise() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let alt = altitude(&mut rng, Difficulty::Hard, FlightPhase::Cruise);
            let fl: u32 = alt.readback.trim_start_matches("FL").parse().unwrap();
            assert!((80..=410).contains(&fl));
            assert_eq!(fl % 10, 0);
            assert_eq!(alt.raw, (fl * 100).to_string());
            assert_eq!(alt.unit.as_deref(), Some("FL"));
        }
    }

    #[test]
    fn test_beginner_flight_levels_curated() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let alt = altitude(&mut rng, Difficulty::SuperEasy, FlightPhase::Cruise);
            let fl: u32 = alt.readback.trim_start_matches("FL").parse().unwrap();
            assert!(BEGINNER_FLIGHT_LEVELS.contains(&fl));
        }
    }

    #[test]
    fn test_feet_below_transition() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let alt = altitude(&mut rng, Difficulty::Medium, FlightPhase::Approach);
            let feet: u32 = alt.raw.parse().unwrap();
            assert!((1500..=9000).contains(&feet));
            assert_eq!(feet % 100, 0);
            assert_eq!(alt.readback, format!("{} feet", feet));
        }
        let alt = altitude(&mut rng, Difficulty::Easy, FlightPhase::Landing);
        assert!(BEGINNER_ALTITUDES_FT.contains(&alt.raw.parse().unwrap()));
    }

    #[test]
    fn test_heading_is_three_digits() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let hdg = heading(&mut rng);
            assert_eq!(hdg.raw.len(), 3);
            let value: u32 = hdg.raw.parse().unwrap();
            assert!((10..=360).contains(&value));
            assert_eq!(value % 10, 0);
            assert_eq!(hdg.readback, format!("heading {}", hdg.raw));
        }
    }

    #[test]
    fn test_speed_from_curated_set() {
        let mut rng = StdRng::seed_from_u64(5);
        let spd = speed(&mut rng);
        assert!(SPEEDS_KT.contains(&spd.raw.parse().unwrap()));
        assert!(spd.phonetic.ends_with(" knots"));
    }

    #[test]
    fn test_frequency_for_position() {
        let mut rng = StdRng::seed_from_u64(6);
        let freq = frequency(&mut rng, ControllerPosition::Ground);
        assert!(crate::reference::frequencies(ControllerPosition::Ground).contains(&freq.raw.as_str()));
        assert!(freq.phonetic.contains(" decimal "));
    }

    #[test]
    fn test_squawk_is_octal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = squawk(&mut rng);
            assert_eq!(code.raw.len(), 4);
            assert!(code.raw.chars().all(|c| ('0'..='7').contains(&c)));
            assert_eq!(code.display, format!("squawk {}", code.raw));
        }
    }

    #[test]
    fn test_taxi_route_lengths() {
        let mut rng = StdRng::seed_from_u64(8);
        for (difficulty, min, max) in [
            (Difficulty::SuperEasy, 1, 1),
            (Difficulty::Easy, 1, 2),
            (Difficulty::Medium, 2, 3),
            (Difficulty::Hard, 2, 4),
        ] {
            for _ in 0..30 {
                let route = taxi_route(&mut rng, difficulty);
                let names: Vec<_> = route.raw.split(", ").collect();
                assert!(names.len() >= min && names.len() <= max);
                let distinct: HashSet<_> = names.iter().collect();
                assert_eq!(distinct.len(), names.len());
                assert_eq!(route.display, format!("via {}", route.raw));
            }
        }
    }

    #[test]
    fn test_wind_clause() {
        let wind = Wind { direction_deg: 90, speed_kt: 7 };
        assert_eq!(wind.clause(), "wind 090 degrees 7 knots");
    }
}
