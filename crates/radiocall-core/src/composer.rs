//! Scenario composition.
//!
//! [`RadiocallGenerator`] owns the reference data and turns one random draw
//! into a complete [`RadiocallBundle`]: the controller transmission, its
//! instructions, the expected readback, acceptable variations and the
//! common mistakes to grade against.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use std::collections::{BTreeSet, HashMap};

use crate::branches::{Branch, Composition};
use crate::callsign::CallsignSynthesizer;
use crate::error::GeneratorError;
use crate::models::{
    AcceptableVariation, Airport, CallsignTemplate, CommonError, Difficulty, Instruction,
    InstructionType, Radiocall, RadiocallBundle,
};
use crate::reference::common_errors;
use crate::subcategory::Subcategory;
use crate::values;

const REVERSED_ORDER_NOTE: &str = "Callsign first, reversed order";

/// Generates radiocall scenarios from a fixed set of reference data.
#[derive(Debug, Clone)]
pub struct RadiocallGenerator {
    airports: Vec<Airport>,
    types_by_code: HashMap<String, InstructionType>,
    types_by_id: HashMap<String, InstructionType>,
    callsigns: CallsignSynthesizer,
}

impl RadiocallGenerator {
    /// Build a generator.
    ///
    /// Fails on an empty airport list, on duplicate instruction type codes or
    /// ids, and on callsign templates that leave some tier without a pool.
    pub fn new(
        airports: Vec<Airport>,
        instruction_types: Vec<InstructionType>,
        callsign_templates: &[CallsignTemplate],
    ) -> Result<Self, GeneratorError> {
        if airports.is_empty() {
            return Err(GeneratorError::NoAirports);
        }

        let mut types_by_code = HashMap::with_capacity(instruction_types.len());
        let mut types_by_id = HashMap::with_capacity(instruction_types.len());
        for instruction_type in instruction_types {
            if types_by_code.contains_key(&instruction_type.code) {
                return Err(GeneratorError::DuplicateInstructionType(instruction_type.code));
            }
            if types_by_id.contains_key(&instruction_type.id) {
                return Err(GeneratorError::DuplicateInstructionTypeId(instruction_type.id));
            }
            types_by_id.insert(instruction_type.id.clone(), instruction_type.clone());
            types_by_code.insert(instruction_type.code.clone(), instruction_type);
        }

        let callsigns = CallsignSynthesizer::new(callsign_templates)?;

        tracing::debug!(
            airports = airports.len(),
            instruction_types = types_by_code.len(),
            callsign_templates = callsign_templates.len(),
            "radiocall generator ready"
        );

        Ok(Self {
            airports,
            types_by_code,
            types_by_id,
            callsigns,
        })
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn instruction_type_by_code(&self, code: &str) -> Option<&InstructionType> {
        self.types_by_code.get(code)
    }

    pub fn instruction_type_by_id(&self, id: &str) -> Option<&InstructionType> {
        self.types_by_id.get(id)
    }

    /// Generate one scenario at `difficulty`.
    ///
    /// Returns `None` when every step of the chosen branch was skipped for a
    /// missing instruction type. Callers simply try again.
    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty) -> Option<RadiocallBundle> {
        self.compose(rng, difficulty, None)
    }

    /// Like [`RadiocallGenerator::generate`] with the subcategory fixed.
    ///
    /// The subcategory does not have to be on the tier's list.
    pub fn generate_with_subcategory<R: Rng>(
        &self,
        rng: &mut R,
        difficulty: Difficulty,
        subcategory: Subcategory,
    ) -> Option<RadiocallBundle> {
        self.compose(rng, difficulty, Some(subcategory))
    }

    fn compose<R: Rng>(
        &self,
        rng: &mut R,
        difficulty: Difficulty,
        forced: Option<Subcategory>,
    ) -> Option<RadiocallBundle> {
        let rng: &mut dyn RngCore = rng;
        let policy = difficulty.policy();

        let airport = self.airports.choose(rng)?;
        let subcategory = match forced {
            Some(sub) => sub,
            None => *policy.subcategories.choose(rng)?,
        };
        let flight_phase = subcategory.flight_phase();

        let callsign = self.callsigns.generate(rng, difficulty)?;
        let (min, max) = policy.instructions_per_call;
        let target = rng.random_range(min..=max);
        let runway = values::runway(rng, airport);

        let mut composition =
            Composition::new(&self.types_by_code, difficulty, flight_phase, runway, target);
        (Branch::from(subcategory).builder())(&mut composition, rng);

        if composition.instructions.is_empty() {
            tracing::debug!(
                %difficulty,
                %subcategory,
                "no instructions could be built, discarding scenario"
            );
            return None;
        }

        let mut full_transmission = format!("{},", callsign.written);
        for clause in &composition.transmission {
            full_transmission.push(' ');
            full_transmission.push_str(clause);
        }
        let expected_readback = if composition.readback.is_empty() {
            callsign.written.clone()
        } else {
            format!("{}, {}", composition.readback.join(", "), callsign.written)
        };

        let variations = if composition.readback.len() > 1 {
            let reversed: Vec<&str> = composition.readback.iter().rev().map(String::as_str).collect();
            vec![AcceptableVariation {
                variation_text: format!("{}, {}", callsign.written, reversed.join(", ")),
                notes: Some(REVERSED_ORDER_NOTE.to_string()),
            }]
        } else {
            Vec::new()
        };

        let errors = self.common_errors_for(&composition.instructions);

        let radiocall = Radiocall {
            airport: airport.id.clone(),
            category: subcategory.category(),
            subcategory,
            difficulty,
            flight_phase,
            controller_position: subcategory.controller_position(),
            aircraft_callsign: callsign.written,
            callsign_phonetic: callsign.phonetic,
            full_transmission,
            expected_readback,
            critical_elements: composition.critical_elements,
            instruction_count: composition.instructions.len() as u32,
            has_conditional: false,
            is_amendment: false,
            notes: None,
        };

        Some(RadiocallBundle {
            radiocall,
            instructions: composition.instructions,
            variations,
            errors,
        })
    }

    /// First error template of each distinct instruction type, in
    /// instruction order.
    fn common_errors_for(&self, instructions: &[Instruction]) -> Vec<CommonError> {
        let mut seen = BTreeSet::new();
        let mut errors = Vec::new();
        for instruction in instructions {
            if !seen.insert(instruction.instruction_type.as_str()) {
                continue;
            }
            let Some(instruction_type) = self.instruction_type_by_id(&instruction.instruction_type)
            else {
                continue;
            };
            if let Some(template) = common_errors(&instruction_type.code).first() {
                errors.push(CommonError {
                    error_code: template.error_code.to_string(),
                    severity: template.severity,
                    description: template.description.to_string(),
                    example: template.example.to_string(),
                    feedback_text: template.feedback_text.to_string(),
                });
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{default_callsign_templates, default_instruction_types};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn airport() -> Airport {
        Airport {
            id: "7".to_string(),
            icao: Some("LOWW".to_string()),
            name: Some("Vienna".to_string()),
            runways_available: Some("11/29, 16/34".to_string()),
        }
    }

    fn generator() -> RadiocallGenerator {
        RadiocallGenerator::new(
            vec![airport()],
            default_instruction_types(),
            &default_callsign_templates(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_airports() {
        let err = RadiocallGenerator::new(
            Vec::new(),
            default_instruction_types(),
            &default_callsign_templates(),
        )
        .unwrap_err();
        assert!(matches!(err, GeneratorError::NoAirports));
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let mut types = default_instruction_types();
        let mut dup = types[0].clone();
        dup.id = "99".to_string();
        types.push(dup);
        let err = RadiocallGenerator::new(vec![airport()], types, &default_callsign_templates())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateInstructionType(code) if code == "runway_assignment"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut types = default_instruction_types();
        let mut dup = types[0].clone();
        dup.code = "runway_change".to_string();
        types.push(dup);
        let err = RadiocallGenerator::new(vec![airport()], types, &default_callsign_templates())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateInstructionTypeId(id) if id == "1"));
    }

    #[test]
    fn test_type_lookups() {
        let generator = generator();
        let by_code = generator.instruction_type_by_code("hold_short").unwrap();
        let by_id = generator.instruction_type_by_id(&by_code.id).unwrap();
        assert_eq!(by_id.code, "hold_short");
        assert!(generator.instruction_type_by_code("cross_runway").is_none());
    }

    #[test]
    fn test_radiocall_references_airport_id() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(21);
        let bundle = generator.generate(&mut rng, Difficulty::Easy).unwrap();
        assert_eq!(bundle.radiocall.airport, "7");
        assert!(!bundle.radiocall.has_conditional);
        assert!(!bundle.radiocall.is_amendment);
    }

    #[test]
    fn test_readback_ends_with_callsign() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..100 {
            let bundle = generator.generate(&mut rng, Difficulty::Medium).unwrap();
            let call = &bundle.radiocall;
            assert!(call.full_transmission.starts_with(&format!("{}, ", call.aircraft_callsign)));
            assert!(call.expected_readback.ends_with(&format!(", {}", call.aircraft_callsign)));
        }
    }

    #[test]
    fn test_variation_reverses_readback() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(4);
        let bundle = generator
            .generate_with_subcategory(&mut rng, Difficulty::Easy, Subcategory::TakeoffClearance)
            .unwrap();
        let callsign = &bundle.radiocall.aircraft_callsign;
        assert_eq!(bundle.variations.len(), 1);
        let variation = &bundle.variations[0];
        assert!(variation.variation_text.starts_with(&format!("{}, runway ", callsign)));
        assert!(variation.variation_text.ends_with(", Cleared for takeoff"));
        assert_eq!(variation.notes.as_deref(), Some(REVERSED_ORDER_NOTE));
    }

    #[test]
    fn test_single_readback_clause_has_no_variation() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(4);
        let bundle = generator
            .generate_with_subcategory(&mut rng, Difficulty::Easy, Subcategory::LineUp)
            .unwrap();
        assert!(bundle.variations.is_empty());
    }

    #[test]
    fn test_one_error_per_distinct_type() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(12);
        let bundle = generator
            .generate_with_subcategory(&mut rng, Difficulty::Hard, Subcategory::Taxi)
            .unwrap();
        // taxi_instruction has no templates, hold_short contributes its first
        assert_eq!(bundle.instructions.len(), 2);
        assert_eq!(bundle.errors.len(), 1);
        assert_eq!(bundle.errors[0].error_code, "omit_hold_short");
    }
}
