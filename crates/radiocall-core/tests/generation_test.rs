//! End-to-end generation tests against the built-in reference data.
//!
//! Run with: cargo test --test generation_test

use radiocall_core::reference::codes;
use radiocall_core::{
    default_callsign_templates, default_instruction_types, Airport, Difficulty,
    RadiocallGenerator, Subcategory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn airports() -> Vec<Airport> {
    vec![
        Airport {
            id: "1".to_string(),
            icao: Some("EDDF".to_string()),
            name: Some("Frankfurt".to_string()),
            runways_available: Some("07C/25C, 07L/25R, 07R/25L, 18/36".to_string()),
        },
        Airport {
            id: "2".to_string(),
            icao: Some("LSZH".to_string()),
            name: Some("Zurich".to_string()),
            runways_available: None,
        },
    ]
}

fn generator() -> RadiocallGenerator {
    RadiocallGenerator::new(
        airports(),
        default_instruction_types(),
        &default_callsign_templates(),
    )
    .expect("built-in reference data is valid")
}

/// Codes of the instruction types a bundle actually contains.
fn present_codes(generator: &RadiocallGenerator, bundle: &radiocall_core::RadiocallBundle) -> HashSet<String> {
    bundle
        .instructions
        .iter()
        .map(|i| {
            generator
                .instruction_type_by_id(&i.instruction_type)
                .expect("instruction references a known type")
                .code
                .clone()
        })
        .collect()
}

#[test]
fn test_sequences_are_contiguous_for_every_tier() {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(2024);

    for difficulty in Difficulty::ALL {
        for _ in 0..200 {
            let bundle = generator.generate(&mut rng, difficulty).unwrap();
            assert_eq!(
                bundle.radiocall.instruction_count as usize,
                bundle.instructions.len()
            );
            for (idx, instruction) in bundle.instructions.iter().enumerate() {
                assert_eq!(instruction.sequence, idx as u32 + 1);
            }
            assert_eq!(bundle.radiocall.difficulty, difficulty);
            assert!(difficulty
                .policy()
                .subcategories
                .contains(&bundle.radiocall.subcategory));
        }
    }
}

#[test]
fn test_critical_elements_are_present_codes() {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(77);

    for difficulty in Difficulty::ALL {
        for _ in 0..200 {
            let bundle = generator.generate(&mut rng, difficulty).unwrap();
            let present = present_codes(&generator, &bundle);
            for code in &bundle.radiocall.critical_elements {
                // Approach clearances embed the runway in the clearance itself
                if bundle.radiocall.subcategory == Subcategory::ApproachClearance
                    && code == codes::RUNWAY_ASSIGNMENT
                {
                    continue;
                }
                assert!(present.contains(code), "{} not among {:?}", code, present);
            }
        }
    }
}

#[test]
fn test_super_easy_takeoff_shape() {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let bundle = generator
            .generate_with_subcategory(&mut rng, Difficulty::SuperEasy, Subcategory::TakeoffClearance)
            .unwrap();
        let call = &bundle.radiocall;

        assert!(call.full_transmission.contains(" wind "));
        assert!(call.full_transmission.ends_with("cleared for takeoff"));
        assert!(call.expected_readback.starts_with("Cleared for takeoff"));
        assert!(call.expected_readback.ends_with(&call.aircraft_callsign));
        assert_eq!(
            call.critical_elements,
            vec![codes::RUNWAY_ASSIGNMENT, codes::TAKEOFF_CLEARANCE]
        );
        assert!(!call.aircraft_callsign.is_empty());
        assert!(!call.callsign_phonetic.is_empty());

        // Runway instruction carries a single runway end
        let runway = &bundle.instructions[0].raw_value;
        assert!(!runway.contains('/'));
        assert!(call.full_transmission.contains(&format!("runway {},", runway)));
    }
}

#[test]
fn test_hard_altitude_change_adds_speed_about_half_the_time() {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(99);
    let runs = 400;
    let mut with_speed = 0;

    for _ in 0..runs {
        let bundle = generator
            .generate_with_subcategory(&mut rng, Difficulty::Hard, Subcategory::AltitudeChange)
            .unwrap();
        let first = generator
            .instruction_type_by_id(&bundle.instructions[0].instruction_type)
            .unwrap();
        assert_eq!(first.code, codes::ALTITUDE_ASSIGNMENT);
        if bundle.instructions.len() == 2 {
            with_speed += 1;
            assert!(bundle
                .radiocall
                .critical_elements
                .contains(&codes::SPEED_ASSIGNMENT.to_string()));
        }
    }

    let share = with_speed as f64 / runs as f64;
    assert!((0.4..=0.6).contains(&share), "speed share {}", share);
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let generator = generator();
    let run = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        Difficulty::ALL
            .into_iter()
            .cycle()
            .take(40)
            .map(|d| serde_json::to_string(&generator.generate(&mut rng, d)).unwrap())
            .collect()
    };
    assert_eq!(run(123), run(123));
    assert_ne!(run(123), run(124));
}

#[test]
fn test_missing_instruction_type_discards_scenario() {
    let types = default_instruction_types()
        .into_iter()
        .filter(|t| t.code != codes::LINE_UP)
        .collect();
    let generator =
        RadiocallGenerator::new(airports(), types, &default_callsign_templates()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let bundle =
        generator.generate_with_subcategory(&mut rng, Difficulty::Easy, Subcategory::LineUp);
    assert!(bundle.is_none());
}

#[test]
fn test_empty_airport_list_is_rejected() {
    let result = RadiocallGenerator::new(
        Vec::new(),
        default_instruction_types(),
        &default_callsign_templates(),
    );
    assert!(result.is_err());
}

#[test]
fn test_classification_follows_subcategory() {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..100 {
        let bundle = generator.generate(&mut rng, Difficulty::Hard).unwrap();
        let call = &bundle.radiocall;
        assert_eq!(call.category, call.subcategory.category());
        assert_eq!(call.controller_position, call.subcategory.controller_position());
        assert_eq!(call.flight_phase, call.subcategory.flight_phase());
    }
}

#[test]
fn test_fallback_subcategories_assign_a_flight_level() {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(31);

    for subcategory in [
        Subcategory::Startup,
        Subcategory::Pushback,
        Subcategory::SpeedControl,
        Subcategory::GoAround,
        Subcategory::VacateRunway,
    ] {
        for _ in 0..10 {
            let bundle = generator
                .generate_with_subcategory(&mut rng, Difficulty::Hard, subcategory)
                .unwrap();
            assert_eq!(bundle.instructions.len(), 1);
            let altitude = &bundle.instructions[0];
            assert_eq!(altitude.unit.as_deref(), Some("FL"), "{}", subcategory);
            assert!(altitude.readback_text.starts_with("FL"));
            assert_eq!(
                bundle.radiocall.critical_elements,
                vec![codes::ALTITUDE_ASSIGNMENT.to_string()]
            );
        }
    }
}
