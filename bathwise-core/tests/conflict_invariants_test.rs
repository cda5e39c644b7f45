//! Properties of conflict resolution and the safety ceiling over every persona set

use bathwise_core::engine::{persona, resolve_conflicts, PersonaCode, PersonaDefinition};
use bathwise_core::model::TemperatureRange;
use bathwise_core::EngineError;

const CODES: [PersonaCode; 4] = [
    PersonaCode::P1Safety,
    PersonaCode::P2Circulation,
    PersonaCode::P3Muscle,
    PersonaCode::P4Sleep,
];

/// Every non-empty subset of the persona catalog, in catalog order.
fn persona_sets() -> Vec<Vec<&'static PersonaDefinition>> {
    (1u8..(1 << CODES.len()))
        .map(|mask| {
            CODES
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, code)| persona(*code))
                .collect()
        })
        .collect()
}

#[test]
fn test_recommended_temperature_is_minimum() {
    for set in persona_sets() {
        let resolved = resolve_conflicts(&set).unwrap();
        let expected = set.iter().map(|p| p.temperature.recommended).min().unwrap();
        assert_eq!(resolved.temperature.recommended, expected);
    }
}

#[test]
fn test_duration_is_minimum_of_limited() {
    for set in persona_sets() {
        let resolved = resolve_conflicts(&set).unwrap();
        let expected = set.iter().filter_map(|p| p.duration_minutes).min();
        assert_eq!(resolved.duration_minutes, expected);
    }
}

#[test]
fn test_ingredients_are_deduplicated_union() {
    for set in persona_sets() {
        let resolved = resolve_conflicts(&set).unwrap();
        for p in &set {
            for id in &p.ingredient_ids {
                assert_eq!(
                    resolved.ingredient_ids.iter().filter(|i| *i == id).count(),
                    1,
                    "{id} should appear exactly once"
                );
            }
        }
    }
}

#[test]
fn test_primary_has_lowest_priority() {
    for set in persona_sets() {
        let resolved = resolve_conflicts(&set).unwrap();
        let lowest = set.iter().map(|p| p.priority).min().unwrap();
        assert_eq!(resolved.primary.priority, lowest);
        // Ties go to the first persona in input order.
        let first_lowest = set.iter().find(|p| p.priority == lowest).unwrap();
        assert_eq!(resolved.primary.code, first_lowest.code);
    }
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(
        resolve_conflicts(&[]),
        Err(EngineError::EmptyInput)
    ));
}

#[test]
fn test_ceiling_is_idempotent() {
    for set in persona_sets() {
        let resolved = resolve_conflicts(&set).unwrap();
        for ceiling in [36u8, 38, 40, 45] {
            let once: TemperatureRange = resolved.temperature.clamp_to(ceiling);
            assert_eq!(once.clamp_to(ceiling), once);
            assert!(once.recommended <= ceiling);
        }
    }
}
