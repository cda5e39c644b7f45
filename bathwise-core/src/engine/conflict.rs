//! Conflict resolution - merges matched personas into one parameter set.
//!
//! Safety first: every numeric field takes the minimum across inputs,
//! including `max`. Ingredients are the first-seen union.

use tracing::{debug, instrument};

use super::persona::PersonaDefinition;
use crate::error::{EngineError, Result};
use crate::model::TemperatureRange;

/// The merged parameters of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters<'a> {
    pub temperature: TemperatureRange,
    /// `None` only when every input was unlimited
    pub duration_minutes: Option<u32>,
    pub ingredient_ids: Vec<String>,
    /// Lowest `priority`; ties go to the earlier input
    pub primary: &'a PersonaDefinition,
}

/// Merge `personas` (in catalog order) into one parameter set.
///
/// Fails with [`EngineError::EmptyInput`] when given nothing to merge.
#[instrument(
    name = "resolve_conflicts",
    skip_all,
    fields(
        inputs = personas.len(),
        personas = ?personas.iter().map(|p| p.code.as_str()).collect::<Vec<_>>()
    )
)]
pub fn resolve_conflicts<'a>(personas: &[&'a PersonaDefinition]) -> Result<ResolvedParameters<'a>> {
    let (&first, rest) = personas.split_first().ok_or(EngineError::EmptyInput)?;

    if rest.is_empty() {
        return Ok(ResolvedParameters {
            temperature: first.temperature,
            duration_minutes: first.duration_minutes,
            ingredient_ids: first.ingredient_ids.clone(),
            primary: first,
        });
    }

    let mut temperature = first.temperature;
    for p in rest {
        temperature.min = temperature.min.min(p.temperature.min);
        temperature.max = temperature.max.min(p.temperature.max);
        temperature.recommended = temperature.recommended.min(p.temperature.recommended);
    }

    let duration_minutes = personas.iter().filter_map(|p| p.duration_minutes).min();

    let mut ingredient_ids: Vec<String> = Vec::new();
    for id in personas.iter().flat_map(|p| p.ingredient_ids.iter()) {
        if !ingredient_ids.contains(id) {
            ingredient_ids.push(id.clone());
        }
    }

    // min_by_key keeps the first of equal minima
    let primary = personas
        .iter()
        .copied()
        .min_by_key(|p| p.priority)
        .unwrap_or(first);

    debug!(
        primary = primary.code.as_str(),
        recommended = temperature.recommended,
        duration = ?duration_minutes,
        "Merged {} personas",
        personas.len()
    );

    Ok(ResolvedParameters {
        temperature,
        duration_minutes,
        ingredient_ids,
        primary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::persona::{persona, PersonaCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_fails() {
        let err = resolve_conflicts(&[]).unwrap_err();
        assert!(matches!(err, EngineError::EmptyInput));
    }

    #[test]
    fn test_single_persona_mirrors_input() {
        let muscle = persona(PersonaCode::P3Muscle);
        let resolved = resolve_conflicts(&[muscle]).unwrap();
        assert_eq!(resolved.temperature, muscle.temperature);
        assert_eq!(resolved.duration_minutes, Some(15));
        assert_eq!(resolved.ingredient_ids, muscle.ingredient_ids);
        assert_eq!(resolved.primary.code, PersonaCode::P3Muscle);
    }

    #[test]
    fn test_min_wins_on_every_field() {
        let resolved = resolve_conflicts(&[
            persona(PersonaCode::P3Muscle),
            persona(PersonaCode::P4Sleep),
        ])
        .unwrap();

        assert_eq!(resolved.temperature, TemperatureRange::new(36, 38, 37));
        assert_eq!(resolved.duration_minutes, Some(15));
        assert_eq!(
            resolved.ingredient_ids,
            vec!["epsom_salt", "rosemary_oil", "lavender_oil", "chamomile_oil"]
        );
        // P3 and P4 share priority 1; the earlier input wins
        assert_eq!(resolved.primary.code, PersonaCode::P3Muscle);
    }

    #[test]
    fn test_lowest_priority_is_primary() {
        let resolved = resolve_conflicts(&[
            persona(PersonaCode::P2Circulation),
            persona(PersonaCode::P4Sleep),
        ])
        .unwrap();
        assert_eq!(resolved.primary.code, PersonaCode::P4Sleep);
        // P2 is unlimited, so only P4's duration counts
        assert_eq!(resolved.duration_minutes, Some(20));
    }

    #[test]
    fn test_all_unlimited_stays_unlimited() {
        let mut a = persona(PersonaCode::P2Circulation).clone();
        let mut b = persona(PersonaCode::P4Sleep).clone();
        a.duration_minutes = None;
        b.duration_minutes = None;
        let resolved = resolve_conflicts(&[&a, &b]).unwrap();
        assert_eq!(resolved.duration_minutes, None);
    }
}
