//! Persona catalog and tag matching.
//!
//! Four behavioral personas, each a cluster of bath parameters. Matching is
//! set intersection between a persona's trigger tags and the request's tags.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::model::{BathType, DailyTag, TemperatureRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaCode {
    #[serde(rename = "P1_SAFETY")]
    P1Safety,
    #[serde(rename = "P2_CIRCULATION")]
    P2Circulation,
    #[serde(rename = "P3_MUSCLE")]
    P3Muscle,
    #[serde(rename = "P4_SLEEP")]
    P4Sleep,
}

impl PersonaCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaCode::P1Safety => "P1_SAFETY",
            PersonaCode::P2Circulation => "P2_CIRCULATION",
            PersonaCode::P3Muscle => "P3_MUSCLE",
            PersonaCode::P4Sleep => "P4_SLEEP",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            PersonaCode::P1Safety => "안전 우선 루틴",
            PersonaCode::P2Circulation => "순환 케어 루틴",
            PersonaCode::P3Muscle => "근육 회복 루틴",
            PersonaCode::P4Sleep => "수면 릴랙스 루틴",
        }
    }

    fn catalog_index(&self) -> usize {
        match self {
            PersonaCode::P1Safety => 0,
            PersonaCode::P2Circulation => 1,
            PersonaCode::P3Muscle => 2,
            PersonaCode::P4Sleep => 3,
        }
    }
}

impl fmt::Display for PersonaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static bath parameters for one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaDefinition {
    pub code: PersonaCode,
    pub trigger_tags: Vec<DailyTag>,
    pub bath_type: BathType,
    pub temperature: TemperatureRange,
    /// `None` means unlimited
    pub duration_minutes: Option<u32>,
    pub ingredient_ids: Vec<String>,
    pub lighting: String,
    /// Lower is a stronger claim on the primary slot
    pub priority: u8,
}

impl PersonaDefinition {
    pub fn is_triggered_by(&self, tags: &[DailyTag]) -> bool {
        self.trigger_tags.iter().any(|t| tags.contains(t))
    }
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Catalog in `PersonaCode` order.
pub static PERSONAS: Lazy<Vec<PersonaDefinition>> = Lazy::new(|| {
    vec![
        PersonaDefinition {
            code: PersonaCode::P1Safety,
            trigger_tags: vec![],
            bath_type: BathType::Half,
            temperature: TemperatureRange::new(36, 38, 37),
            duration_minutes: Some(10),
            ingredient_ids: ids(&["lavender_oil"]),
            lighting: "따뜻한 간접 조명, 밝기 40%".to_string(),
            priority: 0,
        },
        PersonaDefinition {
            code: PersonaCode::P2Circulation,
            trigger_tags: vec![DailyTag::Cold, DailyTag::Swelling, DailyTag::MenstrualPain],
            bath_type: BathType::Half,
            temperature: TemperatureRange::new(38, 41, 40),
            duration_minutes: None,
            ingredient_ids: ids(&["carbonated_bath", "ginger_salt", "rosemary_oil"]),
            lighting: "주황빛 웜톤 조명".to_string(),
            priority: 2,
        },
        PersonaDefinition {
            code: PersonaCode::P3Muscle,
            trigger_tags: vec![DailyTag::MusclePain],
            bath_type: BathType::Full,
            temperature: TemperatureRange::new(39, 42, 41),
            duration_minutes: Some(15),
            ingredient_ids: ids(&["epsom_salt", "rosemary_oil"]),
            lighting: "밝은 뉴트럴 화이트 조명".to_string(),
            priority: 1,
        },
        PersonaDefinition {
            code: PersonaCode::P4Sleep,
            trigger_tags: vec![DailyTag::Insomnia, DailyTag::Stress, DailyTag::Depression],
            bath_type: BathType::Full,
            temperature: TemperatureRange::new(36, 38, 37),
            duration_minutes: Some(20),
            ingredient_ids: ids(&["lavender_oil", "chamomile_oil"]),
            lighting: "촛불 톤의 은은한 조명, 밝기 20%".to_string(),
            priority: 1,
        },
    ]
});

/// The catalog definition for a persona code.
pub fn persona(code: PersonaCode) -> &'static PersonaDefinition {
    &PERSONAS[code.catalog_index()]
}

/// Every persona whose trigger tags intersect `tags`, in catalog order.
///
/// Duplicate tags have no extra effect. An empty result is a normal outcome;
/// the assembler substitutes the sleep persona.
pub fn match_personas(tags: &[DailyTag]) -> Vec<&'static PersonaDefinition> {
    let matched: Vec<&'static PersonaDefinition> = PERSONAS
        .iter()
        .filter(|p| p.is_triggered_by(tags))
        .collect();

    trace!(
        tags = ?tags,
        matched = ?matched.iter().map(|p| p.code.as_str()).collect::<Vec<_>>(),
        "Persona matching complete"
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_codes() {
        for code in [
            PersonaCode::P1Safety,
            PersonaCode::P2Circulation,
            PersonaCode::P3Muscle,
            PersonaCode::P4Sleep,
        ] {
            assert_eq!(persona(code).code, code);
        }
    }

    #[test]
    fn test_safety_persona_has_no_triggers() {
        let all_tags = [
            DailyTag::MusclePain,
            DailyTag::Swelling,
            DailyTag::Cold,
            DailyTag::MenstrualPain,
            DailyTag::Hangover,
            DailyTag::Insomnia,
            DailyTag::Stress,
            DailyTag::Depression,
        ];
        let matched = match_personas(&all_tags);
        assert!(matched.iter().all(|p| p.code != PersonaCode::P1Safety));
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_matching_is_order_independent_and_ignores_duplicates() {
        let a = match_personas(&[DailyTag::Insomnia, DailyTag::MusclePain]);
        let b = match_personas(&[DailyTag::MusclePain, DailyTag::Insomnia, DailyTag::Insomnia]);
        assert_eq!(a, b);
        assert_eq!(a[0].code, PersonaCode::P3Muscle);
        assert_eq!(a[1].code, PersonaCode::P4Sleep);
    }

    #[test]
    fn test_hangover_matches_nothing() {
        assert!(match_personas(&[DailyTag::Hangover]).is_empty());
        assert!(match_personas(&[]).is_empty());
    }

    #[test]
    fn test_code_serializes_as_catalog_name() {
        let json = serde_json::to_string(&PersonaCode::P3Muscle).unwrap();
        assert_eq!(json, "\"P3_MUSCLE\"");
    }
}
