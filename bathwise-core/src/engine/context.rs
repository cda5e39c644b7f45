//! Context branching - adapts merged parameters to the bathing environment.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::conflict::ResolvedParameters;
use crate::model::{BathEnvironment, BathType, TemperatureRange};

/// Longest shower we recommend, and the duration given to an unlimited routine in the shower.
pub const SHOWER_MAX_MINUTES: u32 = 10;

const SHOWER_ADDED_INGREDIENTS: &[&str] = &["shower_steamer", "body_wash_relaxing"];
const SHOWER_REMOVED_INGREDIENTS: &[&str] = &["carbonated_bath", "epsom_salt"];

/// Environment-adjusted parameters plus ingredient edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextOverrides {
    pub bath_type: BathType,
    pub temperature: TemperatureRange,
    pub duration_minutes: Option<u32>,
    pub ingredients_add: Vec<String>,
    pub ingredients_remove: Vec<String>,
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Adapt `resolved` to `environment`. Total over every environment.
///
/// A safety-forced bath type is applied by the caller afterwards and wins
/// over whatever this returns.
pub fn apply_context_branch(
    resolved: &ResolvedParameters<'_>,
    environment: BathEnvironment,
) -> ContextOverrides {
    let overrides = match environment.normalized() {
        BathEnvironment::PartialBath | BathEnvironment::Footbath => ContextOverrides {
            bath_type: BathType::Foot,
            temperature: resolved.temperature,
            duration_minutes: resolved.duration_minutes,
            ingredients_add: Vec::new(),
            ingredients_remove: Vec::new(),
        },
        BathEnvironment::Shower => ContextOverrides {
            bath_type: BathType::Shower,
            temperature: resolved.temperature,
            duration_minutes: Some(
                resolved
                    .duration_minutes
                    .map_or(SHOWER_MAX_MINUTES, |d| d.min(SHOWER_MAX_MINUTES)),
            ),
            ingredients_add: owned(SHOWER_ADDED_INGREDIENTS),
            ingredients_remove: owned(SHOWER_REMOVED_INGREDIENTS),
        },
        BathEnvironment::Bathtub => ContextOverrides {
            bath_type: resolved.primary.bath_type,
            temperature: resolved.temperature,
            duration_minutes: resolved.duration_minutes,
            ingredients_add: Vec::new(),
            ingredients_remove: Vec::new(),
        },
    };

    trace!(
        environment = environment.as_str(),
        bath_type = overrides.bath_type.as_str(),
        duration = ?overrides.duration_minutes,
        "Context branch applied"
    );

    overrides
}
