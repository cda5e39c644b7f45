//! Sub-protocol overrides - a user-picked variant applied on top of a finished
//! recommendation.

use tracing::debug;

use crate::catalog::SubProtocolOption;
use crate::explain::environment_advisory;
use crate::model::{BathEnvironment, BathRecommendation};

/// Bounds for an overridden duration, in minutes.
pub const MIN_OVERRIDE_MINUTES: i64 = 5;
pub const MAX_OVERRIDE_MINUTES: i64 = 20;

const LIGHTING_SEPARATOR: &str = " · ";

/// Apply `option` to `recommendation` and return the overridden copy.
///
/// - duration moves by the option's delta, clamped to 5..=20; unlimited stays unlimited
/// - the lighting note is appended to the existing lighting
/// - non-empty behavior blocks replace any existing ones
/// - an environment bias that differs from `environment` adds an advisory hint
///   and changes nothing else
pub fn apply_sub_protocol_overrides(
    recommendation: &BathRecommendation,
    option: &SubProtocolOption,
    environment: BathEnvironment,
    intent_id: &str,
) -> BathRecommendation {
    let mut out = recommendation.clone();

    out.duration_minutes = recommendation.duration_minutes.map(|minutes| {
        (i64::from(minutes) + i64::from(option.duration_delta))
            .clamp(MIN_OVERRIDE_MINUTES, MAX_OVERRIDE_MINUTES) as u32
    });

    if let Some(note) = option.lighting_note.as_deref().filter(|n| !n.is_empty()) {
        out.lighting = if out.lighting.is_empty() {
            note.to_string()
        } else {
            format!("{}{LIGHTING_SEPARATOR}{note}", out.lighting)
        };
    }

    if !option.behavior_blocks.is_empty() {
        out.behavior_blocks = Some(option.behavior_blocks.clone());
    }

    if let Some(bias) = option.environment_bias {
        if bias.normalized() != environment.normalized() {
            debug!(
                bias = bias.as_str(),
                actual = environment.as_str(),
                "Sub-protocol prefers another environment"
            );
            out.environment_hints
                .get_or_insert_with(Vec::new)
                .push(environment_advisory(bias));
        }
    }

    out.intent_id = Some(intent_id.to_string());
    out.sub_protocol_id = Some(option.id.clone());

    out
}
