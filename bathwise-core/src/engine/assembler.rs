//! Recommendation assembly - orchestrates the pipeline into a finished entity.
//!
//! Output is immutable and total: catalog misses degrade (dropped ingredients,
//! default tracks, default theme) instead of failing the request. The only
//! error is the empty-input invariant of conflict resolution, which the
//! assembler never lets through.

use chrono::Utc;
use tracing::{debug, info, instrument, trace, warn};

use super::conflict::{resolve_conflicts, ResolvedParameters};
use super::context::{apply_context_branch, ContextOverrides};
use super::persona::{match_personas, persona, PersonaCode, PersonaDefinition};
use super::safety::{apply_safety_filter, SafetyFilterResult};
use crate::catalog::{
    ingredient, music_for_persona, persona_color, theme_or_default, track_or_default, Theme,
    TrackKind,
};
use crate::error::Result;
use crate::model::{
    BathEnvironment, BathRecommendation, BathType, DailyTag, HealthCondition, RecommendationMode,
    ResolvedIngredient, TemperatureRange, UserProfile,
};
use crate::trace::generate_recommendation_id;

/// Duration given to a theme before safety and environment adjustments.
pub const TRIP_DEFAULT_MINUTES: u32 = 15;

/// Priority of a theme-derived persona; weaker than every catalog persona.
const THEME_PERSONA_PRIORITY: u8 = 3;

/// Whether the care pipeline discards matched personas in favor of `P1_SAFETY`.
///
/// Only `hypertension_heart` forces the safety persona. `pregnant` is
/// high-risk on the home surface but here it is limited through the safety
/// rules alone.
pub fn should_force_safety_persona(profile: &UserProfile) -> bool {
    profile.has_condition(HealthCondition::HypertensionHeart)
}

/// Care pipeline using the environment stored on the profile.
pub fn generate_recommendation(
    profile: &UserProfile,
    tags: &[DailyTag],
) -> Result<BathRecommendation> {
    generate_care_recommendation(profile, tags, profile.environment)
}

/// Care pipeline with an explicit environment.
#[instrument(
    name = "generate_care_recommendation",
    skip_all,
    fields(tags = ?tags, environment = environment.as_str())
)]
pub fn generate_care_recommendation(
    profile: &UserProfile,
    tags: &[DailyTag],
    environment: BathEnvironment,
) -> Result<BathRecommendation> {
    let safety = apply_safety_filter(profile, tags);

    let mut matched = match_personas(tags);
    if should_force_safety_persona(profile) {
        debug!("hypertension_heart present - forcing P1_SAFETY");
        matched = vec![persona(PersonaCode::P1Safety)];
    }
    if matched.is_empty() {
        debug!("No persona matched - defaulting to P4_SLEEP");
        matched.push(persona(PersonaCode::P4Sleep));
    }

    let resolved = resolve_conflicts(&matched)?;
    let routine = assemble(profile, resolved, &safety, environment);

    let primary = routine.primary_code;
    let recommendation = BathRecommendation {
        id: generate_recommendation_id(),
        mode: RecommendationMode::Care,
        theme_id: None,
        theme_title: None,
        persona_code: primary,
        environment_used: environment,
        bath_type: routine.bath_type,
        temperature: routine.temperature,
        duration_minutes: routine.duration_minutes,
        ingredients: routine.ingredients,
        music_track_id: music_for_persona(primary, TrackKind::Music).map(|t| t.id.to_string()),
        ambience_track_id: music_for_persona(primary, TrackKind::Ambience)
            .map(|t| t.id.to_string()),
        lighting: routine.lighting,
        safety_warnings: safety.warnings,
        safety_severity: safety.severity,
        color_hex: persona_color(primary).to_string(),
        created_at: Utc::now(),
        feedback: None,
        behavior_blocks: None,
        intent_id: None,
        sub_protocol_id: None,
        environment_hints: None,
    };

    log_finished(&recommendation);
    Ok(recommendation)
}

/// Theme-driven pipeline. An unknown theme id falls back to the first catalog theme.
#[instrument(
    name = "generate_trip_recommendation",
    skip_all,
    fields(theme_id = theme_id, environment = environment.as_str())
)]
pub fn generate_trip_recommendation(
    profile: &UserProfile,
    theme_id: &str,
    environment: BathEnvironment,
) -> Result<BathRecommendation> {
    let Some(theme) = theme_or_default(theme_id) else {
        warn!("Theme catalog is empty - building a plain care routine for the trip");
        let mut recommendation = generate_care_recommendation(profile, &[], environment)?;
        recommendation.mode = RecommendationMode::Trip;
        return Ok(recommendation);
    };
    if theme.id != theme_id {
        warn!(
            requested = theme_id,
            fallback = theme.id,
            "Unknown theme - using catalog default"
        );
    }

    let safety = apply_safety_filter(profile, &[]);

    let theme_persona = theme_persona(theme);
    let mut matched: Vec<&PersonaDefinition> = vec![&theme_persona];
    if should_force_safety_persona(profile) {
        debug!("hypertension_heart present - merging P1_SAFETY into the theme");
        matched.insert(0, persona(PersonaCode::P1Safety));
    }

    let resolved = resolve_conflicts(&matched)?;
    let routine = assemble(profile, resolved, &safety, environment);

    let primary = routine.primary_code;
    let recommendation = BathRecommendation {
        id: generate_recommendation_id(),
        mode: RecommendationMode::Trip,
        theme_id: Some(theme.id.to_string()),
        theme_title: Some(theme.title.to_string()),
        persona_code: primary,
        environment_used: environment,
        bath_type: routine.bath_type,
        temperature: routine.temperature,
        duration_minutes: routine.duration_minutes,
        ingredients: routine.ingredients,
        music_track_id: track_or_default(theme.music_id, TrackKind::Music)
            .map(|t| t.id.to_string()),
        ambience_track_id: track_or_default(theme.ambience_id, TrackKind::Ambience)
            .map(|t| t.id.to_string()),
        lighting: routine.lighting,
        safety_warnings: safety.warnings,
        safety_severity: safety.severity,
        color_hex: persona_color(primary).to_string(),
        created_at: Utc::now(),
        feedback: None,
        behavior_blocks: None,
        intent_id: None,
        sub_protocol_id: None,
        environment_hints: None,
    };

    log_finished(&recommendation);
    Ok(recommendation)
}

/// Project a theme onto a persona so it flows through conflict resolution.
fn theme_persona(theme: &Theme) -> PersonaDefinition {
    PersonaDefinition {
        code: PersonaCode::P4Sleep,
        trigger_tags: Vec::new(),
        bath_type: theme.default_bath_type,
        temperature: TemperatureRange::new(
            theme.base_temp.saturating_sub(2),
            theme.base_temp.saturating_add(1),
            theme.base_temp,
        ),
        duration_minutes: Some(TRIP_DEFAULT_MINUTES),
        ingredient_ids: vec![theme.rec_scent.to_string()],
        lighting: theme.lighting.to_string(),
        priority: THEME_PERSONA_PRIORITY,
    }
}

/// The environment- and safety-adjusted body of a recommendation.
struct AssembledRoutine {
    primary_code: PersonaCode,
    bath_type: BathType,
    temperature: TemperatureRange,
    duration_minutes: Option<u32>,
    ingredients: Vec<ResolvedIngredient>,
    lighting: String,
}

fn assemble(
    profile: &UserProfile,
    mut resolved: ResolvedParameters<'_>,
    safety: &SafetyFilterResult,
    environment: BathEnvironment,
) -> AssembledRoutine {
    if let Some(ceiling) = safety.max_temperature {
        resolved.temperature = resolved.temperature.clamp_to(ceiling);
        debug!(ceiling, "Safety ceiling applied");
    }

    let overrides = apply_context_branch(&resolved, environment);

    let bath_type = match safety.forced_bath_type {
        Some(forced) => {
            debug!(
                forced = forced.as_str(),
                environment_type = overrides.bath_type.as_str(),
                "Safety-forced bath type overrides environment"
            );
            forced
        }
        None => overrides.bath_type,
    };

    let ids = assemble_ingredient_ids(
        &resolved.ingredient_ids,
        &overrides,
        safety,
        &profile.health_conditions,
    );
    let ingredients = ids
        .iter()
        .filter_map(|id| {
            let found = ingredient(id);
            if found.is_none() {
                trace!(ingredient = id.as_str(), "Ingredient not in catalog - dropped");
            }
            found
        })
        .map(|i| i.resolve())
        .collect();

    AssembledRoutine {
        primary_code: resolved.primary.code,
        bath_type,
        temperature: overrides.temperature,
        duration_minutes: overrides.duration_minutes,
        ingredients,
        lighting: resolved.primary.lighting.clone(),
    }
}

/// `(merged - removed) ∪ added`, then drop banned ids and ids contraindicated
/// for `conditions`. Order is first-seen; unknown ids pass through untouched.
pub fn assemble_ingredient_ids(
    merged: &[String],
    overrides: &ContextOverrides,
    safety: &SafetyFilterResult,
    conditions: &[HealthCondition],
) -> Vec<String> {
    let mut ids: Vec<String> = merged
        .iter()
        .filter(|id| !overrides.ingredients_remove.contains(id))
        .cloned()
        .collect();

    for added in &overrides.ingredients_add {
        if !ids.contains(added) {
            ids.push(added.clone());
        }
    }

    ids.retain(|id| {
        let keep = !safety.is_banned(id)
            && ingredient(id).map_or(true, |i| !i.is_contraindicated_for(conditions));
        if !keep {
            trace!(ingredient = id.as_str(), "Ingredient removed by safety");
        }
        keep
    });

    ids
}

fn log_finished(recommendation: &BathRecommendation) {
    info!(
        id = recommendation.id.as_str(),
        persona = recommendation.persona_code.as_str(),
        bath_type = recommendation.bath_type.as_str(),
        recommended_temp = recommendation.temperature.recommended,
        duration = ?recommendation.duration_minutes,
        warnings = recommendation.safety_warnings.len(),
        "Recommendation assembled"
    );
}
