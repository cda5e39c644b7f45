//! Home orchestration - decides which routine mode the home surface pushes.
//!
//! Stateless: the contract is rebuilt from scratch on every home load. There
//! is no transition history, only the fixed decision tables in [`policy`] and
//! the card templates in [`suggestions`].

pub mod policy;
pub mod suggestions;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

use crate::explain::fallback_notice;
use crate::model::{ActiveState, HealthCondition, TimeContext};

pub use policy::{base_mode, select_fallback, select_mode_by_policy};
pub use suggestions::{primary_suggestion, secondary_suggestions, MAX_SECONDARY_SUGGESTIONS};

/// Care is always primary; trip cards only ever appear as secondaries.
pub const PRIORITY_RESOLUTION: &str = "CARE_PRIMARY__TRIP_SECONDARY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeMode {
    Sleep,
    Recovery,
    Reset,
}

impl HomeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeMode::Sleep => "sleep",
            HomeMode::Recovery => "recovery",
            HomeMode::Reset => "reset",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            HomeMode::Sleep => "수면",
            HomeMode::Recovery => "회복",
            HomeMode::Reset => "리셋",
        }
    }

    /// The care mode offered as an alternative card.
    pub fn alternative(&self) -> HomeMode {
        match self {
            HomeMode::Sleep | HomeMode::Reset => HomeMode::Recovery,
            HomeMode::Recovery => HomeMode::Sleep,
        }
    }
}

impl fmt::Display for HomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why the home surface showed a conservative or simplified suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackStrategy {
    SafeRoutineOnly,
    ResetWithoutCold,
    DefaultStarterRitual,
    RoutineOnlyNoCommerce,
    #[serde(rename = "none")]
    None,
}

impl FallbackStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackStrategy::SafeRoutineOnly => "SAFE_ROUTINE_ONLY",
            FallbackStrategy::ResetWithoutCold => "RESET_WITHOUT_COLD",
            FallbackStrategy::DefaultStarterRitual => "DEFAULT_STARTER_RITUAL",
            FallbackStrategy::RoutineOnlyNoCommerce => "ROUTINE_ONLY_NO_COMMERCE",
            FallbackStrategy::None => "none",
        }
    }
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Care,
    Trip,
}

/// A ranked card on the home surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSuggestion {
    /// Template id
    pub id: String,
    pub kind: SuggestionKind,
    pub mode: HomeMode,
    pub title: String,
    pub subtitle: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    /// 1 for the primary card
    pub rank: u8,
}

/// Everything the home surface needs to decide, gathered by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOrchestrationInput {
    pub active_state: ActiveState,
    pub time_context: TimeContext,
    #[serde(default)]
    pub health_conditions: Vec<HealthCondition>,
    #[serde(default)]
    pub has_completed_profile: bool,
    #[serde(default)]
    pub has_commerce_candidate: bool,
    #[serde(default)]
    pub selected_theme_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOrchestrationContract {
    pub today_signal_label: String,
    pub base_mode: HomeMode,
    pub selected_mode: HomeMode,
    /// Set when the time-of-day policy overrode the state's own mode
    pub engine_conflict_resolved: bool,
    pub primary_suggestion: HomeSuggestion,
    pub secondary_suggestions: Vec<HomeSuggestion>,
    pub fallback_strategy: FallbackStrategy,
    pub priority_resolution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
}

/// Label summarizing today's inputs, e.g. "늦은 밤 · 잠들기 어려운 날".
pub fn today_signal_label(state: ActiveState, time: TimeContext) -> String {
    format!("{} · {}", time.label_ko(), state.label_ko())
}

/// Build the home contract for one load.
#[instrument(
    name = "build_home_orchestration",
    skip_all,
    fields(
        state = input.active_state.as_str(),
        time = input.time_context.as_str(),
        selected_mode = tracing::field::Empty,
        fallback = tracing::field::Empty
    )
)]
pub fn build_home_orchestration(input: &HomeOrchestrationInput) -> HomeOrchestrationContract {
    let base = base_mode(input.active_state);
    let selected = select_mode_by_policy(input.active_state, input.time_context);
    let conflict = base != selected;

    let fallback = select_fallback(
        selected,
        &input.health_conditions,
        input.has_completed_profile,
        input.has_commerce_candidate,
    );

    let span = tracing::Span::current();
    span.record("selected_mode", selected.as_str());
    span.record("fallback", fallback.as_str());

    if conflict {
        debug!(
            base = base.as_str(),
            selected = selected.as_str(),
            "Time-of-day policy overrode the state's mode - secondaries suppressed"
        );
    }

    let primary = primary_suggestion(fallback, selected);
    let secondaries = secondary_suggestions(
        conflict,
        fallback,
        input.active_state,
        selected,
        input.selected_theme_id.as_deref(),
    );

    info!(
        primary = primary.id.as_str(),
        secondaries = secondaries.len(),
        "Home orchestration built"
    );

    HomeOrchestrationContract {
        today_signal_label: today_signal_label(input.active_state, input.time_context),
        base_mode: base,
        selected_mode: selected,
        engine_conflict_resolved: conflict,
        primary_suggestion: primary,
        secondary_suggestions: secondaries,
        fallback_strategy: fallback,
        priority_resolution: PRIORITY_RESOLUTION.to_string(),
        fallback_notice: fallback_notice(fallback).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(state: ActiveState, time: TimeContext) -> HomeOrchestrationInput {
        HomeOrchestrationInput {
            active_state: state,
            time_context: time,
            health_conditions: vec![HealthCondition::None],
            has_completed_profile: true,
            has_commerce_candidate: true,
            selected_theme_id: None,
        }
    }

    #[test]
    fn test_morning_cant_sleep_conflict() {
        let contract =
            build_home_orchestration(&input(ActiveState::CantSleep, TimeContext::Morning));
        assert_eq!(contract.base_mode, HomeMode::Sleep);
        assert_eq!(contract.selected_mode, HomeMode::Recovery);
        assert!(contract.engine_conflict_resolved);
        assert!(contract.secondary_suggestions.is_empty());
        assert_eq!(contract.priority_resolution, "CARE_PRIMARY__TRIP_SECONDARY");
        assert_eq!(contract.fallback_strategy, FallbackStrategy::None);
        assert_eq!(contract.fallback_notice, None);
    }

    #[test]
    fn test_low_mood_evening_gets_trip_and_alternative() {
        let contract = build_home_orchestration(&input(ActiveState::LowMood, TimeContext::Evening));
        assert!(!contract.engine_conflict_resolved);
        assert_eq!(contract.selected_mode, HomeMode::Recovery);
        let kinds: Vec<SuggestionKind> = contract
            .secondary_suggestions
            .iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(kinds, vec![SuggestionKind::Trip, SuggestionKind::Care]);
        assert_eq!(contract.secondary_suggestions[1].mode, HomeMode::Sleep);
        assert_eq!(contract.today_signal_label, "저녁 · 마음이 가라앉은 날");
    }

    #[test]
    fn test_high_risk_is_safe_only() {
        let mut req = input(ActiveState::WantReset, TimeContext::Day);
        req.health_conditions = vec![HealthCondition::Pregnant];
        req.has_completed_profile = false;
        req.has_commerce_candidate = false;

        let contract = build_home_orchestration(&req);
        assert_eq!(contract.fallback_strategy, FallbackStrategy::SafeRoutineOnly);
        assert_eq!(contract.primary_suggestion.id, "care_safe_routine");
        assert!(contract.secondary_suggestions.is_empty());
        assert!(contract.fallback_notice.is_some());
    }

    #[test]
    fn test_fallback_serializes_as_label() {
        let json = serde_json::to_string(&FallbackStrategy::RoutineOnlyNoCommerce).unwrap();
        assert_eq!(json, "\"ROUTINE_ONLY_NO_COMMERCE\"");
        let none = serde_json::to_string(&FallbackStrategy::None).unwrap();
        assert_eq!(none, "\"none\"");
    }
}
