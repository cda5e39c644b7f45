//! Fixed decision tables: mode by state and time, then fallback strategy.

use super::{FallbackStrategy, HomeMode};
use crate::model::{ActiveState, HealthCondition, TimeContext};

/// The mode a state maps to on its own, ignoring time of day.
pub fn base_mode(state: ActiveState) -> HomeMode {
    match state {
        ActiveState::Tension | ActiveState::Heavy | ActiveState::LowMood => HomeMode::Recovery,
        ActiveState::CantSleep => HomeMode::Sleep,
        ActiveState::WantReset => HomeMode::Reset,
    }
}

/// Mode after the time-of-day rules. First matching rule wins.
pub fn select_mode_by_policy(state: ActiveState, time: TimeContext) -> HomeMode {
    match (time, state) {
        (TimeContext::LateNight, s) if s != ActiveState::WantReset => HomeMode::Sleep,
        (TimeContext::Morning, ActiveState::CantSleep) => HomeMode::Recovery,
        (TimeContext::Day | TimeContext::Evening, ActiveState::Tension) => HomeMode::Recovery,
        _ => base_mode(state),
    }
}

/// Fallback strategy, in fixed precedence.
pub fn select_fallback(
    selected_mode: HomeMode,
    conditions: &[HealthCondition],
    has_completed_profile: bool,
    has_commerce_candidate: bool,
) -> FallbackStrategy {
    if conditions.iter().any(HealthCondition::is_high_risk) {
        return FallbackStrategy::SafeRoutineOnly;
    }
    if selected_mode == HomeMode::Reset
        && conditions
            .iter()
            .any(HealthCondition::is_reset_contraindicated)
    {
        return FallbackStrategy::ResetWithoutCold;
    }
    if !has_completed_profile {
        return FallbackStrategy::DefaultStarterRitual;
    }
    if !has_commerce_candidate {
        return FallbackStrategy::RoutineOnlyNoCommerce;
    }
    FallbackStrategy::None
}
