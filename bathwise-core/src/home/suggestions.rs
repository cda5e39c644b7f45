//! Card templates for the home surface.

use super::{FallbackStrategy, HomeMode, HomeSuggestion, SuggestionKind};
use crate::catalog::{theme_or_default, THEMES};
use crate::engine::assembler::TRIP_DEFAULT_MINUTES;
use crate::model::ActiveState;

pub const MAX_SECONDARY_SUGGESTIONS: usize = 2;

struct CareTemplate {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    duration_minutes: u32,
}

const STARTER_RITUAL: CareTemplate = CareTemplate {
    id: "care_starter_ritual",
    title: "처음 시작하는 10분 반신욕",
    subtitle: "37°C 미온수로 몸을 천천히 데워요",
    duration_minutes: 10,
};

const SAFE_ROUTINE: CareTemplate = CareTemplate {
    id: "care_safe_routine",
    title: "안전 우선 미온수 루틴",
    subtitle: "38°C 이하, 짧고 부드럽게 마무리해요",
    duration_minutes: 10,
};

const RESET_WITHOUT_COLD: CareTemplate = CareTemplate {
    id: "care_reset_no_cold",
    title: "냉수 없이 가벼운 리셋",
    subtitle: "온도 차이 없이 샤워로 기분을 환기해요",
    duration_minutes: 10,
};

const SLEEP_RITUAL: CareTemplate = CareTemplate {
    id: "care_sleep_ritual",
    title: "잠들기 전 라벤더 입욕",
    subtitle: "체온을 살짝 올렸다 내려 잠을 부르는 루틴",
    duration_minutes: 20,
};

const RECOVERY_SOAK: CareTemplate = CareTemplate {
    id: "care_recovery_soak",
    title: "뭉친 몸을 푸는 회복 입욕",
    subtitle: "따뜻한 물에 근육 긴장을 풀어요",
    duration_minutes: 15,
};

const RESET_SHOWER: CareTemplate = CareTemplate {
    id: "care_reset_shower",
    title: "기분 전환 리셋 샤워",
    subtitle: "상쾌한 향으로 머리를 맑게 해요",
    duration_minutes: 10,
};

fn mode_template(mode: HomeMode) -> &'static CareTemplate {
    match mode {
        HomeMode::Sleep => &SLEEP_RITUAL,
        HomeMode::Recovery => &RECOVERY_SOAK,
        HomeMode::Reset => &RESET_SHOWER,
    }
}

fn care_card(template: &CareTemplate, mode: HomeMode, rank: u8) -> HomeSuggestion {
    HomeSuggestion {
        id: template.id.to_string(),
        kind: SuggestionKind::Care,
        mode,
        title: template.title.to_string(),
        subtitle: template.subtitle.to_string(),
        duration_minutes: template.duration_minutes,
        theme_id: None,
        rank,
    }
}

/// Primary card: fallback template first, else the selected mode's template.
pub fn primary_suggestion(fallback: FallbackStrategy, selected_mode: HomeMode) -> HomeSuggestion {
    let template = match fallback {
        FallbackStrategy::DefaultStarterRitual => &STARTER_RITUAL,
        FallbackStrategy::SafeRoutineOnly => &SAFE_ROUTINE,
        FallbackStrategy::ResetWithoutCold => &RESET_WITHOUT_COLD,
        FallbackStrategy::RoutineOnlyNoCommerce | FallbackStrategy::None => {
            mode_template(selected_mode)
        }
    };
    care_card(template, selected_mode, 1)
}

/// Trip card carrying the selected mode, so fallback rules see what it serves.
fn trip_card(theme_id: Option<&str>, mode: HomeMode, rank: u8) -> Option<HomeSuggestion> {
    let theme = match theme_id {
        Some(id) => theme_or_default(id)?,
        None => THEMES.first()?,
    };
    Some(HomeSuggestion {
        id: format!("trip_{}", theme.id),
        kind: SuggestionKind::Trip,
        mode,
        title: theme.title.to_string(),
        subtitle: format!("{}°C 물에서 떠나는 짧은 여행", theme.base_temp),
        duration_minutes: TRIP_DEFAULT_MINUTES,
        theme_id: Some(theme.id.to_string()),
        rank,
    })
}

/// Secondary cards, at most [`MAX_SECONDARY_SUGGESTIONS`].
///
/// A resolved conflict suppresses every secondary.
pub fn secondary_suggestions(
    conflict: bool,
    fallback: FallbackStrategy,
    state: ActiveState,
    selected_mode: HomeMode,
    selected_theme_id: Option<&str>,
) -> Vec<HomeSuggestion> {
    if conflict {
        return Vec::new();
    }

    let mut cards = Vec::with_capacity(MAX_SECONDARY_SUGGESTIONS);

    let trip_allowed = matches!(
        fallback,
        FallbackStrategy::None | FallbackStrategy::RoutineOnlyNoCommerce
    ) && matches!(state, ActiveState::LowMood | ActiveState::WantReset);
    if trip_allowed {
        if let Some(card) = trip_card(selected_theme_id, selected_mode, 2) {
            cards.push(card);
        }
    }

    if fallback != FallbackStrategy::SafeRoutineOnly {
        let alternative = selected_mode.alternative();
        let rank = cards.len() as u8 + 2;
        cards.push(care_card(mode_template(alternative), alternative, rank));
    }

    cards.truncate(MAX_SECONDARY_SUGGESTIONS);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_prefers_fallback_template() {
        let card = primary_suggestion(FallbackStrategy::DefaultStarterRitual, HomeMode::Sleep);
        assert_eq!(card.id, "care_starter_ritual");
        assert_eq!(card.rank, 1);

        let card = primary_suggestion(FallbackStrategy::RoutineOnlyNoCommerce, HomeMode::Reset);
        assert_eq!(card.id, "care_reset_shower");
    }

    #[test]
    fn test_conflict_suppresses_everything() {
        let cards = secondary_suggestions(
            true,
            FallbackStrategy::None,
            ActiveState::LowMood,
            HomeMode::Sleep,
            None,
        );
        assert!(cards.is_empty());
    }

    #[test]
    fn test_trip_card_uses_selected_theme() {
        let cards = secondary_suggestions(
            false,
            FallbackStrategy::None,
            ActiveState::WantReset,
            HomeMode::Reset,
            Some("nordic_cabin"),
        );
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].theme_id.as_deref(), Some("nordic_cabin"));
        assert_eq!(cards[0].rank, 2);
        assert_eq!(cards[1].mode, HomeMode::Recovery);
        assert_eq!(cards[1].rank, 3);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_first() {
        let card = trip_card(Some("moon_base"), HomeMode::Reset, 2).unwrap();
        assert_eq!(card.theme_id.as_deref(), Some(THEMES[0].id));
    }

    #[test]
    fn test_trip_card_follows_selected_mode() {
        let cards = secondary_suggestions(
            false,
            FallbackStrategy::RoutineOnlyNoCommerce,
            ActiveState::LowMood,
            HomeMode::Recovery,
            None,
        );
        assert_eq!(cards[0].kind, SuggestionKind::Trip);
        assert_eq!(cards[0].mode, HomeMode::Recovery);
    }

    #[test]
    fn test_no_trip_for_tension() {
        let cards = secondary_suggestions(
            false,
            FallbackStrategy::None,
            ActiveState::Heavy,
            HomeMode::Recovery,
            None,
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, SuggestionKind::Care);
        assert_eq!(cards[0].rank, 2);
    }

    #[test]
    fn test_safe_routine_has_no_alternative() {
        let cards = secondary_suggestions(
            false,
            FallbackStrategy::SafeRoutineOnly,
            ActiveState::LowMood,
            HomeMode::Recovery,
            None,
        );
        assert!(cards.is_empty());
    }
}
