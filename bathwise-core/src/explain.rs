//! Human-readable rationale shared by the care and home surfaces.

use serde::{Deserialize, Serialize};

use crate::home::{base_mode, FallbackStrategy, HomeMode, HomeSuggestion, SuggestionKind};
use crate::model::{ActiveState, BathEnvironment, BathRecommendation, RecommendationMode};

/// Shown under every explanation.
pub const MEDICAL_DISCLAIMER: &str =
    "이 추천은 일반적인 웰니스 정보이며 의학적 진단이나 치료를 대신하지 않아요. 건강 상태가 걱정된다면 전문가와 상담하세요.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionExplanation {
    pub headline: String,
    pub reasons: Vec<String>,
    pub disclosure: String,
}

/// Why the home surface chose `suggestion` for this state and mode.
pub fn build_suggestion_explanation(
    suggestion: &HomeSuggestion,
    active_state: ActiveState,
    selected_mode: HomeMode,
) -> SuggestionExplanation {
    let headline = match suggestion.kind {
        SuggestionKind::Care => format!(
            "{}에 맞춘 {} 루틴이에요",
            active_state.label_ko(),
            suggestion.mode.label_ko()
        ),
        SuggestionKind::Trip => format!("{}(으)로 잠시 떠나 볼까요", suggestion.title),
    };

    let mut reasons = vec![format!("오늘의 상태: {}", active_state.label_ko())];

    let base = base_mode(active_state);
    if suggestion.rank == 1 && base != selected_mode {
        reasons.push(format!(
            "지금 시간대에는 {} 대신 {} 루틴이 더 잘 맞아요",
            base.label_ko(),
            selected_mode.label_ko()
        ));
    }
    match suggestion.kind {
        SuggestionKind::Trip => {
            reasons.push("기분 전환이 필요한 날에는 짧은 테마 여행을 곁들여요".to_string())
        }
        SuggestionKind::Care if suggestion.mode != selected_mode => reasons.push(format!(
            "{} 루틴이 맞지 않다면 {} 루틴도 괜찮아요",
            selected_mode.label_ko(),
            suggestion.mode.label_ko()
        )),
        SuggestionKind::Care => {}
    }
    reasons.push(format!("{}분이면 충분해요", suggestion.duration_minutes));

    SuggestionExplanation {
        headline,
        reasons,
        disclosure: MEDICAL_DISCLAIMER.to_string(),
    }
}

/// The notice shown for a non-`none` fallback.
pub fn fallback_notice(strategy: FallbackStrategy) -> Option<&'static str> {
    match strategy {
        FallbackStrategy::SafeRoutineOnly => {
            Some("건강 상태를 고려해 온도와 시간을 낮춘 안전 루틴만 보여드려요.")
        }
        FallbackStrategy::ResetWithoutCold => {
            Some("냉수 자극은 부담이 될 수 있어 온도 차이 없는 리셋으로 바꿨어요.")
        }
        FallbackStrategy::DefaultStarterRitual => {
            Some("프로필이 완성되지 않아 누구에게나 무난한 기본 루틴으로 시작해요.")
        }
        FallbackStrategy::RoutineOnlyNoCommerce => {
            Some("지금은 추천할 제품이 없어 루틴만 안내해요.")
        }
        FallbackStrategy::None => None,
    }
}

/// Advisory attached when an option fits another environment better.
pub fn environment_advisory(environment: BathEnvironment) -> String {
    format!("이 선택은 {} 환경에서 더 편안할 수 있어요", environment.label_ko())
}

/// Why-lines for a finished recommendation.
pub fn explain_recommendation(rec: &BathRecommendation) -> Vec<String> {
    let mut lines = Vec::new();

    match (rec.mode, rec.theme_title.as_deref()) {
        (RecommendationMode::Trip, Some(title)) => {
            lines.push(format!("'{title}' 테마의 분위기를 입욕에 담았어요"))
        }
        _ => lines.push(format!("{}을 기준으로 구성했어요", rec.persona_code.label_ko())),
    }

    let duration = rec
        .duration_minutes
        .map(|d| format!(", {d}분"))
        .unwrap_or_default();
    lines.push(format!(
        "{} {}°C{} ({}~{}°C)",
        rec.bath_type.label_ko(),
        rec.temperature.recommended,
        duration,
        rec.temperature.min,
        rec.temperature.max
    ));

    let label = if rec.is_safety_blocked() {
        "안전 조정"
    } else {
        "주의"
    };
    for warning in &rec.safety_warnings {
        lines.push(format!("{label}: {warning}"));
    }

    if rec.environment_used != BathEnvironment::Bathtub {
        lines.push(format!(
            "{} 환경에 맞춰 {}(으)로 조정했어요",
            rec.environment_used.label_ko(),
            rec.bath_type.label_ko()
        ));
    }

    if let Some(hints) = &rec.environment_hints {
        lines.extend(hints.iter().cloned());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_care_recommendation;
    use crate::home::primary_suggestion;
    use crate::model::{DailyTag, HealthCondition, UserProfile};

    #[test]
    fn test_every_fallback_but_none_has_notice() {
        for strategy in [
            FallbackStrategy::SafeRoutineOnly,
            FallbackStrategy::ResetWithoutCold,
            FallbackStrategy::DefaultStarterRitual,
            FallbackStrategy::RoutineOnlyNoCommerce,
        ] {
            assert!(fallback_notice(strategy).is_some(), "{strategy}");
        }
        assert_eq!(fallback_notice(FallbackStrategy::None), None);
    }

    #[test]
    fn test_conflict_is_explained() {
        let card = primary_suggestion(FallbackStrategy::None, HomeMode::Recovery);
        let explanation =
            build_suggestion_explanation(&card, ActiveState::CantSleep, HomeMode::Recovery);
        assert!(explanation.reasons.iter().any(|r| r.contains("시간대")));
        assert_eq!(explanation.disclosure, MEDICAL_DISCLAIMER);
    }

    #[test]
    fn test_no_conflict_reason_without_conflict() {
        let card = primary_suggestion(FallbackStrategy::None, HomeMode::Sleep);
        let explanation =
            build_suggestion_explanation(&card, ActiveState::CantSleep, HomeMode::Sleep);
        assert!(!explanation.reasons.iter().any(|r| r.contains("시간대")));
        assert!(explanation.headline.contains("수면"));
    }

    #[test]
    fn test_explain_shower_recommendation() {
        let profile = UserProfile::new(BathEnvironment::Shower, &[HealthCondition::None]).unwrap();
        let rec =
            generate_care_recommendation(&profile, &[DailyTag::Insomnia], BathEnvironment::Shower)
                .unwrap();
        let lines = explain_recommendation(&rec);
        assert!(lines[0].contains("수면"));
        assert!(lines.iter().any(|l| l.contains("샤워 환경")));
    }

    #[test]
    fn test_warning_label_follows_severity() {
        let calm = UserProfile::new(BathEnvironment::Bathtub, &[HealthCondition::None]).unwrap();
        let blocked =
            generate_care_recommendation(&calm, &[DailyTag::Hangover], BathEnvironment::Bathtub)
                .unwrap();
        assert!(explain_recommendation(&blocked)
            .iter()
            .any(|l| l.starts_with("안전 조정: ")));

        let skin =
            UserProfile::new(BathEnvironment::Bathtub, &[HealthCondition::SensitiveSkin]).unwrap();
        let advised =
            generate_care_recommendation(&skin, &[DailyTag::Stress], BathEnvironment::Bathtub)
                .unwrap();
        let lines = explain_recommendation(&advised);
        assert!(lines.iter().any(|l| l.starts_with("주의: ")));
        assert!(!lines.iter().any(|l| l.starts_with("안전 조정")));
    }
}
