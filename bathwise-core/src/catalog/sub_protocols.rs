//! Fine-grained variants of an intent the user can pick after a recommendation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::model::BathEnvironment;

/// One selectable variant. Applied as a bounded override on a finished recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProtocolOption {
    pub id: String,
    pub intent_id: String,
    pub label: String,
    /// Minutes added to (or removed from) the recommended duration
    #[serde(default)]
    pub duration_delta: i32,
    #[serde(default)]
    pub lighting_note: Option<String>,
    #[serde(default)]
    pub behavior_blocks: Vec<String>,
    /// Informational only; never changes parameters
    #[serde(default)]
    pub environment_bias: Option<BathEnvironment>,
}

fn option(
    intent_id: &str,
    id: &str,
    label: &str,
    duration_delta: i32,
    lighting_note: Option<&str>,
    behavior_blocks: &[&str],
    environment_bias: Option<BathEnvironment>,
) -> SubProtocolOption {
    SubProtocolOption {
        id: id.to_string(),
        intent_id: intent_id.to_string(),
        label: label.to_string(),
        duration_delta,
        lighting_note: lighting_note.map(str::to_string),
        behavior_blocks: behavior_blocks.iter().map(|b| b.to_string()).collect(),
        environment_bias,
    }
}

static SUB_PROTOCOLS: Lazy<Vec<SubProtocolOption>> = Lazy::new(|| {
    vec![
        option(
            "sleep_prep",
            "deep_breath",
            "4-7-8 호흡과 함께",
            0,
            Some("호흡에 맞춰 조명을 한 단계 더 낮추기"),
            &["입욕 중 4-7-8 호흡 4회", "입욕 후 30분 화면 보지 않기"],
            None,
        ),
        option(
            "sleep_prep",
            "short_warm",
            "짧고 따뜻하게",
            -5,
            None,
            &["입욕 후 미지근한 물 한 잔"],
            Some(BathEnvironment::Bathtub),
        ),
        option(
            "muscle_relief",
            "stretch_soak",
            "스트레칭 병행",
            5,
            Some("밝기를 유지해 동작을 확인하기"),
            &["종아리 스트레칭 2분", "어깨 돌리기 10회"],
            Some(BathEnvironment::Bathtub),
        ),
        option(
            "muscle_relief",
            "quick_rinse",
            "빠른 회복 샤워",
            -10,
            None,
            &["뭉친 부위에 따뜻한 물 1분씩"],
            Some(BathEnvironment::Shower),
        ),
        option(
            "mood_reset",
            "journal_after",
            "입욕 후 한 줄 일기",
            0,
            Some("따뜻한 색 조명으로 바꾸기"),
            &["입욕 후 오늘 좋았던 일 한 줄 적기"],
            None,
        ),
        option(
            "mood_reset",
            "foot_only",
            "가볍게 족욕만",
            -5,
            None,
            &[],
            Some(BathEnvironment::PartialBath),
        ),
    ]
});

/// All options declared for an intent, in catalog order.
pub fn sub_protocols_for_intent(intent_id: &str) -> Vec<&'static SubProtocolOption> {
    SUB_PROTOCOLS
        .iter()
        .filter(|o| o.intent_id == intent_id)
        .collect()
}

/// Option by intent and id.
pub fn sub_protocol(intent_id: &str, sub_protocol_id: &str) -> Option<&'static SubProtocolOption> {
    SUB_PROTOCOLS
        .iter()
        .find(|o| o.intent_id == intent_id && o.id == sub_protocol_id)
}
