//! Trip themes: a destination mood folded into the care pipeline.

use super::lookup_or_default;
use crate::model::BathType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub title: &'static str,
    /// Recommended water temperature in °C
    pub base_temp: u8,
    /// Ingredient id of the signature scent
    pub rec_scent: &'static str,
    pub lighting: &'static str,
    pub music_id: &'static str,
    pub ambience_id: &'static str,
    pub default_bath_type: BathType,
}

pub static THEMES: &[Theme] = &[
    Theme {
        id: "kyoto_forest",
        title: "교토 숲속 료칸",
        base_temp: 40,
        rec_scent: "hinoki_oil",
        lighting: "대나무 사이로 스미는 초록빛 간접 조명",
        music_id: "music_forest_strings",
        ambience_id: "amb_forest_birds",
        default_bath_type: BathType::Full,
    },
    Theme {
        id: "nordic_cabin",
        title: "북유럽 눈 덮인 오두막",
        base_temp: 39,
        rec_scent: "cedarwood_oil",
        lighting: "장작불 같은 앰버 조명",
        music_id: "music_warm_acoustic",
        ambience_id: "amb_fireplace",
        default_bath_type: BathType::Full,
    },
    Theme {
        id: "jeju_citrus",
        title: "제주 감귤밭 노천탕",
        base_temp: 40,
        rec_scent: "yuzu_peel",
        lighting: "해 질 녘 오렌지빛 조명",
        music_id: "music_lofi_groove",
        ambience_id: "amb_ocean_waves",
        default_bath_type: BathType::Half,
    },
    Theme {
        id: "rainy_library",
        title: "비 오는 날의 서재",
        base_temp: 38,
        rec_scent: "bergamot_oil",
        lighting: "스탠드 하나만 켠 듯한 노란 조명",
        music_id: "music_slow_piano",
        ambience_id: "amb_rain_window",
        default_bath_type: BathType::Half,
    },
];

/// Theme by id, else the first catalog theme.
pub fn theme_or_default(id: &str) -> Option<&'static Theme> {
    lookup_or_default(THEMES, |t| t.id == id)
}
