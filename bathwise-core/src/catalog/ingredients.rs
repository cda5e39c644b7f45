//! Ingredient catalog: id -> names, description, contraindications.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::model::{HealthCondition, ResolvedIngredient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: &'static str,
    pub name_ko: &'static str,
    pub name_en: &'static str,
    pub description: &'static str,
    pub purchase_url: Option<&'static str>,
    pub contraindications: &'static [HealthCondition],
}

impl Ingredient {
    /// True when any of `conditions` appears in this ingredient's contraindications.
    pub fn is_contraindicated_for(&self, conditions: &[HealthCondition]) -> bool {
        self.contraindications.iter().any(|c| conditions.contains(c))
    }

    pub fn resolve(&self) -> ResolvedIngredient {
        ResolvedIngredient {
            id: self.id.to_string(),
            name_ko: self.name_ko.to_string(),
            name_en: self.name_en.to_string(),
            description: self.description.to_string(),
            purchase_url: self.purchase_url.map(str::to_string),
        }
    }
}

use HealthCondition::{Diabetes, HypertensionHeart, Pregnant, SensitiveSkin};

pub static INGREDIENTS: &[Ingredient] = &[
    Ingredient {
        id: "lavender_oil",
        name_ko: "라벤더 오일",
        name_en: "Lavender Oil",
        description: "긴장을 낮추고 잠들기 쉬운 상태로 이끄는 대표적인 릴랙싱 오일",
        purchase_url: Some("https://store.bathwise.app/products/lavender-oil"),
        contraindications: &[],
    },
    Ingredient {
        id: "chamomile_oil",
        name_ko: "캐모마일 오일",
        name_en: "Roman Chamomile Oil",
        description: "부드러운 향으로 예민해진 마음을 가라앉혀요",
        purchase_url: None,
        contraindications: &[],
    },
    Ingredient {
        id: "epsom_salt",
        name_ko: "엡솜 솔트",
        name_en: "Epsom Salt",
        description: "마그네슘 입욕제로 뭉친 근육을 풀어줘요",
        purchase_url: Some("https://store.bathwise.app/products/epsom-salt"),
        contraindications: &[Diabetes],
    },
    Ingredient {
        id: "rosemary_oil",
        name_ko: "로즈마리 오일",
        name_en: "Rosemary Oil",
        description: "혈행을 돕고 근육 피로를 덜어주는 상쾌한 허브 오일",
        purchase_url: None,
        contraindications: &[HypertensionHeart, Pregnant],
    },
    Ingredient {
        id: "peppermint_oil",
        name_ko: "페퍼민트 오일",
        name_en: "Peppermint Oil",
        description: "청량감으로 머리를 맑게 해요",
        purchase_url: None,
        contraindications: &[Pregnant, SensitiveSkin],
    },
    Ingredient {
        id: "clary_sage_oil",
        name_ko: "클라리세이지 오일",
        name_en: "Clary Sage Oil",
        description: "생리통과 긴장 완화에 쓰이는 허브 오일",
        purchase_url: None,
        contraindications: &[Pregnant],
    },
    Ingredient {
        id: "carbonated_bath",
        name_ko: "탄산 입욕제",
        name_en: "Carbonated Bath Tablet",
        description: "미세한 탄산 기포가 말초 혈액순환을 도와요",
        purchase_url: Some("https://store.bathwise.app/products/carbonated-bath"),
        contraindications: &[],
    },
    Ingredient {
        id: "ginger_salt",
        name_ko: "생강 솔트",
        name_en: "Ginger Bath Salt",
        description: "몸을 속부터 데워 냉기와 부기를 덜어줘요",
        purchase_url: None,
        contraindications: &[SensitiveSkin],
    },
    Ingredient {
        id: "eucalyptus_oil",
        name_ko: "유칼립투스 오일",
        name_en: "Eucalyptus Oil",
        description: "시원한 향으로 호흡을 편안하게 해요",
        purchase_url: None,
        contraindications: &[SensitiveSkin],
    },
    Ingredient {
        id: "shower_steamer",
        name_ko: "샤워 스티머",
        name_en: "Shower Steamer",
        description: "샤워 바닥에 두면 증기와 함께 향이 퍼져요",
        purchase_url: None,
        contraindications: &[],
    },
    Ingredient {
        id: "body_wash_relaxing",
        name_ko: "릴랙싱 바디워시",
        name_en: "Relaxing Body Wash",
        description: "샤워만으로도 향 루틴을 이어가는 저자극 바디워시",
        purchase_url: None,
        contraindications: &[],
    },
    Ingredient {
        id: "hinoki_oil",
        name_ko: "편백 오일",
        name_en: "Hinoki Oil",
        description: "숲속 료칸의 나무 향",
        purchase_url: None,
        contraindications: &[],
    },
    Ingredient {
        id: "cedarwood_oil",
        name_ko: "시더우드 오일",
        name_en: "Cedarwood Oil",
        description: "따뜻하고 차분한 우디 향",
        purchase_url: None,
        contraindications: &[],
    },
    Ingredient {
        id: "yuzu_peel",
        name_ko: "유자 입욕제",
        name_en: "Yuzu Peel Bath",
        description: "상큼한 시트러스 향으로 기분을 환기해요",
        purchase_url: None,
        contraindications: &[SensitiveSkin],
    },
    Ingredient {
        id: "bergamot_oil",
        name_ko: "베르가못 오일",
        name_en: "Bergamot Oil",
        description: "가라앉은 기분을 밝혀주는 시트러스 플로럴 향",
        purchase_url: None,
        contraindications: &[SensitiveSkin],
    },
];

static INGREDIENT_INDEX: Lazy<HashMap<&'static str, &'static Ingredient>> =
    Lazy::new(|| INGREDIENTS.iter().map(|i| (i.id, i)).collect());

/// Look up an ingredient by id.
pub fn ingredient(id: &str) -> Option<&'static Ingredient> {
    INGREDIENT_INDEX.get(id).copied()
}
