//! Safety filter - projects health conditions and tags onto hard limits.
//!
//! Accumulates across every rule whose trigger is present:
//! temperature ceiling = min of declared ceilings, banned ingredients are
//! appended then deduplicated, the last declared forced bath type wins, and
//! warnings are collected in catalog order.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::model::{BathType, DailyTag, HealthCondition, UserProfile};

/// What activates a rule: a persisted condition or a daily tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyTrigger {
    Condition(HealthCondition),
    Tag(DailyTag),
}

impl SafetyTrigger {
    fn is_active(&self, conditions: &[HealthCondition], tags: &[DailyTag]) -> bool {
        match self {
            SafetyTrigger::Condition(c) => conditions.contains(c),
            SafetyTrigger::Tag(t) => tags.contains(t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyRule {
    pub trigger: SafetyTrigger,
    pub max_temp: Option<u8>,
    pub banned_ingredients: &'static [&'static str],
    pub forced_bath_type: Option<BathType>,
    pub warning: &'static str,
    pub severity: Severity,
}

/// Health conditions first, then the hangover tag.
pub static SAFETY_RULES: &[SafetyRule] = &[
    SafetyRule {
        trigger: SafetyTrigger::Condition(HealthCondition::HypertensionHeart),
        max_temp: Some(38),
        banned_ingredients: &["rosemary_oil"],
        forced_bath_type: None,
        warning: "고혈압·심장 질환이 있어 38°C 이하로 조정했어요. 어지럽거나 가슴이 답답하면 바로 나오세요.",
        severity: Severity::Block,
    },
    SafetyRule {
        trigger: SafetyTrigger::Condition(HealthCondition::Pregnant),
        max_temp: Some(38),
        banned_ingredients: &["peppermint_oil", "rosemary_oil", "clary_sage_oil"],
        forced_bath_type: None,
        warning: "임신 중에는 38°C 이하를 지키고, 자궁 수축을 유발할 수 있는 오일은 제외했어요.",
        severity: Severity::Block,
    },
    SafetyRule {
        trigger: SafetyTrigger::Condition(HealthCondition::Diabetes),
        max_temp: Some(40),
        banned_ingredients: &[],
        forced_bath_type: None,
        warning: "당뇨가 있으면 온도 감각이 둔해질 수 있어요. 손목으로 수온을 먼저 확인하세요.",
        severity: Severity::Warn,
    },
    SafetyRule {
        trigger: SafetyTrigger::Condition(HealthCondition::SensitiveSkin),
        max_temp: None,
        banned_ingredients: &["peppermint_oil", "eucalyptus_oil"],
        forced_bath_type: None,
        warning: "민감성 피부를 위해 자극이 강한 성분을 뺐어요. 입욕 후 보습을 꼭 해주세요.",
        severity: Severity::Warn,
    },
    SafetyRule {
        trigger: SafetyTrigger::Tag(DailyTag::Hangover),
        max_temp: Some(38),
        banned_ingredients: &[],
        forced_bath_type: Some(BathType::Foot),
        warning: "음주 후 전신욕은 혈압이 급격히 떨어질 수 있어 족욕으로 바꿨어요. 물을 충분히 마셔 주세요.",
        severity: Severity::Block,
    },
];

/// Accumulated limits for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyFilterResult {
    pub max_temperature: Option<u8>,
    pub banned_ingredients: Vec<String>,
    pub forced_bath_type: Option<BathType>,
    pub warnings: Vec<String>,
    /// Strongest severity among triggered rules
    pub severity: Option<Severity>,
}

impl SafetyFilterResult {
    pub fn is_banned(&self, ingredient_id: &str) -> bool {
        self.banned_ingredients.iter().any(|b| b == ingredient_id)
    }
}

/// Run the safety rules over `profile`'s conditions and today's `tags`.
#[instrument(
    name = "apply_safety_filter",
    skip_all,
    fields(conditions = ?profile.health_conditions, tags = ?tags)
)]
pub fn apply_safety_filter(profile: &UserProfile, tags: &[DailyTag]) -> SafetyFilterResult {
    filter_with_rules(SAFETY_RULES, &profile.health_conditions, tags)
}

pub(crate) fn filter_with_rules(
    rules: &[SafetyRule],
    conditions: &[HealthCondition],
    tags: &[DailyTag],
) -> SafetyFilterResult {
    let mut result = SafetyFilterResult::default();

    for rule in rules.iter().filter(|r| r.trigger.is_active(conditions, tags)) {
        if let Some(max) = rule.max_temp {
            result.max_temperature = Some(result.max_temperature.map_or(max, |c| c.min(max)));
        }
        result
            .banned_ingredients
            .extend(rule.banned_ingredients.iter().map(|id| id.to_string()));
        if rule.forced_bath_type.is_some() {
            result.forced_bath_type = rule.forced_bath_type;
        }
        result.warnings.push(rule.warning.to_string());
        result.severity = result.severity.max(Some(rule.severity));

        debug!(trigger = ?rule.trigger, max_temp = ?rule.max_temp, "Safety rule triggered");
    }

    let mut seen = std::collections::HashSet::new();
    result.banned_ingredients.retain(|id| seen.insert(id.clone()));

    result
}
