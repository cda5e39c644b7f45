//! The finished recommendation entity and its feedback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BathEnvironment, BathType, TemperatureRange};
use crate::engine::persona::PersonaCode;
use crate::engine::safety::Severity;

/// Which pipeline produced the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    Care,
    Trip,
}

/// An ingredient id resolved against the ingredient catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIngredient {
    pub id: String,
    pub name_ko: String,
    pub name_en: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackRating {
    Good,
    Neutral,
    Bad,
}

impl fmt::Display for FeedbackRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedbackRating::Good => "good",
            FeedbackRating::Neutral => "neutral",
            FeedbackRating::Bad => "bad",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for FeedbackRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(FeedbackRating::Good),
            "neutral" => Ok(FeedbackRating::Neutral),
            "bad" => Ok(FeedbackRating::Bad),
            _ => Err(format!(
                "Unknown rating: '{s}'. Valid options: good, neutral, bad"
            )),
        }
    }
}

/// Post-bath feedback attached to a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub rating: FeedbackRating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// A finished bath routine.
///
/// Serialized with camelCase keys; this is the shape kept in the persisted
/// history blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BathRecommendation {
    /// Time-ordered UUID v7
    pub id: String,
    pub mode: RecommendationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_title: Option<String>,
    pub persona_code: PersonaCode,
    pub environment_used: BathEnvironment,
    pub bath_type: BathType,
    pub temperature: TemperatureRange,
    /// `None` means unlimited
    pub duration_minutes: Option<u32>,
    pub ingredients: Vec<ResolvedIngredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_track_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambience_track_id: Option<String>,
    pub lighting: String,
    pub safety_warnings: Vec<String>,
    /// Strongest severity among the safety rules that fired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_severity: Option<Severity>,
    pub color_hex: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,

    // Set only by sub-protocol overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior_blocks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_protocol_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_hints: Option<Vec<String>>,
}

impl BathRecommendation {
    pub fn ingredient_ids(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.id.as_str()).collect()
    }

    pub fn has_ingredient(&self, id: &str) -> bool {
        self.ingredients.iter().any(|i| i.id == id)
    }

    /// A blocking rule changed the routine itself, not just advised on it.
    pub fn is_safety_blocked(&self) -> bool {
        self.safety_severity == Some(Severity::Block)
    }
}
