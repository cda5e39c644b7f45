//! Health conditions (persisted) and daily tags (per request).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted, longer-lived medical/safety attribute of the user.
///
/// `None` is mutually exclusive with every other condition; see
/// [`UserProfile::new`](super::UserProfile::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    HypertensionHeart,
    Pregnant,
    Diabetes,
    SensitiveSkin,
    None,
}

impl HealthCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCondition::HypertensionHeart => "hypertension_heart",
            HealthCondition::Pregnant => "pregnant",
            HealthCondition::Diabetes => "diabetes",
            HealthCondition::SensitiveSkin => "sensitive_skin",
            HealthCondition::None => "none",
        }
    }

    /// High-risk conditions force the home surface into `SAFE_ROUTINE_ONLY`.
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self,
            HealthCondition::HypertensionHeart | HealthCondition::Pregnant
        )
    }

    /// Conditions for which a hot/cold reset routine is not offered.
    pub fn is_reset_contraindicated(&self) -> bool {
        matches!(
            self,
            HealthCondition::HypertensionHeart
                | HealthCondition::Pregnant
                | HealthCondition::Diabetes
        )
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HealthCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hypertension_heart" | "hypertension" => Ok(HealthCondition::HypertensionHeart),
            "pregnant" => Ok(HealthCondition::Pregnant),
            "diabetes" => Ok(HealthCondition::Diabetes),
            "sensitive_skin" => Ok(HealthCondition::SensitiveSkin),
            "none" => Ok(HealthCondition::None),
            _ => Err(format!(
                "Unknown health condition: '{s}'. Valid options: hypertension_heart, pregnant, diabetes, sensitive_skin, none"
            )),
        }
    }
}

/// A transient self-reported state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyTag {
    MusclePain,
    Swelling,
    Cold,
    MenstrualPain,
    Hangover,
    Insomnia,
    Stress,
    Depression,
}

impl DailyTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyTag::MusclePain => "muscle_pain",
            DailyTag::Swelling => "swelling",
            DailyTag::Cold => "cold",
            DailyTag::MenstrualPain => "menstrual_pain",
            DailyTag::Hangover => "hangover",
            DailyTag::Insomnia => "insomnia",
            DailyTag::Stress => "stress",
            DailyTag::Depression => "depression",
        }
    }
}

impl fmt::Display for DailyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DailyTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "muscle_pain" => Ok(DailyTag::MusclePain),
            "swelling" => Ok(DailyTag::Swelling),
            "cold" => Ok(DailyTag::Cold),
            "menstrual_pain" => Ok(DailyTag::MenstrualPain),
            "hangover" => Ok(DailyTag::Hangover),
            "insomnia" => Ok(DailyTag::Insomnia),
            "stress" => Ok(DailyTag::Stress),
            "depression" => Ok(DailyTag::Depression),
            _ => Err(format!(
                "Unknown daily tag: '{s}'. Valid options: muscle_pain, swelling, cold, menstrual_pain, hangover, insomnia, stress, depression"
            )),
        }
    }
}
