//! Bath type, bathing environment and water temperature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the body goes in the water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BathType {
    Full,
    Half,
    Foot,
    Shower,
}

impl BathType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BathType::Full => "full",
            BathType::Half => "half",
            BathType::Foot => "foot",
            BathType::Shower => "shower",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            BathType::Full => "전신욕",
            BathType::Half => "반신욕",
            BathType::Foot => "족욕",
            BathType::Shower => "샤워",
        }
    }
}

impl fmt::Display for BathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The physical bathing setup available to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BathEnvironment {
    #[default]
    Bathtub,
    PartialBath,
    Footbath,
    Shower,
}

impl BathEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            BathEnvironment::Bathtub => "bathtub",
            BathEnvironment::PartialBath => "partial_bath",
            BathEnvironment::Footbath => "footbath",
            BathEnvironment::Shower => "shower",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            BathEnvironment::Bathtub => "욕조",
            BathEnvironment::PartialBath | BathEnvironment::Footbath => "족욕·부분욕",
            BathEnvironment::Shower => "샤워",
        }
    }

    /// `footbath` and `partial_bath` are the same environment for every policy.
    pub fn normalized(self) -> Self {
        match self {
            BathEnvironment::Footbath => BathEnvironment::PartialBath,
            other => other,
        }
    }
}

impl fmt::Display for BathEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BathEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bathtub" | "tub" => Ok(BathEnvironment::Bathtub),
            "partial_bath" | "partial" => Ok(BathEnvironment::PartialBath),
            "footbath" | "foot" => Ok(BathEnvironment::Footbath),
            "shower" => Ok(BathEnvironment::Shower),
            _ => Err(format!(
                "Unknown environment: '{s}'. Valid options: bathtub, partial_bath, footbath, shower"
            )),
        }
    }
}

/// Water temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: u8,
    pub max: u8,
    pub recommended: u8,
}

impl TemperatureRange {
    pub const fn new(min: u8, max: u8, recommended: u8) -> Self {
        Self {
            min,
            max,
            recommended,
        }
    }

    /// Clamp every field to `ceiling`. Applying the same ceiling twice is a no-op.
    pub fn clamp_to(self, ceiling: u8) -> Self {
        Self {
            min: self.min.min(ceiling),
            max: self.max.min(ceiling),
            recommended: self.recommended.min(ceiling),
        }
    }
}
