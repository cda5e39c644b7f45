//! Home-surface inputs: how the user says they are, and when.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The state the user picks on the home surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveState {
    Tension,
    Heavy,
    CantSleep,
    LowMood,
    WantReset,
}

impl ActiveState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveState::Tension => "tension",
            ActiveState::Heavy => "heavy",
            ActiveState::CantSleep => "cant_sleep",
            ActiveState::LowMood => "low_mood",
            ActiveState::WantReset => "want_reset",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            ActiveState::Tension => "몸이 긴장된 날",
            ActiveState::Heavy => "몸이 무거운 날",
            ActiveState::CantSleep => "잠들기 어려운 날",
            ActiveState::LowMood => "마음이 가라앉은 날",
            ActiveState::WantReset => "기분 전환이 필요한 날",
        }
    }
}

impl fmt::Display for ActiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActiveState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tension" => Ok(ActiveState::Tension),
            "heavy" => Ok(ActiveState::Heavy),
            "cant_sleep" => Ok(ActiveState::CantSleep),
            "low_mood" => Ok(ActiveState::LowMood),
            "want_reset" => Ok(ActiveState::WantReset),
            _ => Err(format!(
                "Unknown active state: '{s}'. Valid options: tension, heavy, cant_sleep, low_mood, want_reset"
            )),
        }
    }
}

/// Time-of-day bucket used by the home mode policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeContext {
    LateNight,
    Morning,
    Day,
    Evening,
}

impl TimeContext {
    /// Bucket a local clock hour (0-23). Hours past 23 wrap.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=10 => TimeContext::Morning,
            11..=17 => TimeContext::Day,
            18..=21 => TimeContext::Evening,
            _ => TimeContext::LateNight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeContext::LateNight => "late_night",
            TimeContext::Morning => "morning",
            TimeContext::Day => "day",
            TimeContext::Evening => "evening",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            TimeContext::LateNight => "늦은 밤",
            TimeContext::Morning => "아침",
            TimeContext::Day => "낮",
            TimeContext::Evening => "저녁",
        }
    }
}

impl fmt::Display for TimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "late_night" | "night" => Ok(TimeContext::LateNight),
            "morning" => Ok(TimeContext::Morning),
            "day" => Ok(TimeContext::Day),
            "evening" => Ok(TimeContext::Evening),
            _ => Err(format!(
                "Unknown time context: '{s}'. Valid options: late_night, morning, day, evening"
            )),
        }
    }
}
