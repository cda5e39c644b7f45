//! The persisted health profile.

use serde::{Deserialize, Serialize};

use super::{BathEnvironment, HealthCondition};
use crate::error::{EngineError, Result};

/// A user's stored bathing setup and health conditions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Environment used when a request does not name one
    #[serde(default)]
    pub environment: BathEnvironment,

    /// Empty until the user finishes onboarding; `[none]` once they declare nothing applies
    #[serde(default)]
    pub health_conditions: Vec<HealthCondition>,
}

impl UserProfile {
    /// Build a validated profile. Duplicate conditions collapse.
    pub fn new(environment: BathEnvironment, conditions: &[HealthCondition]) -> Result<Self> {
        let mut health_conditions: Vec<HealthCondition> = Vec::with_capacity(conditions.len());
        for condition in conditions {
            if !health_conditions.contains(condition) {
                health_conditions.push(*condition);
            }
        }

        let profile = Self {
            environment,
            health_conditions,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// `none` must not be combined with any other condition.
    pub fn validate(&self) -> Result<()> {
        let has_none = self.health_conditions.contains(&HealthCondition::None);
        if has_none && self.health_conditions.len() > 1 {
            return Err(EngineError::InvalidProfile {
                reason: "'none' cannot be combined with other health conditions".to_string(),
            });
        }
        Ok(())
    }

    pub fn has_condition(&self, condition: HealthCondition) -> bool {
        self.health_conditions.contains(&condition)
    }

    /// A profile is complete once the health question has been answered.
    pub fn is_complete(&self) -> bool {
        !self.health_conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_exclusive() {
        let err = UserProfile::new(
            BathEnvironment::Bathtub,
            &[HealthCondition::None, HealthCondition::Diabetes],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidProfile { .. }));

        let ok = UserProfile::new(BathEnvironment::Shower, &[HealthCondition::None]).unwrap();
        assert!(ok.is_complete());
        assert!(ok.has_condition(HealthCondition::None));
    }

    #[test]
    fn test_duplicates_collapse() {
        let profile = UserProfile::new(
            BathEnvironment::Bathtub,
            &[HealthCondition::Pregnant, HealthCondition::Pregnant],
        )
        .unwrap();
        assert_eq!(profile.health_conditions, vec![HealthCondition::Pregnant]);
    }

    #[test]
    fn test_default_profile_is_incomplete() {
        let profile = UserProfile::default();
        assert!(!profile.is_complete());
        assert_eq!(profile.environment, BathEnvironment::Bathtub);
    }
}
