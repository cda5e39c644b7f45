//! Data model shared by the recommendation engine and the home orchestrator.

mod bath;
mod condition;
mod profile;
mod recommendation;
mod state;

pub use bath::{BathEnvironment, BathType, TemperatureRange};
pub use condition::{DailyTag, HealthCondition};
pub use profile::UserProfile;
pub use recommendation::{
    BathRecommendation, Feedback, FeedbackRating, RecommendationMode, ResolvedIngredient,
};
pub use state::{ActiveState, TimeContext};
