//! Recommendation history and its JSON file store.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::MAX_HISTORY_LIMIT;
use crate::error::{EngineError, Result};
use crate::model::{BathRecommendation, Feedback};

/// Newest-first list of past recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationHistory {
    entries: Vec<BathRecommendation>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    MAX_HISTORY_LIMIT
}

impl Default for RecommendationHistory {
    fn default() -> Self {
        Self::with_limit(MAX_HISTORY_LIMIT)
    }
}

impl RecommendationHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.clamp(1, MAX_HISTORY_LIMIT),
        }
    }

    /// Change the bound, dropping the oldest entries if needed.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.clamp(1, MAX_HISTORY_LIMIT);
        self.entries.truncate(self.limit);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn entries(&self) -> &[BathRecommendation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the front; the oldest entry falls off past the limit.
    pub fn push(&mut self, recommendation: BathRecommendation) {
        self.entries.insert(0, recommendation);
        self.entries.truncate(self.limit);
    }

    pub fn find(&self, id: &str) -> Option<&BathRecommendation> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn record_feedback(&mut self, id: &str, feedback: Feedback) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::UnknownRecommendation { id: id.to_string() })?;
        entry.feedback = Some(feedback);
        Ok(())
    }

    /// Swap the entry with the same id, keeping its position.
    pub fn replace(&mut self, recommendation: BathRecommendation) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|r| r.id == recommendation.id)
            .ok_or_else(|| EngineError::UnknownRecommendation {
                id: recommendation.id.clone(),
            })?;
        *entry = recommendation;
        Ok(())
    }
}

/// Async JSON store for [`RecommendationHistory`].
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the history. A missing file loads as empty; any other read
    /// failure is an error.
    pub async fn load(&self, limit: usize) -> Result<RecommendationHistory> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file - starting empty");
                return Ok(RecommendationHistory::with_limit(limit));
            }
            Err(source) => {
                return Err(EngineError::HistoryRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let mut history: RecommendationHistory = serde_json::from_str(&content)
            .map_err(|source| EngineError::HistoryParse { source })?;
        history.set_limit(limit);

        debug!(entries = history.len(), "Loaded history");
        Ok(history)
    }

    /// Write the history, creating the parent directory when needed.
    pub async fn save(&self, history: &RecommendationHistory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| EngineError::HistoryWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let content = serde_json::to_string_pretty(history)
            .map_err(|source| EngineError::HistoryParse { source })?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| EngineError::HistoryWrite {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), entries = history.len(), "Saved history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_recommendation;
    use crate::model::{DailyTag, FeedbackRating, UserProfile};
    use chrono::Utc;

    fn sample() -> BathRecommendation {
        generate_recommendation(&UserProfile::default(), &[DailyTag::Stress]).unwrap()
    }

    #[test]
    fn test_push_is_newest_first_and_bounded() {
        let mut history = RecommendationHistory::with_limit(2);
        let first = sample();
        let second = sample();
        let third = sample();
        history.push(first.clone());
        history.push(second.clone());
        history.push(third.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].id, third.id);
        assert_eq!(history.entries()[1].id, second.id);
        assert!(history.find(&first.id).is_none());
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(RecommendationHistory::with_limit(0).limit(), 1);
        assert_eq!(RecommendationHistory::with_limit(99).limit(), MAX_HISTORY_LIMIT);
    }

    #[test]
    fn test_record_feedback() {
        let mut history = RecommendationHistory::default();
        let rec = sample();
        let id = rec.id.clone();
        history.push(rec);

        history
            .record_feedback(
                &id,
                Feedback {
                    rating: FeedbackRating::Good,
                    note: None,
                    recorded_at: Utc::now(),
                },
            )
            .unwrap();
        assert_eq!(
            history.find(&id).and_then(|r| r.feedback.as_ref()).map(|f| f.rating),
            Some(FeedbackRating::Good)
        );

        let missing = history.record_feedback(
            "nope",
            Feedback {
                rating: FeedbackRating::Bad,
                note: None,
                recorded_at: Utc::now(),
            },
        );
        assert!(matches!(
            missing,
            Err(EngineError::UnknownRecommendation { .. })
        ));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut history = RecommendationHistory::default();
        let older = sample();
        let newer = sample();
        history.push(older.clone());
        history.push(newer);

        let mut updated = older.clone();
        updated.lighting = "촛불".to_string();
        history.replace(updated).unwrap();
        assert_eq!(history.entries()[1].lighting, "촛불");
    }
}
