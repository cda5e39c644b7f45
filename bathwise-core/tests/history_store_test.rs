//! File-backed history store behavior

mod common;

use anyhow::Result;
use bathwise_core::config::BathwisePaths;
use bathwise_core::engine::generate_recommendation;
use bathwise_core::history::HistoryStore;
use bathwise_core::model::{DailyTag, Feedback, FeedbackRating, UserProfile};
use bathwise_core::EngineError;
use chrono::Utc;
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_file_loads_empty() -> Result<()> {
    common::init_test_logging();

    let temp_dir = TempDir::new()?;
    let paths = BathwisePaths::resolve(temp_dir.path());
    let history = HistoryStore::new(&paths.history).load(30).await?;

    assert!(history.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_save_creates_directory_and_round_trips() -> Result<()> {
    common::init_test_logging();

    let temp_dir = TempDir::new()?;
    let paths = BathwisePaths::resolve(temp_dir.path());
    let store = HistoryStore::new(&paths.history);

    let mut history = store.load(30).await?;
    let rec = generate_recommendation(&UserProfile::default(), &[DailyTag::Cold])?;
    let id = rec.id.clone();
    history.push(rec);
    history.record_feedback(
        &id,
        Feedback {
            rating: FeedbackRating::Neutral,
            note: Some("조금 뜨거웠어요".to_string()),
            recorded_at: Utc::now(),
        },
    )?;
    store.save(&history).await?;

    assert!(paths.bathwise_dir.is_dir());

    let reloaded = store.load(30).await?;
    assert_eq!(reloaded, history);
    let feedback = reloaded.find(&id).and_then(|r| r.feedback.clone());
    assert_eq!(feedback.map(|f| f.rating), Some(FeedbackRating::Neutral));
    Ok(())
}

#[tokio::test]
async fn test_load_applies_smaller_limit() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = HistoryStore::new(temp_dir.path().join("history.json"));

    let mut history = store.load(30).await?;
    for _ in 0..5 {
        history.push(generate_recommendation(&UserProfile::default(), &[])?);
    }
    store.save(&history).await?;

    let trimmed = store.load(3).await?;
    assert_eq!(trimmed.len(), 3);
    assert_eq!(trimmed.entries()[0].id, history.entries()[0].id);
    Ok(())
}

#[tokio::test]
async fn test_corrupted_file_is_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("history.json");
    tokio::fs::write(&path, "{ not json").await?;

    let result = HistoryStore::new(&path).load(30).await;
    assert!(matches!(result, Err(EngineError::HistoryParse { .. })));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_history_is_read_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("history.json");
    tokio::fs::create_dir_all(&path).await?;

    let result = HistoryStore::new(&path).load(30).await;
    assert!(matches!(result, Err(EngineError::HistoryRead { .. })));
    Ok(())
}
