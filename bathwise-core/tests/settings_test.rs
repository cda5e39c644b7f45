//! Settings and profile loading from the .bathwise/ directory

use anyhow::Result;
use bathwise_core::config::{load_profile, BathwisePaths, EngineSettings, MAX_HISTORY_LIMIT};
use bathwise_core::model::{BathEnvironment, HealthCondition};
use bathwise_core::EngineError;
use tempfile::TempDir;

async fn bathwise_dir(temp_dir: &TempDir) -> Result<BathwisePaths> {
    let paths = BathwisePaths::resolve(temp_dir.path());
    tokio::fs::create_dir_all(&paths.bathwise_dir).await?;
    Ok(paths)
}

#[tokio::test]
async fn test_missing_settings_use_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = BathwisePaths::resolve(temp_dir.path());

    let settings = EngineSettings::load_or_default(&paths.settings).await?;
    assert_eq!(settings, EngineSettings::default());
    assert!(settings.commerce_enabled);
    Ok(())
}

#[tokio::test]
async fn test_settings_are_parsed_and_clamped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = bathwise_dir(&temp_dir).await?;
    tokio::fs::write(
        &paths.settings,
        "history_limit: 500\ndefault_environment: shower\ndefault_theme_id: jeju_citrus\n",
    )
    .await?;

    let settings = EngineSettings::load_or_default(&paths.settings).await?;
    assert_eq!(settings.history_limit, MAX_HISTORY_LIMIT);
    assert_eq!(settings.default_environment, BathEnvironment::Shower);
    assert_eq!(settings.default_theme_id.as_deref(), Some("jeju_citrus"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_settings_yaml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = bathwise_dir(&temp_dir).await?;
    tokio::fs::write(&paths.settings, "history_limit: [oops").await?;

    let result = EngineSettings::load(&paths.settings).await;
    assert!(matches!(result, Err(EngineError::SettingsParse { .. })));
    Ok(())
}

#[tokio::test]
async fn test_profile_loading() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = bathwise_dir(&temp_dir).await?;

    assert!(load_profile(&paths.profile).await?.is_none());

    tokio::fs::write(
        &paths.profile,
        "environment: partial_bath\nhealthConditions:\n  - diabetes\n",
    )
    .await?;
    let profile = load_profile(&paths.profile).await?.expect("profile present");
    assert_eq!(profile.environment, BathEnvironment::PartialBath);
    assert!(profile.has_condition(HealthCondition::Diabetes));
    Ok(())
}

#[tokio::test]
async fn test_profile_rejects_none_with_other_conditions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = bathwise_dir(&temp_dir).await?;
    tokio::fs::write(
        &paths.profile,
        "healthConditions:\n  - none\n  - pregnant\n",
    )
    .await?;

    let result = load_profile(&paths.profile).await;
    assert!(matches!(result, Err(EngineError::InvalidProfile { .. })));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_profile_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = bathwise_dir(&temp_dir).await?;
    // Present but not readable as a file: must not be mistaken for "no profile".
    tokio::fs::create_dir_all(&paths.profile).await?;

    let result = load_profile(&paths.profile).await;
    assert!(matches!(result, Err(EngineError::SettingsRead { .. })));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_settings_do_not_fall_back_to_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = bathwise_dir(&temp_dir).await?;
    tokio::fs::create_dir_all(&paths.settings).await?;

    let result = EngineSettings::load_or_default(&paths.settings).await;
    assert!(matches!(result, Err(EngineError::SettingsRead { .. })));
    Ok(())
}
