//! Settings and path resolution.
//!
//! Everything lives under a `.bathwise/` directory:
//!
//! ```text
//! .bathwise/
//!   settings.yml   engine settings (optional)
//!   profile.yml    the user's profile (optional)
//!   history.json   recommendation history
//! ```

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{EngineError, Result};
use crate::model::{BathEnvironment, UserProfile};

/// Upper bound on stored history entries.
pub const MAX_HISTORY_LIMIT: usize = 30;

const BATHWISE_DIR: &str = ".bathwise";

/// Path resolution following the `.bathwise/` convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BathwisePaths {
    /// Directory containing `.bathwise/`
    pub root: PathBuf,
    pub bathwise_dir: PathBuf,
    pub settings: PathBuf,
    pub profile: PathBuf,
    pub history: PathBuf,
}

impl BathwisePaths {
    /// Accepts either the root or the `.bathwise/` directory itself.
    pub fn resolve(input_path: impl AsRef<Path>) -> Self {
        let input = input_path.as_ref();
        let is_bathwise_dir = input.file_name().and_then(|n| n.to_str()) == Some(BATHWISE_DIR);
        let (root, bathwise_dir) = if is_bathwise_dir {
            let root = input.parent().unwrap_or(input).to_path_buf();
            (root, input.to_path_buf())
        } else {
            (input.to_path_buf(), input.join(BATHWISE_DIR))
        };

        debug!(dir = %bathwise_dir.display(), "Resolved bathwise paths");

        Self {
            settings: bathwise_dir.join("settings.yml"),
            profile: bathwise_dir.join("profile.yml"),
            history: bathwise_dir.join("history.json"),
            root,
            bathwise_dir,
        }
    }
}

/// Engine settings read from `settings.yml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Entries kept in history, clamped to `1..=MAX_HISTORY_LIMIT`
    pub history_limit: usize,
    /// Used when no profile exists
    pub default_environment: BathEnvironment,
    /// Whether product candidates can be shown on the home surface
    pub commerce_enabled: bool,
    /// Theme for the home trip card
    pub default_theme_id: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY_LIMIT,
            default_environment: BathEnvironment::Bathtub,
            commerce_enabled: true,
            default_theme_id: None,
        }
    }
}

impl EngineSettings {
    /// Load settings from a YAML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| EngineError::SettingsRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse(path, &content)
    }

    /// Like [`EngineSettings::load`], but a missing file yields defaults.
    ///
    /// Any other read failure is an error.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match read_if_present(path).await? {
            Some(content) => Self::parse(path, &content),
            None => {
                debug!(path = %path.display(), "No settings file - using defaults");
                Ok(Self::default())
            }
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let mut settings: EngineSettings =
            serde_yaml_ng::from_str(content).map_err(|source| EngineError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;

        let clamped = settings.history_limit.clamp(1, MAX_HISTORY_LIMIT);
        if clamped != settings.history_limit {
            warn!(
                requested = settings.history_limit,
                applied = clamped,
                "history_limit out of range - clamped"
            );
            settings.history_limit = clamped;
        }

        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }
}

/// Read `path`, treating only `NotFound` as absent.
async fn read_if_present(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(EngineError::SettingsRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and validate `profile.yml`. `None` when the file does not exist.
///
/// A profile that exists but cannot be read is an error, never `None`.
pub async fn load_profile(path: impl AsRef<Path>) -> Result<Option<UserProfile>> {
    let path = path.as_ref();
    let Some(content) = read_if_present(path).await? else {
        debug!(path = %path.display(), "No profile file");
        return Ok(None);
    };

    let profile: UserProfile =
        serde_yaml_ng::from_str(&content).map_err(|source| EngineError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
    profile.validate()?;

    Ok(Some(profile))
}
