use std::path::{Path, PathBuf};

use mhtrack_export::{DocumentStyles, Labels};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where printed summaries are written. Falls back to the user's
    /// documents directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub styles: DocumentStyles,
    /// Added in v1.
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: None,
            labels: Labels::default(),
            styles: DocumentStyles::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl TrackerConfig {
    pub fn resolved_output_dir(&self) -> eyre::Result<PathBuf> {
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| eyre::eyre!("no output directory configured and no documents directory found"))
    }
}

/// Load the config at `path`, or defaults when none has been saved there yet.
pub fn load_config_from(path: &Path) -> eyre::Result<TrackerConfig> {
    if !path.exists() {
        return Ok(TrackerConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("invalid config_version {v}"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: TrackerConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: add log_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("log_format")
            .or_insert(serde_json::Value::String("text".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added log_format)");
    }

    Ok(json)
}

pub fn save_config_to(config: &TrackerConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
