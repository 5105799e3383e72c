use std::path::{Path, PathBuf};

use charta_audit::ScoringPolicy;
use charta_core::policy::ChartPolicy;
use charta_ladders::LabelVocabulary;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Template labels the engine may write, per ladder.
    pub vocabulary: LabelVocabulary,
    #[serde(default)]
    pub policy: ChartPolicy,
    /// Added in v1; older configs get the default weights.
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

impl ChartaConfig {
    /// Stock template vocabulary with default policy and scoring.
    pub fn standard() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            vocabulary: LabelVocabulary::standard(),
            policy: ChartPolicy::default(),
            scoring: ScoringPolicy::default(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("charta"))
}

/// `<config_dir>/charta/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_config(path: &Path) -> eyre::Result<ChartaConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        eyre::eyre!(
            "failed to read config at {}: {e} (run `charta init-config` to create one)",
            path.display()
        )
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ChartaConfig = serde_json::from_value(migrated)?;
    config.scoring.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update charta."
        ));
    }

    // v0 → v1: add scoring with the default weights
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if !obj.contains_key("scoring") {
            obj.insert(
                "scoring".to_string(),
                serde_json::to_value(ScoringPolicy::default())?,
            );
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added scoring)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ChartaConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
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
