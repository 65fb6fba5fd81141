use std::path::{Path, PathBuf};

use bicams_core::models::locale::Locale;
use bicams_export::render::{DEFAULT_CITATION, DEFAULT_LINK, RenderOptions};
use bicams_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BicamsConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Added in v1. Pre-versioned configs were written by the Portuguese-only
    /// release and are migrated to `pt-br`.
    #[serde(default)]
    pub locale: Locale,
    /// Where `bicams report` writes files when `--output-dir` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Replacement norms table; the built-in Brazilian norms otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norms_path: Option<PathBuf>,
    #[serde(default = "default_citation")]
    pub citation: String,
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default)]
    pub styles: DocumentStyles,
}

fn default_citation() -> String {
    DEFAULT_CITATION.to_string()
}

fn default_link() -> String {
    DEFAULT_LINK.to_string()
}

impl Default for BicamsConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            locale: Locale::default(),
            output_dir: None,
            norms_path: None,
            citation: default_citation(),
            link: default_link(),
            styles: DocumentStyles::default(),
        }
    }
}

impl BicamsConfig {
    pub fn render_options(&self, locale: Option<Locale>) -> RenderOptions {
        RenderOptions {
            locale: locale.unwrap_or(self.locale),
            citation: self.citation.clone(),
            link: self.link.clone(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.bicams.calculator"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> eyre::Result<BicamsConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BicamsConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = config_version(&json)?;

    let migrated = migrate(json, on_disk_version)?;
    let config: BicamsConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// The file's `config_version`. Files written before versioning have none
/// and count as version 0.
fn config_version(json: &serde_json::Value) -> eyre::Result<u32> {
    let Some(value) = json.get("config_version") else {
        return Ok(0);
    };
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| eyre::eyre!("invalid config_version {value}: expected a small whole number"))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update bicams."
        ));
    }

    // v0 → v1: add locale (pt-br, the only language v0 knew)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("locale")
            .or_insert(serde_json::Value::String(Locale::PtBr.code().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added locale)");
    }

    Ok(json)
}

pub fn save_config(config: &BicamsConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent directory", path.display()))?;
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
