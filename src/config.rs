use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/hotbar.toml";
const DEFAULT_STORE_PATH: &str = "hotbar-store.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HotbarConfig {
    /// JSON file holding the saved hotbars.
    pub store_path: PathBuf,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Pretty-print the store when saving.
    pub pretty: bool,
}

impl Default for HotbarConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_filter: "warn".to_string(),
            pretty: true,
        }
    }
}

impl HotbarConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    ///
    /// Runs before tracing is initialised, so problems are returned as
    /// warnings for the caller to log once a subscriber exists.
    pub fn load_from_path(path: &Path) -> (Self, Option<String>) {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<HotbarConfig>(&contents) {
                Ok(cfg) => (cfg, None),
                Err(err) => (
                    HotbarConfig::default(),
                    Some(format!(
                        "Failed to parse {}: {err}. Using defaults",
                        path.display()
                    )),
                ),
            },
            Err(err) => {
                let warning = if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    Some(format!(
                        "Failed to read {}: {err}. Using defaults",
                        path.display()
                    ))
                } else {
                    None
                };
                (HotbarConfig::default(), warning)
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

/// Log a deferred config warning.
pub fn report(warning: Option<String>) {
    if let Some(message) = warning {
        warn!("{message}");
    }
}
