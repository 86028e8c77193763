use crate::core::error::HubError;
use crate::core::repository::DEFAULT_MAX_FILE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HubConfig {
    /// Largest file, in bytes, that add/open will read
    pub max_file_size: u64,
    /// Play the progress bar and banner on start-up
    pub show_intro: bool,
    pub intro_step_ms: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            show_intro: true,
            intro_step_ms: 100,
        }
    }
}

impl HubConfig {
    /// Load the config at `path`, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self, HubError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| HubError::config_read_failed(path, e))?;
        let config =
            serde_json::from_str(&content).map_err(|e| HubError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), HubError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| HubError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| HubError::config_write_failed(path, e))?;
        log::info!("Wrote config to {}", path.display());
        Ok(())
    }
}
