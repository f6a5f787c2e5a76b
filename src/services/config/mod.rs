pub mod models;

pub use models::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::services::catalogue::RuleTable;
use crate::services::validator::validate_config;
use crate::types::errors::{QuoteError, QuoteResult};

/// JSON-file backed quote configuration.
pub struct ConfigService {
    path: PathBuf,
    config: Mutex<QuoteConfig>,
}

impl ConfigService {
    /// Load from `path`. A missing, unreadable or invalid file falls back to
    /// defaults; nothing is written until `save_config`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = Self::load_from_file(&path);
        Self {
            path,
            config: Mutex::new(config),
        }
    }

    fn load_from_file(path: &Path) -> QuoteConfig {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return QuoteConfig::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(QuoteError::from)
            .and_then(|text| Ok(serde_json::from_str::<QuoteConfig>(&text)?))
            .and_then(|config| {
                check(&config)?;
                Ok(config)
            });

        match parsed {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {e}. Using defaults",
                    path.display()
                );
                QuoteConfig::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_config(&self) -> QuoteConfig {
        self.config
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rule table compiled from the current matcher settings.
    pub fn rule_table(&self) -> QuoteResult<RuleTable> {
        let config = self.get_config();
        RuleTable::from_config(&config.matcher)
    }

    /// Validate, write atomically, then swap the in-memory copy.
    /// On error both the file and the in-memory config are unchanged.
    pub fn save_config(&self, new_config: QuoteConfig) -> QuoteResult<()> {
        check(&new_config)?;

        let json = serde_json::to_string_pretty(&new_config)?;
        write_atomic(&self.path, json.as_bytes())?;

        *self
            .config
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_config;
        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}

/// Numbers must be sane and every matcher pattern must compile.
fn check(config: &QuoteConfig) -> QuoteResult<()> {
    validate_config(config)?;
    RuleTable::from_config(&config.matcher)?;
    Ok(())
}

fn temp_path_for(file_path: &Path) -> QuoteResult<PathBuf> {
    let file_name = file_path
        .file_name()
        .ok_or_else(|| QuoteError::Io(format!("Invalid file path: {}", file_path.display())))?
        .to_string_lossy();
    Ok(file_path.with_file_name(format!("{}.tmp", file_name)))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> QuoteResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    fs::write(&temp_path, bytes)?;

    match fs::rename(&temp_path, path) {
        Ok(_) => Ok(()),
        Err(_) => {
            if path.exists() {
                fs::remove_file(path)?;
            }
            fs::rename(&temp_path, path)
                .map_err(|e| QuoteError::Io(format!("Failed to finalize config write: {e}")))
        }
    }
}

#[cfg(test)]
#[path = "tests/config_service_tests.rs"]
mod tests;
