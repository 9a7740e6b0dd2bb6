//! TOML-backed settings store (`settings.toml`) for the device simulator.
//!
//! Missing or unreadable files load as "all flags off". Writes go to a sibling
//! temp file that is renamed over the target, so a failed write never leaves a
//! half-written file and never changes the in-memory value.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{SettingFlag, SettingsStore, StoreError, ALL_FLAGS};

const SETTINGS_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "STELLAR_UI_CONFIG_DIR";
const APP_DIR: &str = "stellar-ui";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    settings: BTreeMap<String, bool>,
}

/// Resolve `$STELLAR_UI_CONFIG_DIR/settings.toml`, else the platform config dir.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed).join(SETTINGS_FILE));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    flags: u8,
}

impl FileSettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let flags = match fs::read_to_string(&path) {
            Ok(contents) => parse_flags(&contents, &path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "settings file unreadable; using defaults");
                0
            }
        };
        Self { path, flags }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, flags: u8) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let body = serialize_flags(flags)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, body).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, flag: SettingFlag) -> bool {
        self.flags & flag.mask() != 0
    }

    fn toggle(&mut self, flag: SettingFlag) -> Result<(), StoreError> {
        let next = self.flags ^ flag.mask();
        self.persist(next)?;
        self.flags = next;
        Ok(())
    }
}

fn parse_flags(contents: &str, path: &Path) -> u8 {
    let file: SettingsFile = match toml::from_str(contents) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings file malformed; using defaults");
            return 0;
        }
    };
    // Unknown keys are ignored.
    ALL_FLAGS
        .iter()
        .filter(|flag| file.settings.get(flag.name()).copied().unwrap_or(false))
        .fold(0, |acc, flag| acc | flag.mask())
}

fn serialize_flags(flags: u8) -> Result<String, StoreError> {
    let file = SettingsFile {
        settings: ALL_FLAGS
            .iter()
            .map(|flag| (flag.name().to_string(), flags & flag.mask() != 0))
            .collect(),
    };
    let body = toml::to_string(&file).map_err(|err| StoreError::Serialize(err.to_string()))?;
    Ok(format!(
        "# Stellar device settings\n# Managed by the settings menu.\n\n{body}"
    ))
}
