//! Application configuration and storage path resolution.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::{LedgerError, Result};

const APP_DIR: &str = "fintrack";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "finance_data.json";

/// Environment variable that overrides the ledger data file path.
pub const DATA_FILE_ENV: &str = "FINTRACK_DATA_FILE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

/// Loads and saves the JSON configuration under the application base
/// directory.
///
/// The config file is user-maintained: the shell only reads it, and a
/// missing file yields the defaults. `save` exists for programmatic
/// updates and keeps the same staged-write discipline as the ledger.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        let path = base.join(CONFIG_FILE);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| LedgerError::CorruptData {
                path: self.path.clone(),
                detail: err.to_string(),
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| LedgerError::Io(std::io::Error::other(err)))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Resolves the ledger data file. Precedence: environment override,
    /// configured path, default file in the base directory.
    pub fn resolve_data_file(&self, config: &Config) -> PathBuf {
        if let Ok(value) = env::var(DATA_FILE_ENV) {
            if !value.trim().is_empty() {
                return PathBuf::from(value);
            }
        }
        if let Some(path) = &config.data_file {
            return path.clone();
        }
        self.base.join(DEFAULT_DATA_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
