use crate::error::{FolioError, Result};
use crate::model::{DEFAULT_AUTHOR, DEFAULT_FALLBACK_IMAGE};
use crate::store::content::DuplicatePolicy;
use crate::store::fs::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for folio, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct FolioConfig {
    /// Author stamped on every created post
    #[serde(default = "default_author")]
    pub author: String,

    /// Cover image for posts created without one
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Storage key the post collection lives under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_fallback_image() -> String {
    DEFAULT_FALLBACK_IMAGE.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            fallback_image: default_fallback_image(),
            storage_key: default_storage_key(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl FolioConfig {
    pub const KEYS: &'static [&'static str] =
        &["author", "fallback-image", "storage-key", "duplicates"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "author" => Ok(self.author.clone()),
            "fallback-image" => Ok(self.fallback_image.clone()),
            "storage-key" => Ok(self.storage_key.clone()),
            "duplicates" => Ok(policy_name(self.duplicates).to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "author" => self.author = value.to_string(),
            "fallback-image" => self.fallback_image = value.to_string(),
            "storage-key" => {
                if value.trim().is_empty() {
                    return Err(FolioError::Config("storage-key cannot be empty".into()));
                }
                validate_key(value).map_err(|_| {
                    FolioError::Config(format!(
                        "storage-key must be a plain file name, got {:?}",
                        value
                    ))
                })?;
                self.storage_key = value.to_string();
            }
            "duplicates" => {
                self.duplicates = match value {
                    "allow" => DuplicatePolicy::Allow,
                    "reject" => DuplicatePolicy::Reject,
                    _ => {
                        return Err(FolioError::Config(format!(
                            "duplicates must be 'allow' or 'reject', got '{}'",
                            value
                        )))
                    }
                }
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn policy_name(policy: DuplicatePolicy) -> &'static str {
    match policy {
        DuplicatePolicy::Allow => "allow",
        DuplicatePolicy::Reject => "reject",
    }
}

fn unknown_key(key: &str) -> FolioError {
    FolioError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        FolioConfig::KEYS.join(", ")
    ))
}
