use crate::api::trim_trailing_slashes;
use crate::model::{Reference, ReferenceType};
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";
pub const DEFAULT_CONFIG_FILE: &str = "question_admin.yaml";

pub const ENV_CONFIG: &str = "QUESTION_ADMIN_CONFIG";
pub const ENV_API_BASE: &str = "QUESTION_ADMIN_API_BASE";
pub const ENV_REFERENCE_ID: &str = "QUESTION_ADMIN_REFERENCE_ID";
pub const ENV_REFERENCE_TYPE: &str = "QUESTION_ADMIN_REFERENCE_TYPE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("no reference id configured; set `reference.id` or QUESTION_ADMIN_REFERENCE_ID")]
    MissingReference,
    #[error("unknown reference type `{0}` (expected `exam` or `quiz`)")]
    UnknownReferenceType(String),
}

/// Shape of `question_admin.yaml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub reference: FileReference,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FileReference {
    pub id: Option<String>,
    #[serde(rename = "referenceType")]
    pub reference_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminConfig {
    pub base_url: String,
    pub reference: Reference,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl FileConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }
}

impl AdminConfig {
    /// Reads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();

        let file = match non_empty(env(ENV_CONFIG)) {
            Some(path) => Some(FileConfig::read(Path::new(&path))?),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Some(FileConfig::read(fallback)?)
                } else {
                    None
                }
            }
        };

        let config = Self::resolve(file.unwrap_or_default(), env)?;
        info!(
            "Using question service at {} for {:?} {}",
            config.base_url, config.reference.reference_type, config.reference.id
        );
        Ok(config)
    }

    /// Environment wins over the file, the file wins over defaults.
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = non_empty(env(ENV_API_BASE))
            .or(non_empty(file.base_url))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let id = non_empty(env(ENV_REFERENCE_ID))
            .or(non_empty(file.reference.id))
            .ok_or(ConfigError::MissingReference)?;

        let reference_type = match non_empty(env(ENV_REFERENCE_TYPE))
            .or(non_empty(file.reference.reference_type))
        {
            Some(raw) => {
                ReferenceType::parse(&raw).ok_or(ConfigError::UnknownReferenceType(raw))?
            }
            None => ReferenceType::Quiz,
        };

        Ok(Self {
            base_url: trim_trailing_slashes(&base_url),
            reference: Reference::new(id.trim(), reference_type),
        })
    }
}
