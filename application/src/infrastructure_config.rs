use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendKind,
    pub firebase: FirebaseConfig,
    pub memory: MemoryConfig,
    pub preferences: PreferencesConfig,
    pub image: ImageConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    #[serde(rename = "firebase")]
    Firebase,
    #[serde(rename = "memory")]
    Memory,
}

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub api_key: SecretString,
    pub project_id: String,
    pub database_id: String,
    pub identity_base_url: String,
    pub firestore_base_url: String,
}

impl Serialize for FirebaseConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let api_key = if self.api_key.expose_secret().is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        let mut state = serializer.serialize_struct("FirebaseConfig", 5)?;
        state.serialize_field("api_key", api_key)?;
        state.serialize_field("project_id", &self.project_id)?;
        state.serialize_field("database_id", &self.database_id)?;
        state.serialize_field("identity_base_url", &self.identity_base_url)?;
        state.serialize_field("firestore_base_url", &self.firestore_base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for FirebaseConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct FirebaseConfigHelper {
            api_key: String,
            project_id: String,
            database_id: String,
            identity_base_url: String,
            firestore_base_url: String,
        }

        let helper = FirebaseConfigHelper::deserialize(deserializer)?;
        Ok(FirebaseConfig {
            api_key: SecretString::from(helper.api_key),
            project_id: helper.project_id,
            database_id: helper.database_id,
            identity_base_url: helper.identity_base_url,
            firestore_base_url: helper.firestore_base_url,
        })
    }
}

/// Where the `memory` backend keeps its emulated accounts and documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub data_dir: PathBuf,
}

impl MemoryConfig {
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join("accounts.json")
    }

    pub fn documents_path(&self) -> PathBuf {
        self.data_dir.join("documents.json")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub backend: PreferencesBackend,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferencesBackend {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "memory")]
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub jpeg_quality: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(""),
            project_id: String::new(),
            database_id: "(default)".to_string(),
            identity_base_url: "https://identitytoolkit.googleapis.com".to_string(),
            firestore_base_url: "https://firestore.googleapis.com".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            firebase: FirebaseConfig::default(),
            memory: MemoryConfig {
                data_dir: PathBuf::from("chat_app_emulator"),
            },
            preferences: PreferencesConfig {
                backend: PreferencesBackend::File,
                path: PathBuf::from("chat_app_preferences.json"),
            },
            image: ImageConfig { jpeg_quality: 100 },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        match self.backend {
            BackendKind::Firebase => self.validate_firebase()?,
            BackendKind::Memory if self.memory.data_dir.as_os_str().is_empty() => {
                return Err(AppError::ConfigError {
                    message: "memory data_dir cannot be empty".to_string(),
                });
            }
            BackendKind::Memory => {}
        }

        if self.preferences.backend == PreferencesBackend::File
            && self.preferences.path.as_os_str().is_empty()
        {
            return Err(AppError::ConfigError {
                message: "preferences path cannot be empty".to_string(),
            });
        }

        if !(1..=100).contains(&self.image.jpeg_quality) {
            return Err(AppError::ConfigError {
                message: "jpeg_quality must be between 1 and 100".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    fn validate_firebase(&self) -> AppResult<()> {
        let firebase = &self.firebase;

        if firebase.api_key.expose_secret().is_empty() {
            return Err(AppError::ConfigError {
                message: "firebase api_key cannot be empty".to_string(),
            });
        }

        if firebase.project_id.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "firebase project_id cannot be empty".to_string(),
            });
        }

        if firebase.database_id.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "firebase database_id cannot be empty".to_string(),
            });
        }

        for (name, value) in [
            ("identity_base_url", &firebase.identity_base_url),
            ("firestore_base_url", &firebase.firestore_base_url),
        ] {
            Url::parse(value).map_err(|e| AppError::ConfigError {
                message: format!("firebase {name} is not a valid URL: {e}"),
            })?;
        }

        Ok(())
    }
}
