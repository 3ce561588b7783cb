//! Persistent configuration stored as JSON in the user's home directory.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Name of the configuration file inside the home directory.
const CONFIG_FILE_NAME: &str = ".ai-commit";

/// The recognized configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    GroqApiKey,
    CommitPrompt,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::GroqApiKey => "GROQ_APIKEY",
            ConfigKey::CommitPrompt => "COMMIT_PROMPT",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GROQ_APIKEY" => Ok(ConfigKey::GroqApiKey),
            "COMMIT_PROMPT" => Ok(ConfigKey::CommitPrompt),
            _ => Err(ConfigError::UnknownKey { key: s.to_string() }),
        }
    }
}

/// On-disk shape of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Config {
    #[serde(rename = "GROQ_APIKEY", default)]
    groq_api_key: String,
    #[serde(rename = "COMMIT_PROMPT", default)]
    commit_prompt: String,
}

/// Store for the `<home>/.ai-commit` configuration file.
///
/// The path is resolved once at construction and handed to whatever needs
/// it; nothing reads it from ambient state afterwards.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the default location in the user's home directory.
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self {
            path: home.join(CONFIG_FILE_NAME),
        })
    }

    /// Store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the configuration file. Performs no I/O.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a single value. Unset keys read as the empty string.
    pub fn get(&self, key: ConfigKey) -> Result<String, ConfigError> {
        let config = self.load()?;
        Ok(match key {
            ConfigKey::GroqApiKey => config.groq_api_key,
            ConfigKey::CommitPrompt => config.commit_prompt,
        })
    }

    /// Set a single value, rewriting the whole file.
    pub fn set(&self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let mut config = self.load()?;
        match key {
            ConfigKey::GroqApiKey => config.groq_api_key = value.to_string(),
            ConfigKey::CommitPrompt => config.commit_prompt = value.to_string(),
        }
        self.save(&config)
    }

    /// Load the file, treating a missing file as an empty configuration.
    fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no configuration file at {}", self.path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };

        serde_json::from_str(&data).map_err(ConfigError::Parse)
    }

    /// Write the file atomically with owner-only permissions.
    ///
    /// The file may hold a credential, so permissions are restricted before
    /// any content reaches disk.
    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let data = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(ConfigError::Write)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(ConfigError::Write)?;
        }

        tmp.write_all(data.as_bytes()).map_err(ConfigError::Write)?;
        tmp.persist(&self.path).map_err(|e| ConfigError::Write(e.error))?;
        Ok(())
    }
}
