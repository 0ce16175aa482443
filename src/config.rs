use crate::error::{ReadlistError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = ".readlist.yml";

/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "READLIST_DATABASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadlistConfig {
    #[serde(default)]
    pub readlist: ReadlistSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// How identifiers are generated for newly added records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// One past the largest numeric id already in the collection.
    #[default]
    Sequential,
    /// Random lowercase alphanumeric suffix of `id_length` characters.
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadlistSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default)]
    pub id_mode: IdMode,

    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

fn default_database_url() -> String {
    "memory:".to_string()
}

fn default_id_length() -> usize {
    8
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for ReadlistSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            id_mode: IdMode::default(),
            id_length: default_id_length(),
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Parsed form of `database_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// Fixture-seeded in-memory store, discarded on exit.
    Memory,
    /// JSON document store rooted at the given directory.
    File(PathBuf),
}

impl FromStr for DatabaseUrl {
    type Err = ReadlistError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "memory:" || s == "memory" {
            return Ok(DatabaseUrl::Memory);
        }
        if let Some(path) = s.strip_prefix("file://").or_else(|| s.strip_prefix("file:")) {
            if path.is_empty() {
                return Err(ReadlistError::InvalidDatabaseUrl(s.to_string()));
            }
            return Ok(DatabaseUrl::File(PathBuf::from(path)));
        }
        // Any other scheme names a driver we don't have.
        if s.is_empty() || s.contains("://") || s.ends_with(':') {
            return Err(ReadlistError::InvalidDatabaseUrl(s.to_string()));
        }
        Ok(DatabaseUrl::File(PathBuf::from(s)))
    }
}

impl DatabaseUrl {
    /// Resolve a relative document-store path against the project root.
    pub fn resolve(self, project_root: &Path) -> Self {
        match self {
            DatabaseUrl::File(path) if path.is_relative() => {
                DatabaseUrl::File(project_root.join(path))
            }
            other => other,
        }
    }
}

impl ReadlistConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: ReadlistConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                ReadlistError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Like [`ReadlistConfig::load`], but an uninitialized directory yields
    /// the defaults rooted at `start_path`.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::load(start_path) {
            Err(ReadlistError::NotInitialized) => {
                tracing::debug!(
                    path = %start_path.display(),
                    "No config file found, using defaults"
                );
                Ok((Self::default(), start_path.to_path_buf()))
            }
            other => other,
        }
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(ReadlistError::NotInitialized);
            }
        }
    }

    pub fn database_url(&self) -> Result<DatabaseUrl> {
        self.readlist.database_url.parse()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
