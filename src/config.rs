//! Application configuration
//!
//! Config is read from TOML. Lookup order:
//!
//! 1. an explicit path (`--config`)
//! 2. `./wellatlas.toml`
//! 3. `~/.config/wellatlas/config.toml`
//!
//! Missing files fall back to defaults. `MAPTILER_KEY` in the environment
//! overrides the map key from the file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::parse_iso_date;
use crate::domain::ports::Clock;
use crate::paths;

/// Environment variable holding the map tile service key
pub const MAPTILER_KEY_ENV: &str = "MAPTILER_KEY";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Reference date is neither `today` nor an ISO date
    #[error("invalid reference date '{0}': use YYYY-MM-DD or \"today\"")]
    InvalidDate(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Store settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Map display settings
    #[serde(default)]
    pub map: MapConfig,
    /// Home page settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` listen address
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database")]
    pub path: PathBuf,
}

fn default_database() -> PathBuf {
    PathBuf::from(paths::DEFAULT_DATABASE)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database(),
        }
    }
}

/// Map display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map tile service key; empty disables the map
    #[serde(default)]
    pub maptiler_key: String,
}

/// Home page settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Date whose jobs the home page lists
    #[serde(default)]
    pub reference_date: ReferenceDate,
}

/// Which day the home page treats as "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReferenceDate {
    /// The real current date
    Today,
    /// A fixed calendar date
    Fixed(NaiveDate),
}

impl ReferenceDate {
    /// The demo dataset's "today", 2025-05-15
    #[must_use]
    pub fn demo() -> Self {
        NaiveDate::from_ymd_opt(2025, 5, 15).map_or(Self::Today, Self::Fixed)
    }

    /// Resolve to a concrete date
    #[must_use]
    pub fn resolve(self, clock: &dyn Clock) -> NaiveDate {
        match self {
            Self::Today => clock.today(),
            Self::Fixed(date) => date,
        }
    }
}

impl Default for ReferenceDate {
    fn default() -> Self {
        Self::demo()
    }
}

impl std::str::FromStr for ReferenceDate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("today") {
            return Ok(Self::Today);
        }
        parse_iso_date(s)
            .map(Self::Fixed)
            .map_err(|_| ConfigError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for ReferenceDate {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReferenceDate> for String {
    fn from(value: ReferenceDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Fixed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl AppConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load config using the standard lookup order, then apply the environment
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => {
                    log::debug!("using config {}", path.display());
                    Self::from_file(&path)?
                },
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// First implicit config file that exists
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        [paths::local_config(), paths::global_config()]
            .into_iter()
            .find(|path| path.is_file())
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(MAPTILER_KEY_ENV) {
            self.map.maptiler_key = key;
        }
    }
}
