use crate::session::{ConverterSession, DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::units::{ConversionEngine, FactorSet, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// File looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "converter.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Which constants back the conversion table
    #[serde(default)]
    pub factors: FactorSet,

    // Units preselected in the two selectors
    #[serde(default)]
    pub defaults: DefaultUnits,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DefaultUnits {
    #[serde(default = "default_source")]
    pub source: Unit,
    #[serde(default = "default_target")]
    pub target: Unit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

fn default_source() -> Unit {
    DEFAULT_SOURCE
}

fn default_target() -> Unit {
    DEFAULT_TARGET
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Toml(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `explicit` if given, else `converter.toml` in `search_dir` if present,
    /// else the built-in defaults. `exact` forces the exact factor set.
    pub fn discover(
        explicit: Option<&Path>,
        search_dir: &Path,
        exact: bool,
    ) -> Result<Self, ConfigError> {
        let fallback = search_dir.join(CONFIG_FILE_NAME);
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None if fallback.exists() => Self::load_from_file(&fallback)?,
            None => Self::empty(),
        };

        if exact {
            config.factors = FactorSet::Exact;
        }
        log::debug!("Using {} conversion factors", config.factors.name());

        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            factors: FactorSet::default(),
            defaults: DefaultUnits::default(),
        }
    }

    pub fn engine(&self) -> ConversionEngine {
        ConversionEngine::new(self.factors)
    }

    pub fn session(&self) -> ConverterSession {
        ConverterSession::with_units(self.engine(), self.defaults.source, self.defaults.target)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
