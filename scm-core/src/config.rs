//! Configuration for the SCM registry

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScmError, ScmResult};
use crate::paths;

/// Top-level SCM configuration
///
/// Stored as TOML in `~/.config/scm-hub/scm.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmConfig {
    /// Initial state of every repository's commit input
    #[serde(default)]
    pub input: InputDefaults,

    /// Event bus settings
    #[serde(default)]
    pub events: EventsConfig,
}

/// Initial values for a new commit input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default)]
    pub placeholder: String,

    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            visible: true,
        }
    }
}

/// Settings for the broadcast event bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Broadcast channel capacity used by
    /// [`MemoryScmEventBus::from_config`](crate::MemoryScmEventBus::from_config);
    /// slow receivers lag past this many events
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_capacity() -> usize {
    100
}

impl ScmConfig {
    /// Load configuration from a TOML file
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load(path: &Path) -> ScmResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from the user's config directory
    pub fn load_default() -> ScmResult<Self> {
        Self::load(&paths::scm_config_file())
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> ScmResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ScmError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the registry cannot run with
    pub fn validate(&self) -> ScmResult<()> {
        if self.events.capacity == 0 {
            return Err(ScmError::config("events.capacity must be greater than zero"));
        }
        Ok(())
    }
}
