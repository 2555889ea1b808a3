//! Configuration loading and management

use std::env::VarError;

use crate::environment::Environment;
use crate::hotkey::Overrides;

const PLATFORM_VAR: &str = "KEYUX_PLATFORM";
const USER_AGENT_VAR: &str = "KEYUX_USER_AGENT";
const OVERRIDES_VAR: &str = "KEYUX_OVERRIDES";

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },

    #[error("KEYUX_OVERRIDES is not a JSON object of combo strings: {0}")]
    Overrides(#[from] serde_json::Error),
}

/// Host configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Platform identifier, e.g. `MacIntel` or `Win32`
    pub platform: String,

    /// User agent consulted by keyboard detection
    pub user_agent: String,

    /// Alternate-to-canonical combo overrides
    pub overrides: Overrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: default_platform().to_string(),
            user_agent: default_user_agent(),
            overrides: Overrides::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Load configuration using `lookup` to read variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let read = |var: &'static str| match lookup(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        };

        let defaults = Self::default();
        let platform = read(PLATFORM_VAR)?.unwrap_or(defaults.platform);
        let user_agent = read(USER_AGENT_VAR)?.unwrap_or(defaults.user_agent);
        let overrides = match read(OVERRIDES_VAR)? {
            Some(json) => serde_json::from_str(&json)?,
            None => defaults.overrides,
        };

        Ok(Self {
            platform,
            user_agent,
            overrides,
        })
    }

    /// Build the environment handle plugins attach to
    pub fn environment(&self) -> Environment {
        Environment::new(self.user_agent.clone(), self.platform.clone())
    }
}

/// Platform identifier matching the build target
fn default_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "MacIntel"
    } else if cfg!(target_os = "windows") {
        "Win32"
    } else {
        "Linux x86_64"
    }
}

fn default_user_agent() -> String {
    format!("keyux/{}", env!("CARGO_PKG_VERSION"))
}
