//! Host startup configuration.

use serde::{Deserialize, Serialize};

use gantry_platform::Platform;

use crate::error::HostError;

/// Startup configuration for a [`Host`](crate::Host).
///
/// Decided once by the embedding before initialization; platform selection
/// is data here, not compile-time flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Which platform implementations to select for every capability.
    pub platform: Platform,

    /// Start the trace provider as part of initialization.
    #[serde(default)]
    pub start_tracing: bool,

    /// Word list for the spelling engine. Empty means no dictionary; the
    /// engine then passes every word.
    #[serde(default)]
    pub spell_dictionary: Vec<String>,
}

impl HostConfig {
    /// Creates a config with defaults for the given platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            start_tracing: false,
            spell_dictionary: Vec::new(),
        }
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        serde_json::from_str(json).map_err(|e| HostError::Config(e.to_string()))
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, HostError> {
        serde_json::to_string_pretty(self).map_err(|e| HostError::Config(e.to_string()))
    }
}
