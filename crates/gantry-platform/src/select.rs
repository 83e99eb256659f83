//! Explicit platform selection.
//!
//! Exactly one implementation per capability is chosen at process startup
//! from configuration. There is no conditional-compilation selection here:
//! the decision is data, visible in config files and logs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::spell::{NativeSpellBackend, SpellBackend, StubSpellBackend};
use crate::trace::{ProcessTraceController, StubTraceController, TraceController};

/// Platform flavor an embedding runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Full platform services are available.
    Native,
    /// No platform services; capabilities resolve to stubs.
    Headless,
}

impl Platform {
    /// Returns the platform as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Native => "native",
            Platform::Headless => "headless",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Platform::Native),
            "headless" => Ok(Platform::Headless),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}

/// Selects the trace controller for a platform.
pub fn select_trace_controller(platform: Platform) -> Arc<dyn TraceController> {
    match platform {
        Platform::Native => Arc::new(ProcessTraceController::new()),
        Platform::Headless => Arc::new(StubTraceController::new()),
    }
}

/// Selects the spelling engine for a platform.
pub fn select_spell_backend(platform: Platform) -> Arc<dyn SpellBackend> {
    match platform {
        Platform::Native => Arc::new(NativeSpellBackend::new()),
        Platform::Headless => Arc::new(StubSpellBackend::new()),
    }
}
