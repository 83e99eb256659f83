//! Platform spelling-engine capability.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::capability::{Capability, CapabilityState, StateCell};

/// Spelling-check capability.
pub trait SpellBackend: Capability {
    /// Returns true once the engine is initialized and enabled.
    ///
    /// Always false before [`Capability::initialize_if_needed`] has run.
    fn is_enabled(&self) -> bool;

    /// Checks a single word.
    ///
    /// When the engine is not ready, or no dictionary is loaded, every word
    /// passes — "cannot check" is not "misspelled".
    fn check_word(&self, word: &str) -> bool;
}

/// Dictionary-backed spelling engine.
#[derive(Debug, Default)]
pub struct NativeSpellBackend {
    state: StateCell,
    enabled: AtomicBool,
    dictionary: HashSet<String>,
}

impl NativeSpellBackend {
    /// Creates an engine with no dictionary; every word will pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a word list.
    pub fn with_dictionary(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            state: StateCell::new(),
            enabled: AtomicBool::new(false),
            dictionary: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl Capability for NativeSpellBackend {
    fn name(&self) -> &'static str {
        "spell_backend"
    }

    fn state(&self) -> CapabilityState {
        self.state.state()
    }

    fn initialize_if_needed(&self) {
        if self.state.begin_initialize() {
            self.enabled.store(true, Ordering::Release);
            self.state.mark_ready();
            tracing::debug!(
                capability = self.name(),
                dictionary_words = self.dictionary.len(),
                "initialized"
            );
        }
    }
}

impl SpellBackend for NativeSpellBackend {
    fn is_enabled(&self) -> bool {
        self.is_ready() && self.enabled.load(Ordering::Acquire)
    }

    fn check_word(&self, word: &str) -> bool {
        if !self.is_enabled() || self.dictionary.is_empty() {
            return true;
        }
        self.dictionary.contains(&word.to_lowercase())
    }
}

/// Stub engine for platforms without a spelling service.
///
/// Reports itself disabled forever and passes every word. A deliberate
/// fixed-value implementation, not an error path.
#[derive(Debug, Default)]
pub struct StubSpellBackend {
    state: StateCell,
}

impl StubSpellBackend {
    /// Creates the stub.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Capability for StubSpellBackend {
    fn name(&self) -> &'static str {
        "spell_backend_stub"
    }

    fn state(&self) -> CapabilityState {
        self.state.state()
    }

    fn initialize_if_needed(&self) {
        if self.state.begin_initialize() {
            self.state.mark_ready();
        }
    }
}

impl SpellBackend for StubSpellBackend {
    fn is_enabled(&self) -> bool {
        false
    }

    fn check_word(&self, _word: &str) -> bool {
        true
    }
}
