//! Capability lifecycle machinery.
//!
//! A capability is a small operation set with exactly one implementation
//! selected per platform at startup. Implementations move through a one-way
//! lifecycle: uninitialized, initializing, ready. Operations issued before
//! the capability is ready either no-op or return a documented sentinel; the
//! interface never retries anything on its own.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle state of a capability implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    /// Nothing has happened yet.
    Uninitialized,
    /// Some caller is running one-time initialization.
    Initializing,
    /// The capability is usable.
    Ready,
}

impl CapabilityState {
    /// Returns the state as a string, for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityState::Uninitialized => "uninitialized",
            CapabilityState::Initializing => "initializing",
            CapabilityState::Ready => "ready",
        }
    }
}

/// Common surface shared by every capability implementation.
pub trait Capability: Send + Sync {
    /// Returns the capability name, for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the current lifecycle state.
    fn state(&self) -> CapabilityState;

    /// Runs one-time initialization if it has not happened yet.
    ///
    /// Fire-and-forget and idempotent: later calls are no-ops.
    fn initialize_if_needed(&self);

    /// Returns true once initialization has completed.
    fn is_ready(&self) -> bool {
        self.state() == CapabilityState::Ready
    }
}

const STATE_UNINITIALIZED: u8 = 0;
const STATE_INITIALIZING: u8 = 1;
const STATE_READY: u8 = 2;

/// Atomic holder for a [`CapabilityState`].
///
/// Implementations embed one of these and drive it forward with
/// [`begin_initialize`](StateCell::begin_initialize) /
/// [`mark_ready`](StateCell::mark_ready). The state never moves backwards.
#[derive(Debug)]
pub struct StateCell {
    state: AtomicU8,
}

impl StateCell {
    /// Creates a cell in the uninitialized state.
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_UNINITIALIZED),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> CapabilityState {
        match self.state.load(Ordering::Acquire) {
            STATE_UNINITIALIZED => CapabilityState::Uninitialized,
            STATE_INITIALIZING => CapabilityState::Initializing,
            _ => CapabilityState::Ready,
        }
    }

    /// Claims the right to run initialization.
    ///
    /// Returns true for exactly one caller; everyone else sees false and
    /// must not initialize again.
    pub fn begin_initialize(&self) -> bool {
        self.state
            .compare_exchange(
                STATE_UNINITIALIZED,
                STATE_INITIALIZING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Marks initialization complete.
    pub fn mark_ready(&self) {
        self.state.store(STATE_READY, Ordering::Release);
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}
