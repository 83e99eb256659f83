//! Trace-provider control capability.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::capability::{Capability, CapabilityState, StateCell};

/// Controls a process-wide trace provider.
pub trait TraceController: Capability {
    /// Requests that tracing start.
    ///
    /// Returns true if tracing is (now) running. Before the controller is
    /// ready this is a no-op returning false on functional implementations.
    fn start_tracing(&self) -> bool;

    /// Requests that tracing stop. No-op if tracing is not running.
    fn stop_tracing(&self);

    /// Returns true while tracing is running.
    fn is_tracing(&self) -> bool;
}

/// Functional controller: tracks enabled state once initialized.
#[derive(Debug, Default)]
pub struct ProcessTraceController {
    state: StateCell,
    active: AtomicBool,
}

impl ProcessTraceController {
    /// Creates an uninitialized controller.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Capability for ProcessTraceController {
    fn name(&self) -> &'static str {
        "trace_controller"
    }

    fn state(&self) -> CapabilityState {
        self.state.state()
    }

    fn initialize_if_needed(&self) {
        if self.state.begin_initialize() {
            // Nothing to set up beyond the state itself; the provider
            // connects lazily on the first start_tracing call.
            self.state.mark_ready();
            tracing::debug!(capability = self.name(), "initialized");
        }
    }
}

impl TraceController for ProcessTraceController {
    fn start_tracing(&self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.active.store(true, Ordering::Release);
        true
    }

    fn stop_tracing(&self) {
        self.active.store(false, Ordering::Release);
    }

    fn is_tracing(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Stub controller for platforms without a trace provider.
///
/// Deliberately a no-op, not an error path: `start_tracing` always reports
/// success with no observable side effect, and `is_tracing` stays false.
#[derive(Debug, Default)]
pub struct StubTraceController {
    state: StateCell,
}

impl StubTraceController {
    /// Creates the stub.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Capability for StubTraceController {
    fn name(&self) -> &'static str {
        "trace_controller_stub"
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

impl TraceController for StubTraceController {
    fn start_tracing(&self) -> bool {
        true
    }

    fn stop_tracing(&self) {}

    fn is_tracing(&self) -> bool {
        false
    }
}
