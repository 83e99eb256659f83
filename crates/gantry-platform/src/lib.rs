//! Gantry Platform Capabilities
//!
//! Capabilities are small operation sets — trace-provider control, spelling
//! check — with exactly one implementation selected per platform at startup,
//! chosen from configuration rather than conditional compilation. Each
//! implementation moves through a one-way lifecycle (uninitialized →
//! initializing → ready); operations issued early no-op or return a
//! documented sentinel.
//!
//! The crate also provides [`FactoryRegistry`], the factory-callback seam:
//! the embedding registers a constructor per kind during initialization and
//! the framework builds exclusively-owned products on demand.
//!
//! # Example
//!
//! ```
//! use gantry_platform::{select_spell_backend, select_trace_controller, Capability, Platform};
//!
//! let platform = Platform::Headless;
//! let trace = select_trace_controller(platform);
//! let spell = select_spell_backend(platform);
//!
//! // Headless stubs are deterministic no-ops, not errors.
//! assert!(trace.start_tracing());
//! assert!(!trace.is_tracing());
//! assert!(!spell.is_enabled());
//! ```

pub mod capability;
pub mod error;
pub mod factory;
pub mod select;
pub mod spell;
pub mod trace;

pub use capability::{Capability, CapabilityState, StateCell};
pub use error::PlatformError;
pub use factory::{Backend, Constructor, DeviceParams, FactoryRegistry};
pub use select::{select_spell_backend, select_trace_controller, Platform};
pub use spell::{NativeSpellBackend, SpellBackend, StubSpellBackend};
pub use trace::{ProcessTraceController, StubTraceController, TraceController};
