//! Entry-point tables.
//!
//! The host exposes a finite, compile-time-known set of named operations to
//! its embedding — the same shape as a native-method registration array:
//! static name, plain function pointer, bulk-registered in one atomic batch.

use serde_json::Value;

use gantry_registry::RegistryEntry;

/// Arguments passed to an entry point.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Free-form JSON arguments.
    pub args: Value,
}

impl Invocation {
    /// Creates an invocation with no arguments.
    pub fn empty() -> Self {
        Self { args: Value::Null }
    }

    /// Creates an invocation with arguments.
    pub fn with_args(args: Value) -> Self {
        Self { args }
    }
}

/// Handler signature for an entry point.
///
/// A plain function pointer: entry points are compile-time-known bindings,
/// not runtime closures.
pub type EntryHandler = fn(&Invocation) -> Result<Value, String>;

/// One (name, handler) binding in the host's entry-point table.
#[derive(Clone, Copy)]
pub struct EntryPoint {
    /// Stable operation name, e.g. `"frame.commit"`.
    pub name: &'static str,
    /// The bound handler.
    pub handler: EntryHandler,
}

impl EntryPoint {
    /// Creates a binding.
    pub const fn new(name: &'static str, handler: EntryHandler) -> Self {
        Self { name, handler }
    }
}

impl RegistryEntry for EntryPoint {
    fn key(&self) -> &str {
        self.name
    }
}

impl std::fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPoint").field("name", &self.name).finish()
    }
}
