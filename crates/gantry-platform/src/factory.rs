//! Factory callbacks for polymorphic products.
//!
//! The embedding environment registers a creation callback per kind during
//! initialization; the framework later constructs products on demand without
//! knowing anything about them beyond the product trait. A missing factory
//! is a configuration error surfaced to the caller.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::PlatformError;

/// The fixed parameter set every factory receives.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceParams {
    /// Identifier of the device the product should attach to, if any.
    pub device: Option<String>,
    /// Kind-specific options, carried as free-form JSON.
    pub options: Value,
}

impl DeviceParams {
    /// Creates empty params.
    pub fn none() -> Self {
        Self {
            device: None,
            options: Value::Null,
        }
    }

    /// Creates params for a named device.
    pub fn for_device(device: impl Into<String>) -> Self {
        Self {
            device: Some(device.into()),
            options: Value::Null,
        }
    }

    /// Attaches kind-specific options.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

impl Default for DeviceParams {
    fn default() -> Self {
        Self::none()
    }
}

/// A registered creation callback producing an exclusively-owned `Box<P>`.
pub type Constructor<P> =
    Box<dyn Fn(&DeviceParams) -> Result<Box<P>, PlatformError> + Send + Sync>;

/// Maps kind strings to registered factory callbacks.
///
/// Populated during the initialization phase; duplicate kinds are rejected.
/// Generic over the product so unrelated product families get their own
/// table instead of sharing a type-erased one.
pub struct FactoryRegistry<P: ?Sized> {
    name: &'static str,
    factories: HashMap<String, Constructor<P>>,
}

impl<P: ?Sized> FactoryRegistry<P> {
    /// Creates an empty factory table.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            factories: HashMap::new(),
        }
    }

    /// Registers a factory for `kind`.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F) -> Result<(), PlatformError>
    where
        F: Fn(&DeviceParams) -> Result<Box<P>, PlatformError> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.factories.contains_key(&kind) {
            return Err(PlatformError::FactoryAlreadyRegistered(kind));
        }
        tracing::debug!(table = self.name, kind = %kind, "factory registered");
        self.factories.insert(kind, Box::new(factory));
        Ok(())
    }

    /// Constructs a product of the given kind.
    ///
    /// Fails with [`PlatformError::FactoryNotRegistered`] when the embedding
    /// never supplied a factory for `kind`.
    pub fn create(&self, kind: &str, params: &DeviceParams) -> Result<Box<P>, PlatformError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| PlatformError::FactoryNotRegistered(kind.to_string()))?;
        factory(params)
    }

    /// Returns true if a factory is registered for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Iterates the registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|k| k.as_str())
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<P: ?Sized> std::fmt::Debug for FactoryRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("name", &self.name)
            .field("len", &self.factories.len())
            .finish()
    }
}

/// The sample polymorphic product used by the host and tests.
///
/// Real embeddings define their own product traits; nothing in
/// [`FactoryRegistry`] depends on this one.
pub trait Backend: Send {
    /// Returns the kind this backend was constructed for.
    fn kind(&self) -> &str;

    /// Returns a human-readable description of the instance.
    fn describe(&self) -> String;
}

impl std::fmt::Debug for dyn Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("kind", &self.kind())
            .finish()
    }
}
