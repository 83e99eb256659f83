//! The owning coordinator.
//!
//! All of the seams in the workspace converge here, with a two-phase
//! lifecycle: a [`HostBuilder`] collects every registration during a defined
//! initialization phase, then [`build`](HostBuilder::build) freezes the lot
//! into a read-only [`Host`]. Consumers reach every table through explicit
//! lookup calls on the host they were handed; nothing in the workspace is
//! ambient global state.

use std::sync::Arc;

use serde_json::Value;

use gantry_ipc::{MessageFilter, MessageWhitelist, Peer, PeerId};
use gantry_platform::{
    select_spell_backend, select_trace_controller, Backend, DeviceParams,
    FactoryRegistry, NativeSpellBackend, Platform, PlatformError, SpellBackend, TraceController,
};
use gantry_registry::{IdGenerator, Registry, RegistryBuilder, Scope, ServiceSlot};

use crate::config::HostConfig;
use crate::entry::{EntryPoint, Invocation};
use crate::error::{HostError, Result};

/// Late-bound window/workspace lookup service.
///
/// The classic singleton-accessor seam, rendered as a slot on the host:
/// expensive to thread through every call site, so it is bound once near
/// startup and fetched where needed. Unset means the feature is unavailable,
/// which callers must tolerate.
pub trait WorkspaceLookup: Send + Sync {
    /// Returns the workspace containing `window`, if known.
    fn workspace_for_window(&self, window: u64) -> Option<String>;
}

/// Collects registrations during the initialization phase.
pub struct HostBuilder {
    config: HostConfig,
    entry_points: RegistryBuilder<EntryPoint>,
    factories: FactoryRegistry<dyn Backend>,
    whitelist_ids: Vec<u32>,
}

impl HostBuilder {
    /// Starts an initialization phase with the given configuration.
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            entry_points: RegistryBuilder::with_scope("entry_points", Scope::Coordinator),
            factories: FactoryRegistry::new("backends"),
            whitelist_ids: Vec::new(),
        }
    }

    /// Registers a batch of entry points atomically.
    pub fn register_entry_points(
        &mut self,
        batch: impl IntoIterator<Item = EntryPoint>,
    ) -> Result<()> {
        self.entry_points.register_all(batch)?;
        Ok(())
    }

    /// Registers a backend factory for `kind`.
    pub fn register_backend_factory<F>(&mut self, kind: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(&DeviceParams) -> std::result::Result<Box<dyn Backend>, PlatformError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.register(kind, factory)?;
        Ok(())
    }

    /// Declares message ids the host's peers may send.
    ///
    /// Duplicates across all `allow_messages` calls are rejected at
    /// [`build`](Self::build) time.
    pub fn allow_messages(&mut self, ids: &[u32]) -> &mut Self {
        self.whitelist_ids.extend_from_slice(ids);
        self
    }

    /// Freezes everything into a read-only [`Host`].
    pub fn build(self) -> Result<Host> {
        let whitelist = MessageWhitelist::from_ids(&self.whitelist_ids)?;

        let trace = select_trace_controller(self.config.platform);
        let spell: Arc<dyn SpellBackend> = if self.config.platform == Platform::Native
            && !self.config.spell_dictionary.is_empty()
        {
            Arc::new(NativeSpellBackend::with_dictionary(
                self.config.spell_dictionary.iter().cloned(),
            ))
        } else {
            select_spell_backend(self.config.platform)
        };

        trace.initialize_if_needed();
        spell.initialize_if_needed();
        if self.config.start_tracing {
            trace.start_tracing();
        }

        let entry_points = self.entry_points.build();

        tracing::info!(
            platform = self.config.platform.as_str(),
            entry_points = entry_points.len(),
            factories = self.factories.len(),
            whitelisted_messages = whitelist.len(),
            "host initialized"
        );

        Ok(Host {
            config: self.config,
            entry_points,
            factories: self.factories,
            trace,
            spell,
            filter: MessageFilter::new(whitelist),
            ids: IdGenerator::starting_at(1),
            workspace_lookup: ServiceSlot::new("workspace_lookup"),
        })
    }
}

/// The frozen coordinator.
///
/// Read-only after construction apart from the explicitly late-bound
/// [`WorkspaceLookup`] slot and the monotonic id counter.
pub struct Host {
    config: HostConfig,
    entry_points: Registry<EntryPoint>,
    factories: FactoryRegistry<dyn Backend>,
    trace: Arc<dyn TraceController>,
    spell: Arc<dyn SpellBackend>,
    filter: MessageFilter,
    ids: IdGenerator,
    workspace_lookup: ServiceSlot<dyn WorkspaceLookup>,
}

impl Host {
    /// Starts an initialization phase.
    pub fn builder(config: HostConfig) -> HostBuilder {
        HostBuilder::new(config)
    }

    /// Returns the startup configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Returns the platform this host was built for.
    pub fn platform(&self) -> Platform {
        self.config.platform
    }

    /// Invokes a registered entry point by name.
    pub fn invoke(&self, name: &str, invocation: &Invocation) -> Result<Value> {
        let entry = self.entry_points.get(name)?;
        (entry.handler)(invocation).map_err(|message| HostError::EntryFailed {
            name: name.to_string(),
            message,
        })
    }

    /// Returns the frozen entry-point table.
    pub fn entry_points(&self) -> &Registry<EntryPoint> {
        &self.entry_points
    }

    /// Constructs a backend of the given kind via its registered factory.
    pub fn create_backend(&self, kind: &str, params: &DeviceParams) -> Result<Box<dyn Backend>> {
        Ok(self.factories.create(kind, params)?)
    }

    /// Returns true if a backend factory is registered for `kind`.
    pub fn has_backend(&self, kind: &str) -> bool {
        self.factories.contains(kind)
    }

    /// Validates an incoming message id from `peer`, tearing the peer down
    /// on violation.
    pub fn check_message(&self, peer: &dyn Peer, id: u32) -> Result<()> {
        Ok(self.filter.check(peer, id)?)
    }

    /// Returns the number of bad messages seen so far.
    pub fn bad_message_count(&self) -> u64 {
        self.filter.violation_count()
    }

    /// Allocates an id for a new peer connection.
    pub fn next_peer_id(&self) -> PeerId {
        PeerId(self.ids.next_id())
    }

    /// Allocates a plain unique id.
    pub fn next_id(&self) -> u64 {
        self.ids.next_id()
    }

    /// Returns the selected trace controller.
    pub fn trace(&self) -> &Arc<dyn TraceController> {
        &self.trace
    }

    /// Returns the selected spelling engine.
    pub fn spell(&self) -> &Arc<dyn SpellBackend> {
        &self.spell
    }

    /// Returns the bound workspace-lookup service, or `None` if the feature
    /// is unavailable.
    pub fn workspace_lookup(&self) -> Option<Arc<dyn WorkspaceLookup>> {
        self.workspace_lookup.get()
    }

    /// Binds (or replaces) the workspace-lookup service. Tests override the
    /// real service the same way and restore the previous binding after.
    pub fn bind_workspace_lookup(
        &self,
        service: Arc<dyn WorkspaceLookup>,
    ) -> Option<Arc<dyn WorkspaceLookup>> {
        self.workspace_lookup.set(service)
    }

    /// Unbinds the workspace-lookup service.
    pub fn clear_workspace_lookup(&self) -> Option<Arc<dyn WorkspaceLookup>> {
        self.workspace_lookup.clear()
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("platform", &self.config.platform)
            .field("entry_points", &self.entry_points.len())
            .field("factories", &self.factories.len())
            .field("bad_messages", &self.bad_message_count())
            .finish()
    }
}
