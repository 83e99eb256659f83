//! Shared fixtures for the gantry end-to-end tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;

use gantry_host::{EntryPoint, Host, HostConfig, Invocation, WorkspaceLookup};
use gantry_ipc::{GuardedPeer, PeerId};
use gantry_platform::{Backend, Platform, PlatformError};

/// A backend that records the parameters it was built with.
pub struct RecordingBackend {
    kind: String,
    device: Option<String>,
}

impl RecordingBackend {
    /// Creates a backend for `kind`.
    pub fn new(kind: impl Into<String>, device: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            device,
        }
    }
}

impl Backend for RecordingBackend {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn describe(&self) -> String {
        match &self.device {
            Some(device) => format!("{} ({})", self.kind, device),
            None => self.kind.clone(),
        }
    }
}

/// A workspace lookup that always answers the same workspace.
pub struct FixedWorkspaceLookup(pub &'static str);

impl WorkspaceLookup for FixedWorkspaceLookup {
    fn workspace_for_window(&self, _window: u64) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Creates a peer whose terminations are counted.
pub fn counting_peer(id: PeerId) -> (GuardedPeer, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let peer = GuardedPeer::new(id, move |_id, _reason| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (peer, count)
}

fn echo(invocation: &Invocation) -> Result<Value, String> {
    Ok(invocation.args.clone())
}

fn version(_invocation: &Invocation) -> Result<Value, String> {
    Ok(Value::from(env!("CARGO_PKG_VERSION")))
}

/// Message ids every test host whitelists.
pub const TEST_MESSAGES: &[u32] = &[0x100, 0x101, 0x102];

/// Builds a fully-populated host on the given platform.
pub fn test_host(platform: Platform) -> Host {
    let mut builder = Host::builder(HostConfig::new(platform));
    builder
        .register_entry_points(vec![
            EntryPoint::new("test.echo", echo),
            EntryPoint::new("test.version", version),
        ])
        .expect("entry points");
    builder
        .register_backend_factory("render.null", |params| {
            Ok(Box::new(RecordingBackend::new("render.null", params.device.clone()))
                as Box<dyn Backend>)
        })
        .expect("factory");
    builder
        .register_backend_factory("render.failing", |_params| {
            Err(PlatformError::construction("render.failing", "device lost"))
        })
        .expect("factory");
    builder.allow_messages(TEST_MESSAGES);
    builder.build().expect("host")
}
