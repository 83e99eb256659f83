//! Bad-message teardown.
//!
//! A peer that sends a message id outside its whitelist is misbehaving in a
//! way the receiver cannot interpret charitably. The response is fixed: log
//! at error level, count the violation, and terminate that peer. No retry,
//! no recovery, intentionally fatal to the offending peer only.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::IpcError;
use crate::whitelist::MessageWhitelist;

/// Identifies one peer connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId(pub u64);

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "peer-{}", self.0)
    }
}

/// Control surface of a connected peer.
pub trait Peer: Send + Sync {
    /// Returns this peer's id.
    fn id(&self) -> PeerId;

    /// Tears the peer down. Called at most once per peer by the filter.
    fn terminate(&self, reason: &str);
}

/// Validates incoming message ids and tears down violators.
pub struct MessageFilter {
    whitelist: MessageWhitelist,
    violations: AtomicU64,
}

impl MessageFilter {
    /// Creates a filter over a whitelist.
    pub fn new(whitelist: MessageWhitelist) -> Self {
        Self {
            whitelist,
            violations: AtomicU64::new(0),
        }
    }

    /// Validates one incoming message id from `peer`.
    ///
    /// Whitelisted ids pass. Anything else counts one violation, logs at
    /// error level, terminates the peer — first violation only; the peer is
    /// already gone afterwards — and returns [`IpcError::BadMessage`].
    pub fn check(&self, peer: &dyn Peer, id: u32) -> Result<(), IpcError> {
        if self.whitelist.contains(id) {
            return Ok(());
        }

        self.violations.fetch_add(1, Ordering::SeqCst);
        tracing::error!(peer = %peer.id(), message_id = id, "bad message received; terminating peer");
        peer.terminate("out-of-whitelist message id");

        Err(IpcError::BadMessage { peer: peer.id(), id })
    }

    /// Returns the whitelist this filter enforces.
    pub fn whitelist(&self) -> &MessageWhitelist {
        &self.whitelist
    }

    /// Returns the total number of violations seen.
    pub fn violation_count(&self) -> u64 {
        self.violations.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for MessageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFilter")
            .field("whitelist_len", &self.whitelist.len())
            .field("violations", &self.violation_count())
            .finish()
    }
}

/// A peer whose termination is delivered at most once.
///
/// Wraps an embedder-provided teardown callback behind an atomic flag so a
/// second violation — or a racing caller — cannot double-terminate. Embedders
/// with richer connection objects implement [`Peer`] directly with the same
/// guard.
pub struct GuardedPeer {
    id: PeerId,
    terminated: AtomicBool,
    on_terminate: Box<dyn Fn(PeerId, &str) + Send + Sync>,
}

impl GuardedPeer {
    /// Creates a peer with a teardown callback.
    pub fn new(id: PeerId, on_terminate: impl Fn(PeerId, &str) + Send + Sync + 'static) -> Self {
        Self {
            id,
            terminated: AtomicBool::new(false),
            on_terminate: Box::new(on_terminate),
        }
    }

    /// Returns true once the peer has been torn down.
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }
}

impl Peer for GuardedPeer {
    fn id(&self) -> PeerId {
        self.id
    }

    fn terminate(&self, reason: &str) {
        if self.terminated.swap(true, Ordering::SeqCst) {
            return;
        }
        (self.on_terminate)(self.id, reason);
    }
}

impl std::fmt::Debug for GuardedPeer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardedPeer")
            .field("id", &self.id)
            .field("terminated", &self.is_terminated())
            .finish()
    }
}
