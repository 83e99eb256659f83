//! Thread-affine message delivery.
//!
//! Some handlers must only ever run on one thread. The sender checks thread
//! affinity on every send: already on the target thread means a direct
//! synchronous call; any other thread means a blocking, ordering-preserving
//! handoff through a channel — the caller waits until the handler has run.
//! This is a synchronous rendezvous, not fire-and-forget.

use std::sync::mpsc;
use std::thread::{self, ThreadId};

use crate::error::IpcError;

/// Handles messages on the pump's target thread.
pub trait MessageHandler<M>: Send + Sync {
    /// Processes one message. Always invoked on the target thread.
    fn handle(&self, message: M);
}

impl<M, F> MessageHandler<M> for F
where
    F: Fn(M) + Send + Sync,
{
    fn handle(&self, message: M) {
        self(message)
    }
}

struct Envelope<M> {
    message: M,
    // Zero-capacity rendezvous: the sender blocks on this until the handler
    // has finished.
    ack: mpsc::SyncSender<()>,
}

/// Receiving half, living on the target thread.
///
/// Created on the thread the handler is affine to; that thread must service
/// the pump (via [`poll`](MessagePump::poll) or [`run`](MessagePump::run))
/// for cross-thread sends to complete.
pub struct MessagePump<M> {
    rx: mpsc::Receiver<Envelope<M>>,
    handler: std::sync::Arc<dyn MessageHandler<M>>,
}

/// Sending half, cloneable across threads.
pub struct ThreadAffineSender<M> {
    target: ThreadId,
    tx: mpsc::Sender<Envelope<M>>,
    handler: std::sync::Arc<dyn MessageHandler<M>>,
}

impl<M> Clone for ThreadAffineSender<M> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            tx: self.tx.clone(),
            handler: std::sync::Arc::clone(&self.handler),
        }
    }
}

/// Creates a pump bound to the calling thread, plus its sender.
pub fn thread_affine<M: Send>(
    handler: std::sync::Arc<dyn MessageHandler<M>>,
) -> (MessagePump<M>, ThreadAffineSender<M>) {
    let (tx, rx) = mpsc::channel();
    let pump = MessagePump {
        rx,
        handler: std::sync::Arc::clone(&handler),
    };
    let sender = ThreadAffineSender {
        target: thread::current().id(),
        tx,
        handler,
    };
    (pump, sender)
}

impl<M: Send> ThreadAffineSender<M> {
    /// Delivers one message to the handler on the target thread.
    ///
    /// On the target thread this is a plain call. From any other thread the
    /// message is forwarded and the call blocks until the handler has run,
    /// so cross-thread sends from one thread observe each other's effects in
    /// order.
    pub fn send(&self, message: M) -> Result<(), IpcError> {
        if thread::current().id() == self.target {
            self.handler.handle(message);
            return Ok(());
        }

        let (ack_tx, ack_rx) = mpsc::sync_channel(0);
        self.tx
            .send(Envelope {
                message,
                ack: ack_tx,
            })
            .map_err(|_| IpcError::Disconnected)?;
        ack_rx.recv().map_err(|_| IpcError::Disconnected)
    }

    /// Returns true when called from the target thread.
    pub fn is_on_target_thread(&self) -> bool {
        thread::current().id() == self.target
    }
}

impl<M> MessagePump<M> {
    /// Handles every message queued so far; returns how many were handled.
    pub fn poll(&self) -> usize {
        let mut handled = 0;
        while let Ok(envelope) = self.rx.try_recv() {
            self.handler.handle(envelope.message);
            let _ = envelope.ack.send(());
            handled += 1;
        }
        handled
    }

    /// Blocks handling messages until every sender is dropped.
    pub fn run(&self) {
        while let Ok(envelope) = self.rx.recv() {
            self.handler.handle(envelope.message);
            let _ = envelope.ack.send(());
        }
    }
}
