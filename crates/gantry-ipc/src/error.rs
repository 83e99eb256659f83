//! Error types for message validation and delivery.

use thiserror::Error;

use crate::bad_message::PeerId;

/// Errors produced by whitelist construction, message filtering, and
/// cross-thread delivery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IpcError {
    /// A message id appeared twice in a whitelist definition.
    #[error("duplicate message id in whitelist: {0}")]
    DuplicateMessageId(u32),

    /// A peer sent a message id outside its whitelist. The peer has been
    /// torn down; there is no retry and no recovery for it.
    #[error("bad message {id} from peer {peer}")]
    BadMessage {
        /// The offending peer.
        peer: PeerId,
        /// The out-of-whitelist message id.
        id: u32,
    },

    /// The receiving side of a cross-thread channel is gone.
    #[error("message pump disconnected")]
    Disconnected,
}
