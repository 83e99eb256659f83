//! Gantry Message Validation and Delivery
//!
//! Three seams around inter-process (and inter-thread) messaging:
//!
//! - [`MessageWhitelist`]: the finite set of message ids a peer may legally
//!   send, built once from an explicit id list.
//! - [`MessageFilter`]: the bad-message teardown pattern — an out-of-whitelist
//!   id is logged at error level, counted, and fatal to the offending peer
//!   (and only that peer). No retry, no recovery.
//! - [`ThreadAffineSender`] / [`MessagePump`]: delivery to a handler that
//!   must run on one specific thread — a direct call when already there, a
//!   blocking ordering-preserving handoff otherwise.
//!
//! # Example
//!
//! ```
//! use gantry_ipc::{GuardedPeer, MessageFilter, MessageWhitelist, PeerId};
//!
//! let whitelist = MessageWhitelist::from_ids(&[0x10, 0x11]).unwrap();
//! let filter = MessageFilter::new(whitelist);
//! let peer = GuardedPeer::new(PeerId(1), |id, reason| {
//!     eprintln!("tearing down {id}: {reason}");
//! });
//!
//! assert!(filter.check(&peer, 0x10).is_ok());
//! assert!(filter.check(&peer, 0xff).is_err());
//! assert!(peer.is_terminated());
//! assert_eq!(filter.violation_count(), 1);
//! ```

pub mod bad_message;
pub mod error;
pub mod sender;
pub mod whitelist;

pub use bad_message::{GuardedPeer, MessageFilter, Peer, PeerId};
pub use error::IpcError;
pub use sender::{thread_affine, MessageHandler, MessagePump, ThreadAffineSender};
pub use whitelist::MessageWhitelist;
