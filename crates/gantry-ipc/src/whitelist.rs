//! Message-id whitelists.

use std::collections::HashSet;

use crate::error::IpcError;

/// The finite, compile-time-known set of message ids a peer may send.
///
/// Built once from an explicit id list during setup; consumers only ever ask
/// [`contains`](MessageWhitelist::contains). Duplicate ids in the definition
/// are a setup defect and reject construction.
#[derive(Debug, Clone)]
pub struct MessageWhitelist {
    ids: HashSet<u32>,
    ordered: Vec<u32>,
}

impl MessageWhitelist {
    /// Builds a whitelist from an explicit id list.
    pub fn from_ids(ids: &[u32]) -> Result<Self, IpcError> {
        let mut set = HashSet::with_capacity(ids.len());
        for &id in ids {
            if !set.insert(id) {
                return Err(IpcError::DuplicateMessageId(id));
            }
        }
        Ok(Self {
            ids: set,
            ordered: ids.to_vec(),
        })
    }

    /// Creates an empty whitelist: every message is illegal.
    pub fn empty() -> Self {
        Self {
            ids: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Returns true if `id` is a legal message.
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the number of legal ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no ids are legal.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the ids in definition order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ordered.iter().copied()
    }
}
