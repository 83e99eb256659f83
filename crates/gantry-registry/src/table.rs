//! Registration tables: built once during a setup phase, read-only thereafter.

use std::collections::HashMap;

use crate::error::RegistryError;

/// An entry that can live in a registration table.
///
/// An entry carries its stable key plus whatever binding the domain needs —
/// a callback, a trait object, or plain metadata. Keys must be unique within
/// a table.
pub trait RegistryEntry {
    /// Returns the stable identifier for this entry.
    fn key(&self) -> &str;
}

/// Where a registration table lives.
///
/// Informational only: the table itself is always owned by whoever built it
/// and reached through an explicit lookup call, never through ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// One table for the whole process, owned at the top of the embedding.
    Process,
    /// Owned by a single coordinating object.
    Coordinator,
}

impl Scope {
    /// Returns the scope as a string, for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Process => "process",
            Scope::Coordinator => "coordinator",
        }
    }
}

/// Mutable accumulator for a registration table.
///
/// Only exists during the setup phase. Entries are added individually with
/// [`register`](RegistryBuilder::register) or in bulk with
/// [`register_all`](RegistryBuilder::register_all); [`build`](RegistryBuilder::build)
/// freezes the result into an immutable [`Registry`].
pub struct RegistryBuilder<T: RegistryEntry> {
    name: &'static str,
    scope: Scope,
    entries: Vec<T>,
    keys: HashMap<String, usize>,
}

impl<T: RegistryEntry> RegistryBuilder<T> {
    /// Creates an empty builder for a coordinator-scoped table.
    pub fn new(name: &'static str) -> Self {
        Self::with_scope(name, Scope::Coordinator)
    }

    /// Creates an empty builder with an explicit scope.
    pub fn with_scope(name: &'static str, scope: Scope) -> Self {
        Self {
            name,
            scope,
            entries: Vec::new(),
            keys: HashMap::new(),
        }
    }

    /// Registers a single entry.
    ///
    /// Fails without side effect if the key is already bound.
    pub fn register(&mut self, entry: T) -> Result<(), RegistryError> {
        if self.keys.contains_key(entry.key()) {
            return Err(RegistryError::duplicate(self.name, entry.key()));
        }
        self.keys.insert(entry.key().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Registers a batch of entries atomically.
    ///
    /// The whole batch is validated first — duplicates within the batch and
    /// against already-registered keys both reject it — and only then bound.
    /// On failure nothing is inserted, so a failed batch can be corrected and
    /// retried without unwinding partial state.
    pub fn register_all(&mut self, batch: impl IntoIterator<Item = T>) -> Result<(), RegistryError> {
        let batch: Vec<T> = batch.into_iter().collect();

        let mut seen: HashMap<&str, ()> = HashMap::with_capacity(batch.len());
        for entry in &batch {
            let key = entry.key();
            if self.keys.contains_key(key) || seen.insert(key, ()).is_some() {
                return Err(RegistryError::duplicate(self.name, key));
            }
        }

        for entry in batch {
            self.keys.insert(entry.key().to_string(), self.entries.len());
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Returns the number of entries registered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freezes the builder into an immutable table.
    pub fn build(self) -> Registry<T> {
        tracing::debug!(
            table = self.name,
            scope = self.scope.as_str(),
            entries = self.entries.len(),
            "registry frozen"
        );
        Registry {
            name: self.name,
            scope: self.scope,
            entries: self.entries,
            keys: self.keys,
        }
    }
}

/// An immutable registration table.
///
/// Produced by [`RegistryBuilder::build`]. There is no post-build mutation
/// API: tables are populated once during initialization and read-only for the
/// rest of their life.
pub struct Registry<T: RegistryEntry> {
    name: &'static str,
    scope: Scope,
    entries: Vec<T>,
    keys: HashMap<String, usize>,
}

impl<T: RegistryEntry> Registry<T> {
    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the table scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Looks up an entry, failing explicitly when the key is unbound.
    pub fn get(&self, key: &str) -> Result<&T, RegistryError> {
        self.find(key)
            .ok_or_else(|| RegistryError::not_found(self.name, key))
    }

    /// Looks up an entry, returning `None` when the key is unbound.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.keys.get(key).map(|&i| &self.entries[i])
    }

    /// Returns true if the key is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Iterates keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key())
    }
}

impl<T: RegistryEntry> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Handler {
        name: &'static str,
        called_value: u32,
    }

    impl RegistryEntry for Handler {
        fn key(&self) -> &str {
            self.name
        }
    }

    fn sample_batch() -> Vec<Handler> {
        vec![
            Handler {
                name: "frame.commit",
                called_value: 1,
            },
            Handler {
                name: "frame.detach",
                called_value: 2,
            },
            Handler {
                name: "input.key",
                called_value: 3,
            },
        ]
    }

    #[test]
    fn test_register_and_lookup() {
        let mut builder = RegistryBuilder::new("handlers");
        builder.register_all(sample_batch()).unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("frame.commit").unwrap().called_value, 1);
        assert!(registry.contains("input.key"));
        assert!(registry.find("missing").is_none());
        assert_eq!(
            registry.get("missing").unwrap_err(),
            RegistryError::not_found("handlers", "missing")
        );
    }

    #[test]
    fn test_duplicate_single_registration_rejected() {
        let mut builder = RegistryBuilder::new("handlers");
        builder
            .register(Handler {
                name: "frame.commit",
                called_value: 1,
            })
            .unwrap();
        let err = builder
            .register(Handler {
                name: "frame.commit",
                called_value: 9,
            })
            .unwrap_err();
        assert_eq!(err, RegistryError::duplicate("handlers", "frame.commit"));

        // The first binding survives untouched.
        let registry = builder.build();
        assert_eq!(registry.get("frame.commit").unwrap().called_value, 1);
    }

    #[test]
    fn test_batch_is_atomic() {
        let mut builder = RegistryBuilder::new("handlers");
        builder
            .register(Handler {
                name: "input.key",
                called_value: 3,
            })
            .unwrap();

        // Batch collides with an existing key; nothing from it may land.
        let err = builder.register_all(sample_batch()).unwrap_err();
        assert_eq!(err, RegistryError::duplicate("handlers", "input.key"));
        assert_eq!(builder.len(), 1);

        let registry = builder.build();
        assert!(!registry.contains("frame.commit"));
        assert!(!registry.contains("frame.detach"));
    }

    #[test]
    fn test_batch_internal_duplicate_rejected() {
        let mut builder = RegistryBuilder::new("handlers");
        let batch = vec![
            Handler {
                name: "frame.commit",
                called_value: 1,
            },
            Handler {
                name: "frame.commit",
                called_value: 2,
            },
        ];
        assert!(builder.register_all(batch).is_err());
        assert!(builder.is_empty());
    }

    #[test]
    fn test_rebuild_is_idempotent_in_outcome() {
        // Building twice from the same entry source yields the same bindings.
        let mut first = RegistryBuilder::new("handlers");
        first.register_all(sample_batch()).unwrap();
        let first = first.build();

        let mut second = RegistryBuilder::new("handlers");
        second.register_all(sample_batch()).unwrap();
        let second = second.build();

        let first_keys: Vec<&str> = first.keys().collect();
        let second_keys: Vec<&str> = second.keys().collect();
        assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut builder = RegistryBuilder::with_scope("handlers", Scope::Process);
        builder.register_all(sample_batch()).unwrap();
        let registry = builder.build();

        assert_eq!(registry.scope(), Scope::Process);
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["frame.commit", "frame.detach", "input.key"]);
    }
}
