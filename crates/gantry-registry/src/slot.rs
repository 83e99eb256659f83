//! Late-bound service slots.
//!
//! Sharing one capability instance across unrelated call sites usually ends
//! up as a process-wide set/get pointer. Here that seam is a slot owned by a
//! coordinating object and passed to whoever needs it: same contract (set
//! replaces wholesale, unset reads are a first-class non-fatal outcome), no
//! ambient global.

use std::sync::{Arc, RwLock};

/// A settable / gettable handle for one shared service instance.
///
/// `set` replaces the current binding wholesale — which is also how test
/// overrides work — and `clear` returns the slot to the unset sentinel.
/// Readers before the first `set` observe `None` and must treat it as
/// "feature unavailable", not as an error.
///
/// Reads and set/clear are atomic swaps of the shared handle. Callers still
/// typically bind once during startup before any reader runs.
pub struct ServiceSlot<T: ?Sized> {
    name: &'static str,
    current: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> ServiceSlot<T> {
    /// Creates an empty slot.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: RwLock::new(None),
        }
    }

    /// Creates a slot already bound to `service`.
    pub fn bound(name: &'static str, service: Arc<T>) -> Self {
        Self {
            name,
            current: RwLock::new(Some(service)),
        }
    }

    /// Returns the slot name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Binds `service`, returning the previous binding if there was one.
    ///
    /// The slot shares the instance; the caller keeps its own handle and
    /// remains responsible for the service's wider lifetime.
    pub fn set(&self, service: Arc<T>) -> Option<Arc<T>> {
        tracing::debug!(slot = self.name, "service bound");
        self.current.write().expect("slot lock poisoned").replace(service)
    }

    /// Unbinds the slot, returning the previous binding if there was one.
    pub fn clear(&self) -> Option<Arc<T>> {
        tracing::debug!(slot = self.name, "service cleared");
        self.current.write().expect("slot lock poisoned").take()
    }

    /// Returns the current binding, or `None` if the slot was never set or
    /// has been cleared.
    pub fn get(&self) -> Option<Arc<T>> {
        self.current.read().expect("slot lock poisoned").clone()
    }

    /// Returns true if a service is currently bound.
    pub fn is_bound(&self) -> bool {
        self.current.read().expect("slot lock poisoned").is_some()
    }
}

impl<T: ?Sized> std::fmt::Debug for ServiceSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSlot")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Lookup: Send + Sync {
        fn resolve(&self, id: u32) -> Option<String>;
    }

    struct FixedLookup(String);

    impl Lookup for FixedLookup {
        fn resolve(&self, _id: u32) -> Option<String> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn test_unset_slot_reads_none() {
        let slot: ServiceSlot<dyn Lookup> = ServiceSlot::new("workspace_lookup");
        assert!(!slot.is_bound());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let slot: ServiceSlot<dyn Lookup> = ServiceSlot::new("workspace_lookup");
        let service: Arc<dyn Lookup> = Arc::new(FixedLookup("main".into()));

        assert!(slot.set(service.clone()).is_none());
        let got = slot.get().unwrap();
        assert!(Arc::ptr_eq(&got, &service));
        assert_eq!(got.resolve(7), Some("main".into()));
    }

    #[test]
    fn test_clear_returns_to_unset_sentinel() {
        let service: Arc<dyn Lookup> = Arc::new(FixedLookup("main".into()));
        let slot = ServiceSlot::bound("workspace_lookup", service.clone());

        let previous = slot.clear().unwrap();
        assert!(Arc::ptr_eq(&previous, &service));
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let slot: ServiceSlot<dyn Lookup> = ServiceSlot::new("workspace_lookup");
        let real: Arc<dyn Lookup> = Arc::new(FixedLookup("real".into()));
        let fake: Arc<dyn Lookup> = Arc::new(FixedLookup("fake".into()));

        slot.set(real.clone());
        // Test-override pattern: replace, run, restore.
        let previous = slot.set(fake).unwrap();
        assert!(Arc::ptr_eq(&previous, &real));
        assert_eq!(slot.get().unwrap().resolve(0), Some("fake".into()));

        slot.set(previous);
        assert_eq!(slot.get().unwrap().resolve(0), Some("real".into()));
    }
}
