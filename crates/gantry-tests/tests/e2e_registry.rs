//! End-to-end tests for the registration primitives.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;

use gantry_registry::{
    IdGenerator, Registry, RegistryBuilder, RegistryEntry, RegistryError, ServiceSlot,
};

#[derive(Debug, Clone, PartialEq)]
struct Command {
    name: &'static str,
    target: &'static str,
}

impl RegistryEntry for Command {
    fn key(&self) -> &str {
        self.name
    }
}

fn command(name: &'static str, target: &'static str) -> Command {
    Command { name, target }
}

#[test]
fn test_batch_registration_is_all_or_nothing() {
    let mut builder = RegistryBuilder::new("commands");
    builder
        .register_all(vec![command("open", "file"), command("close", "file")])
        .unwrap();

    // One duplicate poisons the whole batch, including its fresh entries.
    let err = builder
        .register_all(vec![command("save", "file"), command("open", "window")])
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateKey {
            table: "commands",
            key: "open".to_string(),
        }
    );

    let table = builder.build();
    assert_eq!(table.len(), 2);
    assert!(!table.contains("save"));
}

#[test]
fn test_frozen_table_preserves_insertion_order() {
    let mut builder = RegistryBuilder::new("commands");
    builder
        .register_all(vec![
            command("third", "c"),
            command("first", "a"),
            command("second", "b"),
        ])
        .unwrap();
    let table: Registry<Command> = builder.build();

    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(keys, vec!["third", "first", "second"]);
    assert_eq!(table.get("first").unwrap().target, "a");
}

#[test]
fn test_lookup_miss_names_table_and_key() {
    let table: Registry<Command> = RegistryBuilder::new("commands").build();
    let err = table.get("missing").unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            table: "commands",
            key: "missing".to_string(),
        }
    );
    assert_eq!(table.find("missing"), None);
}

#[test]
fn test_service_slot_override_and_restore() {
    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct Real;
    struct Fake;

    impl Greeter for Real {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    impl Greeter for Fake {
        fn greet(&self) -> String {
            "test".to_string()
        }
    }

    let slot: ServiceSlot<dyn Greeter> = ServiceSlot::new("greeter");
    assert!(slot.get().is_none());

    slot.set(Arc::new(Real));
    assert_eq!(slot.get().unwrap().greet(), "hello");

    // Swap in a fake, then restore the previous binding.
    let previous = slot.set(Arc::new(Fake)).unwrap();
    assert_eq!(slot.get().unwrap().greet(), "test");
    slot.set(previous);
    assert_eq!(slot.get().unwrap().greet(), "hello");
}

#[test]
fn test_id_generator_is_race_free_across_threads() {
    let ids = Arc::new(IdGenerator::new());
    let threads = 4;
    let per_thread = 500;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let ids = Arc::clone(&ids);
            thread::spawn(move || {
                (0..per_thread).map(|_| ids.next_id()).collect::<Vec<u64>>()
            })
        })
        .collect();

    let mut all: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    all.dedup();

    // No duplicates, no gaps.
    assert_eq!(all.len(), threads * per_thread);
    assert_eq!(*all.last().unwrap() as usize, threads * per_thread - 1);
}
