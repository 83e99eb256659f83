//! Gantry Registration Primitives
//!
//! This crate provides the three smallest seams the gantry workspace is built
//! from:
//!
//! - [`Registry`] / [`RegistryBuilder`]: registration tables mapping stable
//!   keys to handler bindings, populated once during a defined setup phase
//!   and read-only thereafter. Batch registration is atomic all-or-nothing.
//! - [`ServiceSlot`]: a late-bound, settable/gettable handle for one shared
//!   service instance, owned by a coordinator instead of living behind a
//!   process-global accessor. An unset slot reads as `None` and means
//!   "feature unavailable", never a failure.
//! - [`IdGenerator`]: globally unique, strictly increasing ids from a single
//!   atomic increment.
//!
//! # Example
//!
//! ```
//! use gantry_registry::{Registry, RegistryBuilder, RegistryEntry};
//!
//! struct Route {
//!     name: &'static str,
//!     target: &'static str,
//! }
//!
//! impl RegistryEntry for Route {
//!     fn key(&self) -> &str {
//!         self.name
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new("routes");
//! builder
//!     .register_all(vec![
//!         Route { name: "home", target: "/" },
//!         Route { name: "settings", target: "/settings" },
//!     ])
//!     .unwrap();
//!
//! let routes: Registry<Route> = builder.build();
//! assert_eq!(routes.get("home").unwrap().target, "/");
//! assert!(routes.get("missing").is_err());
//! ```

pub mod error;
pub mod id;
pub mod slot;
pub mod table;

pub use error::RegistryError;
pub use id::IdGenerator;
pub use slot::ServiceSlot;
pub use table::{Registry, RegistryBuilder, RegistryEntry, Scope};
