//! Gantry Host
//!
//! The owning coordinator for the gantry seams. An embedding builds a
//! [`Host`] in two phases:
//!
//! 1. **Initialization**: a [`HostBuilder`] collects entry-point batches,
//!    backend factories, and the message whitelist, and selects one
//!    capability implementation per platform from [`HostConfig`].
//! 2. **Frozen**: [`HostBuilder::build`] produces a read-only [`Host`];
//!    every table is reached through an explicit lookup call from then on.
//!
//! # Example
//!
//! ```
//! use gantry_host::{EntryPoint, Host, HostConfig, Invocation};
//! use serde_json::Value;
//!
//! fn version(_invocation: &Invocation) -> Result<Value, String> {
//!     Ok(Value::from("1.0"))
//! }
//!
//! let config = HostConfig::from_json(r#"{ "platform": "headless" }"#).unwrap();
//! let mut builder = Host::builder(config);
//! builder
//!     .register_entry_points(vec![EntryPoint::new("app.version", version)])
//!     .unwrap();
//! builder.allow_messages(&[0x01, 0x02]);
//!
//! let host = builder.build().unwrap();
//! let result = host.invoke("app.version", &Invocation::empty()).unwrap();
//! assert_eq!(result, Value::from("1.0"));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod host;

pub use config::HostConfig;
pub use entry::{EntryHandler, EntryPoint, Invocation};
pub use error::{HostError, Result};
pub use host::{Host, HostBuilder, WorkspaceLookup};
