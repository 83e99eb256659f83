//! Error types for host construction and operation.

use thiserror::Error;

use gantry_ipc::IpcError;
use gantry_platform::PlatformError;
use gantry_registry::RegistryError;

/// Errors surfaced by the host to the embedding.
#[derive(Debug, Error)]
pub enum HostError {
    /// Startup configuration was malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A registration table rejected a key or a lookup missed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Capability or factory machinery failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Message validation or delivery failed.
    #[error(transparent)]
    Ipc(#[from] IpcError),

    /// A registered entry point ran and reported failure.
    #[error("entry point '{name}' failed: {message}")]
    EntryFailed {
        /// The entry point that failed.
        name: String,
        /// What it reported.
        message: String,
    },
}

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
