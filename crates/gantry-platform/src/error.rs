//! Error types for platform capabilities and factories.

use thiserror::Error;

/// Errors produced by capability selection and backend construction.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// No factory was registered for the requested kind. The embedding
    /// environment was supposed to supply one during initialization; this is
    /// a configuration error surfaced to the caller, not silently tolerated.
    #[error("no factory registered for backend kind: {0}")]
    FactoryNotRegistered(String),

    /// A factory for this kind already exists.
    #[error("factory already registered for backend kind: {0}")]
    FactoryAlreadyRegistered(String),

    /// The registered factory ran but could not construct its product.
    #[error("failed to construct backend '{kind}': {message}")]
    Construction {
        /// The backend kind whose factory failed.
        kind: String,
        /// What went wrong.
        message: String,
    },
}

impl PlatformError {
    /// Creates a construction error.
    pub fn construction(kind: impl Into<String>, message: impl Into<String>) -> Self {
        PlatformError::Construction {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
