//! Error types for registry operations.

use thiserror::Error;

/// Errors produced by registry construction and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A key appeared more than once, either within a batch or against
    /// entries that were already registered. Duplicate keys are a setup
    /// defect, never a silent overwrite.
    #[error("duplicate key in registry '{table}': {key}")]
    DuplicateKey {
        /// Name of the table that rejected the registration.
        table: &'static str,
        /// The offending key.
        key: String,
    },

    /// A lookup failed. Lookups are total or fail explicitly; callers that
    /// can tolerate absence should use `find` instead.
    #[error("key not found in registry '{table}': {key}")]
    NotFound {
        /// Name of the table that was queried.
        table: &'static str,
        /// The key that was requested.
        key: String,
    },
}

impl RegistryError {
    /// Creates a duplicate-key error.
    pub fn duplicate(table: &'static str, key: impl Into<String>) -> Self {
        RegistryError::DuplicateKey {
            table,
            key: key.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(table: &'static str, key: impl Into<String>) -> Self {
        RegistryError::NotFound {
            table,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::duplicate("entry_points", "frame.commit");
        assert_eq!(
            err.to_string(),
            "duplicate key in registry 'entry_points': frame.commit"
        );

        let err = RegistryError::not_found("entry_points", "frame.detach");
        assert_eq!(
            err.to_string(),
            "key not found in registry 'entry_points': frame.detach"
        );
    }
}
