//! Error taxonomy for secret stores and credential resolution.

use thiserror::Error;

/// Failures reported by a secret store adapter.
///
/// `NoEntry` is the tagged "absent" signal; every other variant is a
/// malfunction of the backing store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store holds no value for the key
    #[error("No entry found in secret store")]
    NoEntry,

    /// The store rejected the key itself
    #[error("Invalid secret store key: {0}")]
    InvalidKey(String),

    /// The store could not be reached or unlocked
    #[error("Secret store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure
    #[error("Secret store backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by credential resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Neither the store nor the environment has a value for the service
    #[error("No password found for {0}")]
    NotFound(String),

    /// The service name was empty
    #[error("Invalid service name: {0:?} (must not be empty)")]
    InvalidServiceName(String),

    /// The secret store failed
    #[error("Secret store error: {0}")]
    Store(StoreError),
}

impl CredentialError {
    /// True when the credential is absent rather than unreadable.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for resolver operations
pub type CredentialResult<T> = Result<T, CredentialError>;
