//! Secret store port.

use crate::domain::error::StoreError;

/// Port for a keyed secret store such as the OS keyring.
///
/// Implementations must be `Send + Sync`; the resolver imposes no locking
/// of its own and relies on the store's per-key atomicity.
///
/// # Absence
///
/// A missing key is reported as `Ok(None)` from [`SecretStore::get`] and as
/// [`StoreError::NoEntry`] from [`SecretStore::delete`]. Every other error
/// variant means the store itself failed.
pub trait SecretStore: Send + Sync {
    /// Look up the secret stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any existing entry.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the entry for `key`.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}
