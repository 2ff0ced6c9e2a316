//! OS keyring secret store.
//!
//! Every credential lives under a single keyring service (the namespace,
//! `system` by default) with the service name as the account. Backends are
//! the macOS Keychain, the Windows Credential Manager and, on Linux, the
//! Secret Service (GNOME Keyring, KWallet), so entries persist across
//! reboots and Python `keyring` entries stored as `("system", name)` are
//! shared.

use crate::domain::error::StoreError;
use crate::domain::ports::SecretStore;

/// [`SecretStore`] backed by the platform credential store.
#[derive(Debug, Clone)]
pub struct KeyringSecretStore {
    namespace: String,
}

impl KeyringSecretStore {
    /// Store entries under the keyring service `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Keyring service all entries live under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, StoreError> {
        keyring::Entry::new(&self.namespace, key).map_err(map_keyring_error)
    }
}

impl Default for KeyringSecretStore {
    fn default() -> Self {
        Self::new("system")
    }
}

impl SecretStore for KeyringSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(map_keyring_error(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entry(key)?
            .set_password(value)
            .map_err(map_keyring_error)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entry(key)?
            .delete_credential()
            .map_err(map_keyring_error)
    }
}

fn map_keyring_error(err: keyring::Error) -> StoreError {
    match err {
        keyring::Error::NoEntry => StoreError::NoEntry,
        keyring::Error::NoStorageAccess(cause) => StoreError::Unavailable(cause.to_string()),
        keyring::Error::TooLong(attr, limit) => {
            StoreError::InvalidKey(format!("{attr} exceeds {limit} characters"))
        }
        keyring::Error::Invalid(attr, reason) => {
            StoreError::InvalidKey(format!("{attr}: {reason}"))
        }
        other => StoreError::Backend(other.to_string()),
    }
}
