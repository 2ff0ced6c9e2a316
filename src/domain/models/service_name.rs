//! Credential lookup key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::CredentialError;

/// Identifier of a credential, e.g. `github`.
///
/// The raw form addresses the secret store; the uppercased form
/// ([`ServiceName::fallback_key`]) names the environment variable read
/// when the store has no entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl ServiceName {
    /// Parse a service name, rejecting only the empty string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CredentialError::InvalidServiceName(raw));
        }
        Ok(Self(raw))
    }

    /// Raw form, used as the secret store key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Environment variable name used for the fallback lookup.
    pub fn fallback_key(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServiceName {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}
