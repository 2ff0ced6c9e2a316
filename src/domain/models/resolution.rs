//! Outcomes of a credential lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::secret::SecretValue;
use super::service_name::ServiceName;

/// Which tier produced a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredentialSource {
    /// The secret store (OS keyring)
    Store,
    /// The process environment, under the given variable name
    Environment {
        /// Variable that held the value
        variable: String,
    },
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => f.write_str("keyring"),
            Self::Environment { variable } => write!(f, "environment ({variable})"),
        }
    }
}

/// A successfully resolved credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Service that was looked up
    pub service: ServiceName,
    /// The secret
    pub value: SecretValue,
    /// Tier that produced the secret
    pub source: CredentialSource,
}

impl Resolved {
    /// True when the value came from the environment fallback.
    pub const fn from_environment(&self) -> bool {
        matches!(self.source, CredentialSource::Environment { .. })
    }
}

/// Non-fatal diagnostic emitted when a less secure path was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The secret store had no entry; the environment variable was used
    EnvironmentFallback {
        /// Service that was looked up
        service: ServiceName,
        /// Environment variable that supplied the value
        variable: String,
    },
}

impl Advisory {
    /// Human-readable warning text.
    pub fn message(&self) -> String {
        match self {
            Self::EnvironmentFallback { variable, .. } => {
                format!("Using environment variable {variable} instead of keyring")
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
