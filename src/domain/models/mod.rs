//! Domain models: service names, secrets, resolution results and configuration.

pub mod config;
pub mod resolution;
pub mod secret;
pub mod service_name;

pub use config::{
    Config, DeleteErrorPolicy, KeyringConfig, LogFormat, LoggingConfig, RotationPolicy,
};
pub use resolution::{Advisory, CredentialSource, Resolved};
pub use secret::SecretValue;
pub use service_name::ServiceName;
