//! pwmanager - credential lookup with an environment fallback
//!
//! Secrets are read from the OS keyring; when the keyring has no entry for
//! a service, the environment variable named by the uppercased service
//! name is used instead and an advisory is raised.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, error taxonomy and port traits
//! - **Service Layer** (`services`): the credential resolver
//! - **Adapters** (`adapters`): keyring, environment and advisory implementations
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pwmanager::adapters::{CollectingAdvisorySink, InMemorySecretStore, MapEnvironment};
//! use pwmanager::CredentialResolver;
//!
//! let resolver = CredentialResolver::new(
//!     Arc::new(InMemorySecretStore::with_entries([("github", "tok123")])),
//!     Arc::new(MapEnvironment::from_pairs([("GITLAB", "envtok")])),
//!     Arc::new(CollectingAdvisorySink::new()),
//! );
//!
//! assert_eq!(resolver.get("github").unwrap().expose(), "tok123");
//! assert_eq!(resolver.get("gitlab").unwrap().expose(), "envtok");
//! assert!(resolver.get("bitbucket").is_err());
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Advisory, Config, CredentialSource, DeleteErrorPolicy, Resolved, SecretValue, ServiceName,
};
pub use domain::ports::{AdvisorySink, EnvironmentReader, SecretStore};
pub use domain::{CredentialError, StoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::CredentialResolver;
