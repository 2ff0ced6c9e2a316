//! Port trait definitions (Hexagonal Architecture)
//!
//! The credential resolver talks to the outside world only through these
//! traits:
//! - SecretStore: keyed get/set/delete against a secure store
//! - EnvironmentReader: read-only lookup of environment variables
//! - AdvisorySink: side channel for non-fatal diagnostics
//!
//! Adapters in `crate::adapters` implement them for the OS keyring, the
//! process environment and `tracing`, plus in-memory variants for tests.

pub mod advisory_sink;
pub mod environment;
pub mod secret_store;

pub use advisory_sink::AdvisorySink;
pub use environment::EnvironmentReader;
pub use secret_store::SecretStore;
