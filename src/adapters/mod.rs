//! Adapters implementing the domain ports.

pub mod advisory;
pub mod environment;
pub mod keyring_store;
pub mod memory;

pub use advisory::{CollectingAdvisorySink, TracingAdvisorySink};
pub use environment::{MapEnvironment, ProcessEnvironment};
pub use keyring_store::KeyringSecretStore;
pub use memory::InMemorySecretStore;
