//! Application services built on the domain ports.

pub mod credential_resolver;

pub use credential_resolver::CredentialResolver;
