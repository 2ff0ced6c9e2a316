//! Domain layer for pwmanager
//!
//! This module contains the credential model, the collaborator ports and
//! the error taxonomy shared by every adapter.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{CredentialError, StoreError};
