//! Command-line interface for the `pwmanager` binary.

pub mod commands;
pub mod output;
pub mod types;

use std::sync::Arc;

use crate::adapters::{KeyringSecretStore, ProcessEnvironment, TracingAdvisorySink};
use crate::domain::models::Config;
use crate::services::CredentialResolver;

pub use types::{Cli, Commands};

/// Wire the resolver to the OS keyring, the process environment and `tracing`.
pub fn build_resolver(config: &Config) -> CredentialResolver {
    CredentialResolver::new(
        Arc::new(KeyringSecretStore::new(config.keyring.namespace.clone())),
        Arc::new(ProcessEnvironment),
        Arc::new(TracingAdvisorySink),
    )
    .with_delete_errors(config.delete_errors)
}

/// Report `err` on stderr and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        eprintln!("{}", serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1)
}
