//! Implementation of the `pwmanager get` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{CredentialSource, Resolved};
use crate::services::CredentialResolver;

/// Arguments for `pwmanager get`
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Service name (the environment fallback uses its uppercased form)
    pub service: String,
}

/// Resolved credential as printed by `get`
#[derive(Debug, Serialize)]
pub struct GetOutput {
    /// Requested service
    pub service: String,
    /// Plaintext secret
    pub value: String,
    /// Tier the secret came from
    pub source: CredentialSource,
}

impl From<Resolved> for GetOutput {
    fn from(resolved: Resolved) -> Self {
        Self {
            service: resolved.service.to_string(),
            value: resolved.value.into_inner(),
            source: resolved.source,
        }
    }
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        self.value.clone()
    }
}

/// Resolve the requested service and print the secret.
pub fn execute(args: GetArgs, resolver: &CredentialResolver, json_mode: bool) -> Result<()> {
    let resolved = resolver
        .resolve(&args.service)
        .with_context(|| format!("Failed to get credential '{}'", args.service))?;

    output(&GetOutput::from(resolved), json_mode);
    Ok(())
}
