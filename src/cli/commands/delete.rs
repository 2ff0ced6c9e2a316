//! Implementation of the `pwmanager delete` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::services::CredentialResolver;

/// Arguments for `pwmanager delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Service name
    pub service: String,
}

/// Result of a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    /// Service whose entry was removed
    pub service: String,
    /// Always true on success
    pub deleted: bool,
}

impl CommandOutput for DeleteOutput {
    fn to_human(&self) -> String {
        format!("Deleted credential for {}", self.service)
    }
}

/// Remove the keyring entry for the requested service.
pub fn execute(args: DeleteArgs, resolver: &CredentialResolver, json_mode: bool) -> Result<()> {
    resolver
        .delete(&args.service)
        .with_context(|| format!("Failed to delete credential '{}'", args.service))?;

    output(
        &DeleteOutput {
            service: args.service,
            deleted: true,
        },
        json_mode,
    );
    Ok(())
}
