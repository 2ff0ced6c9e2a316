//! Implementation of the `pwmanager set` command.

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};
use clap::Args;
use console::Term;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::services::CredentialResolver;

/// Arguments for `pwmanager set`
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Service name
    pub service: String,

    /// Secret value; read from stdin (or prompted for on a terminal) when omitted
    pub value: Option<String>,
}

/// Result of a successful set
#[derive(Debug, Serialize)]
pub struct SetOutput {
    /// Service whose entry was written
    pub service: String,
    /// Always true on success
    pub stored: bool,
}

impl CommandOutput for SetOutput {
    fn to_human(&self) -> String {
        format!("Stored credential for {}", self.service)
    }
}

/// Store a secret, taking it from the argument, a prompt or stdin.
pub fn execute(args: SetArgs, resolver: &CredentialResolver, json_mode: bool) -> Result<()> {
    let value = match args.value {
        Some(value) => value,
        None if io::stdin().is_terminal() => prompt_secret(&args.service)?,
        None => read_secret_from(io::stdin().lock())?,
    };

    resolver
        .set(&args.service, &value)
        .with_context(|| format!("Failed to store credential '{}'", args.service))?;

    output(
        &SetOutput {
            service: args.service,
            stored: true,
        },
        json_mode,
    );
    Ok(())
}

fn prompt_secret(service: &str) -> Result<String> {
    let term = Term::stderr();
    term.write_str(&format!("Password for {service}: "))
        .context("Failed to write prompt")?;
    term.read_secure_line().context("Failed to read password")
}

/// Read a single line, dropping the trailing newline.
pub fn read_secret_from(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read secret from stdin")?;
    if read == 0 {
        anyhow::bail!("No secret provided on stdin");
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}
