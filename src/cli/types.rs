//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::delete::DeleteArgs;
use super::commands::get::GetArgs;
use super::commands::set::SetArgs;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "pwmanager")]
#[command(about = "Look up credentials in the OS keyring, falling back to environment variables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .pwmanager/config.yaml)
    #[arg(short, long, global = true, env = "PWMANAGER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the credential for a service
    Get(GetArgs),

    /// Store a credential in the keyring
    Set(SetArgs),

    /// Remove a credential from the keyring
    Delete(DeleteArgs),
}
