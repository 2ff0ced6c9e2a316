//! pwmanager CLI entry point.

use anyhow::Result;
use clap::Parser;

use pwmanager::cli::{self, commands, Cli, Commands};
use pwmanager::infrastructure::logging::LoggerImpl;
use pwmanager::ConfigLoader;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        cli::handle_error(&err, json);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging)?;
    let resolver = cli::build_resolver(&config);

    match cli.command {
        Commands::Get(args) => commands::get::execute(args, &resolver, cli.json),
        Commands::Set(args) => commands::set::execute(args, &resolver, cli.json),
        Commands::Delete(args) => commands::delete::execute(args, &resolver, cli.json),
    }
}
