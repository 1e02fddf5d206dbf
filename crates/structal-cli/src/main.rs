mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::debug;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Export(args) => commands::export::run(args),
    }
}
