mod cli;
mod commands;
mod config;
mod env;
mod error;
mod fs;
mod install;
mod output;
mod placement;
mod project;
mod registry;
mod resolve;
mod transform;

use clap::Parser;
use error::ErrorFormatter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err.to_rich()));
        std::process::exit(1);
    }
}
