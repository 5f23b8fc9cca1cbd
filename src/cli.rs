use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{add, init, list};

#[derive(Debug, Parser)]
#[command(name = "apex", version)]
#[command(about = "APEX Design System component installer", long_about = None)]
pub struct Cli {
    /// Registry directory (defaults to $APEX_REGISTRY, then the executable's directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub registry: Option<PathBuf>,

    /// Show detailed error output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize APEX Design System in your project
    Init(init::Args),

    /// Add components to your project
    Add(add::Args),

    /// List available components
    List(list::Args),
}
