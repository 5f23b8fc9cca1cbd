use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod add;
pub mod init;
pub mod list;
pub mod prompt;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let registry = cli.registry.as_deref();
    match cli.command {
        Command::Init(args) => init::run(args).await,
        Command::Add(args) => add::run(args, registry).await,
        Command::List(args) => list::run(args, registry).await,
    }
}
