use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use dirtab_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "dirtab",
    version,
    about = "Directory listings as sortable tables",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::List(args) => commands::list::run(args),
        Command::History(args) => commands::history::run(args),
    }
}
