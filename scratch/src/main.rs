//! Run a built-in challenge body's `solution` with its fixed sample
//! arguments and print the result.

mod case;
mod challenges;
mod cli;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harness::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "scratch",
    version,
    about = "Invoke a challenge solution with fixed sample arguments"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the ids of the built-in cases.
    List,
    /// Invoke the case's `solution` and print its result.
    Run { case_id: String },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::List => cli::list_cases().map(|()| exit_codes::OK),
        Command::Run { case_id } => cli::run_case_by_id(&case_id),
    }
}
