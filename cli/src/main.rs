//! sectok binary.

use std::process::ExitCode;

use clap::Parser;
use sectok_cli::{logging, run, Cli};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.logging);
    debug!(command = cli.command.name(), "sectok starting");

    let stdin = std::io::stdin();
    match run(&cli, &mut stdin.lock()) {
        Ok(outcome) => {
            println!("{}", outcome.stdout);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
