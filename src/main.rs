mod cli;
mod shared;
#[cfg(test)]
mod testing;
mod threads;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use shared::env_var::EnvVars;
use threads::InventoryError;

fn main() -> anyhow::Result<ExitCode> {
    let Cli { inventory } = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout with status 0.
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            let _ = e.print();
            return Ok(ExitCode::FAILURE);
        }
    };

    let env = EnvVars::load();
    shared::logging::init(env.log_filter.as_deref());

    match threads::run(&inventory) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ InventoryError::NotFound(_)) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
