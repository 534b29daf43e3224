//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use stowage_cli::CliError;

fn main() {
    env_logger::init();
    match stowage_cli::run() {
        Ok(()) => {}
        // Clap renders help and version output itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("stowage: {err}");
            std::process::exit(1);
        }
    }
}
