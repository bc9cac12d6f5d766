use std::process::ExitCode;

// Module declarations
mod cli;
mod config;
mod markdown;
mod utils;

fn main() -> ExitCode {
    // Run the CLI
    cli::run()
}
