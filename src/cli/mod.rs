pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use std::process::ExitCode;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    commands::handle_generate_command(&cli)
}
