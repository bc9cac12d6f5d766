use clap::CommandFactory;
use log::{debug, error, info};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::cli::types::Cli;
use crate::config::{self, TocConfig};
use crate::markdown::{build_toc, TocDocument};
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs;

/// How a generate run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The TOC was printed or written
    Generated,
    /// The input file does not exist; usage is shown and the run still succeeds
    MissingInput,
    /// Config, open, read, create or write failure
    Failed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Generated | Outcome::MissingInput)
    }

    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Handle the generate command
pub fn handle_generate_command(cli: &Cli) -> ExitCode {
    let stdout = io::stdout();
    let outcome = run_generate(cli, Path::new("."), &mut stdout.lock());

    if outcome == Outcome::MissingInput {
        let _ = Cli::command().print_help();
    }

    outcome.exit_code()
}

/// Load the configuration from `base_dir`, apply the command-line flags and
/// generate, reporting failures through the log
pub fn run_generate<W: Write>(cli: &Cli, base_dir: &Path, console: &mut W) -> Outcome {
    let mut config = match config::load_config(base_dir, cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Outcome::Failed;
        }
    };
    cli.apply_to(&mut config);

    match generate(&config, console) {
        Ok(_) => Outcome::Generated,
        Err(e) => {
            let missing_input = e
                .downcast_ref::<MdtocError>()
                .is_some_and(MdtocError::is_missing_input);

            if missing_input {
                error!("{}. Specify an existing file or see the usage below:", e);
                Outcome::MissingInput
            } else {
                error!("Failed to generate TOC: {}", e);
                Outcome::Failed
            }
        }
    }
}

/// Read the input, build the TOC, and either print it to `console` or write
/// the TOC and body to the output file
pub fn generate<W: Write>(config: &TocConfig, console: &mut W) -> BoxResult<TocDocument> {
    let options = config.toc_options();
    info!(
        "Generating TOC for {} (levels {})",
        config.input.display(),
        options.levels
    );

    let lines = fs::read_lines(&config.input)?;
    let document = build_toc(lines, &options);
    for entry in &document.entries {
        debug!("h{} {} -> #{}", entry.level, entry.title, entry.anchor);
    }

    if config.stdout {
        console
            .write_all(document.toc_block().as_bytes())
            .and_then(|_| console.flush())
            .map_err(MdtocError::from)?;
        return Ok(document);
    }

    fs::write_file(&config.output, &document.render())?;

    info!("TOC generated at {}", config.output.display());
    if config.modify_title {
        info!(
            "Numbered {} duplicate heading(s) in the body as -2, -3, ... to match the TOC",
            document.rewritten
        );
    }

    Ok(document)
}
