use clap::Parser;
use std::path::PathBuf;

use crate::config::TocConfig;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Generate a table of contents for a Markdown file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input Markdown file (defaults to input.md)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output Markdown file (defaults to output.md)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Heading level range to include, e.g. 1-4 (defaults to 1-6)
    #[arg(short, long, value_name = "RANGE")]
    pub levels: Option<String>,

    /// Print the TOC to the console instead of writing the output file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,

    /// Number duplicate headings in the body as -2, -3, ... to match the TOC
    #[arg(long, default_value_t = false)]
    pub modify_title: bool,

    /// Configuration file (defaults to .mdtoc.yml, .mdtoc.yaml, .mdtoc.toml or .mdtoc.json if present)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Overlay the flags given on the command line onto a loaded configuration
    pub fn apply_to(&self, config: &mut TocConfig) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(levels) = &self.levels {
            config.levels = levels.clone();
        }
        config.stdout |= self.stdout;
        config.modify_title |= self.modify_title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "mdtoc", "-i", "doc.md", "-o", "out.md", "--levels", "2-4", "--modify-title", "-g",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("doc.md")));
        assert_eq!(cli.output, Some(PathBuf::from("out.md")));
        assert_eq!(cli.levels.as_deref(), Some("2-4"));
        assert!(cli.modify_title);
        assert!(!cli.stdout);
        assert!(cli.debug);
    }

    #[test]
    fn test_apply_overrides_config() {
        let mut config = TocConfig {
            input: PathBuf::from("from-config.md"),
            levels: "2-3".to_string(),
            modify_title: true,
            ..TocConfig::default()
        };

        let cli = Cli::try_parse_from(["mdtoc", "--levels", "1-4", "--stdout"]).unwrap();
        cli.apply_to(&mut config);

        assert_eq!(config.input, PathBuf::from("from-config.md"));
        assert_eq!(config.output, PathBuf::from("output.md"));
        assert_eq!(config.levels, "1-4");
        assert!(config.stdout);
        // a flag that is not given does not switch a configured option off
        assert!(config.modify_title);
    }
}
