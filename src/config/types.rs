use std::path::PathBuf;
use serde::Deserialize;

use crate::config::defaults;
use crate::markdown::toc::{LevelRange, TocOptions};

/// Settings for one TOC run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TocConfig {
    /// Markdown file to read
    #[serde(default = "defaults::default_input")]
    pub input: PathBuf,

    /// File the TOC and body are written to
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Heading level range, e.g. `2-4`
    #[serde(default = "defaults::default_levels")]
    pub levels: String,

    /// Print the TOC to the console instead of writing the output file
    #[serde(default)]
    pub stdout: bool,

    /// Number duplicate headings in the body as well as in the TOC
    #[serde(default, alias = "modify-title")]
    pub modify_title: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            input: defaults::default_input(),
            output: defaults::default_output(),
            levels: defaults::default_levels(),
            stdout: false,
            modify_title: false,
        }
    }
}

impl TocConfig {
    /// Options for the TOC pass derived from this configuration
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            levels: LevelRange::parse(&self.levels),
            modify_title: self.modify_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TocConfig::default();
        assert_eq!(config.input, PathBuf::from("input.md"));
        assert_eq!(config.output, PathBuf::from("output.md"));
        assert_eq!(config.levels, "1-6");
        assert!(!config.stdout);
        assert!(!config.modify_title);
    }

    #[test]
    fn test_toc_options() {
        let config = TocConfig {
            levels: "2-4".to_string(),
            modify_title: true,
            ..TocConfig::default()
        };
        let options = config.toc_options();
        assert_eq!(options.levels, LevelRange { min: 2, max: 4 });
        assert!(options.modify_title);

        let config = TocConfig {
            levels: "garbage".to_string(),
            ..TocConfig::default()
        };
        assert_eq!(config.toc_options().levels, LevelRange::default());
    }
}
