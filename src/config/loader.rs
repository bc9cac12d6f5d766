use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::TocConfig;
use crate::utils::error::{BoxResult, MdtocError};
use crate::utils::fs::is_file;

/// Configuration file names looked up when none is given explicitly
const CONFIG_FILES: [&str; 4] = [".mdtoc.yml", ".mdtoc.yaml", ".mdtoc.toml", ".mdtoc.json"];

/// Load the configuration.
///
/// With an explicit `config_file` that file must exist. Without one, the
/// first of [`CONFIG_FILES`] found in `base_dir` is used, and if none exists
/// the defaults are returned.
pub fn load_config<P: AsRef<Path>>(base_dir: P, config_file: Option<&Path>) -> BoxResult<TocConfig> {
    let config_path = match config_file {
        Some(path) => {
            if !is_file(path) {
                return Err(MdtocError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path.to_path_buf())
        }
        None => find_default_config_file(&base_dir),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            TocConfig::default()
        }
    };

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in a directory
fn find_default_config_file<P: AsRef<Path>>(base_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.as_ref().join(name))
        .find(|path| is_file(path))
}

/// Read and parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<TocConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        MdtocError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(TocConfig::default());
    }

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let config: TocConfig = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
            MdtocError::Config(format!(
                "Failed to parse YAML configuration ({}): {}",
                path.display(),
                e
            ))
        })?,
        "toml" => toml::from_str(&content).map_err(|e| {
            MdtocError::Config(format!(
                "Failed to parse TOML configuration ({}): {}",
                path.display(),
                e
            ))
        })?,
        "json" => serde_json::from_str(&content).map_err(|e| {
            MdtocError::Config(format!(
                "Failed to parse JSON configuration ({}): {}",
                path.display(),
                e
            ))
        })?,
        other => {
            return Err(MdtocError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))
            .into());
        }
    };

    Ok(config)
}
