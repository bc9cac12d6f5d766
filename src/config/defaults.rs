use std::path::PathBuf;

/// Default input Markdown file
pub fn default_input() -> PathBuf {
    PathBuf::from("input.md")
}

/// Default output Markdown file
pub fn default_output() -> PathBuf {
    PathBuf::from("output.md")
}

/// Default heading level range
pub fn default_levels() -> String {
    "1-6".to_string()
}
