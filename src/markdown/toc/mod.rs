mod generator;
mod levels;
mod parser;

pub use generator::{build_toc, TocDocument};
pub use levels::LevelRange;

/// Options for table of contents generation
#[derive(Debug, Clone, Default)]
pub struct TocOptions {
    /// Heading levels to include
    pub levels: LevelRange,
    /// Whether duplicate headings are renamed in the body as well as the TOC
    pub modify_title: bool,
}
