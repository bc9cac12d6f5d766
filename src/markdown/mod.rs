pub mod toc;
pub mod utils;

pub use toc::{build_toc, TocDocument};
