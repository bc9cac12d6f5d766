use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::utils::{is_code_fence, is_list_or_quote};

lazy_static! {
    // ATX heading: one to six `#`, at least one ASCII whitespace, then the raw title
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{1,6})[\t\n\f\r ]+(.*)").unwrap();
}

/// A heading line found in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters (1-6)
    pub level: usize,
    /// Text after the whitespace that follows the `#` run, untrimmed
    pub title: &'a str,
}

impl Heading<'_> {
    /// Render a heading line at this level with a different title
    pub fn render_with_title(&self, title: &str) -> String {
        format!("{} {}", "#".repeat(self.level), title)
    }
}

/// What a single line means to the TOC pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens or closes a fenced code block
    Fence,
    /// Copied to the output as-is
    Text,
    /// A heading candidate
    Heading(Heading<'a>),
}

/// Match a line against the heading pattern
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING_REGEX.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let title = caps.get(2)?.as_str();
    Some(Heading { level, title })
}

/// Classify a line given whether the pass is currently inside a code block
pub fn classify_line(line: &str, in_code_block: bool) -> LineKind<'_> {
    if is_code_fence(line) {
        return LineKind::Fence;
    }

    if in_code_block || is_list_or_quote(line) {
        return LineKind::Text;
    }

    match parse_heading(line) {
        Some(heading) => LineKind::Heading(heading),
        None => LineKind::Text,
    }
}
