use std::collections::HashMap;

use log::debug;

use crate::markdown::toc::parser::{classify_line, LineKind};
use crate::markdown::toc::TocOptions;
use crate::markdown::utils::make_anchor;

/// Header line of the generated table of contents
pub const TOC_HEADER: &str = "# 目录";

/// A single entry in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    /// Indentation depth, `level - min_level`
    pub depth: usize,
    /// Title as shown in the TOC, with a `-N` suffix for repeats
    pub title: String,
    pub anchor: String,
}

impl TocEntry {
    /// Render as a markdown list item
    pub fn to_markdown(&self) -> String {
        format!("{}- [{}](#{})", "  ".repeat(self.depth), self.title, self.anchor)
    }
}

/// Result of one pass over a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocDocument {
    /// Body lines, with duplicate headings rewritten when requested
    pub lines: Vec<String>,
    pub entries: Vec<TocEntry>,
    /// Number of body lines that were rewritten
    pub rewritten: usize,
}

impl TocDocument {
    /// The TOC block: header, blank line, one line per entry, trailing newline
    pub fn toc_block(&self) -> String {
        let entries: Vec<String> = self.entries.iter().map(TocEntry::to_markdown).collect();
        format!("{}\n\n{}\n", TOC_HEADER, entries.join("\n"))
    }

    /// TOC block followed by the body, every line newline-terminated
    pub fn render(&self) -> String {
        let mut out = self.toc_block();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Single forward pass over a document's lines.
///
/// Feed lines in order with [`TocBuilder::push_line`], then call
/// [`TocBuilder::finish`]. All state lives in the builder, so independent
/// documents can be processed with independent builders.
#[derive(Debug)]
pub struct TocBuilder {
    options: TocOptions,
    in_code_block: bool,
    title_count: HashMap<String, usize>,
    document: TocDocument,
}

impl TocBuilder {
    pub fn new(options: TocOptions) -> Self {
        Self {
            options,
            in_code_block: false,
            title_count: HashMap::new(),
            document: TocDocument::default(),
        }
    }

    /// Whether the pass is currently inside a fenced code block
    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    /// Process the next line of the document
    pub fn push_line(&mut self, line: impl Into<String>) {
        let line = line.into();

        let output = match classify_line(&line, self.in_code_block) {
            LineKind::Fence => {
                self.in_code_block = !self.in_code_block;
                None
            }
            LineKind::Text => None,
            LineKind::Heading(heading) if !self.options.levels.contains(heading.level) => None,
            LineKind::Heading(heading) => {
                let count = self.title_count.get(heading.title).copied().unwrap_or(0);

                let (title, rewritten) = if count > 0 {
                    let title = format!("{}-{}", heading.title, count + 1);
                    let rewritten = self
                        .options
                        .modify_title
                        .then(|| heading.render_with_title(&title));
                    (title, rewritten)
                } else {
                    (heading.title.to_string(), None)
                };

                let anchor = make_anchor(&title);
                self.document.entries.push(TocEntry {
                    level: heading.level,
                    depth: self.options.levels.depth(heading.level),
                    title,
                    anchor,
                });

                *self.title_count.entry(heading.title.to_string()).or_insert(0) += 1;
                rewritten
            }
        };

        match output {
            Some(rewritten) => {
                debug!("Rewrote duplicate heading '{}' as '{}'", line, rewritten);
                self.document.rewritten += 1;
                self.document.lines.push(rewritten);
            }
            None => self.document.lines.push(line),
        }
    }

    /// End the pass and return the document
    pub fn finish(self) -> TocDocument {
        if self.in_code_block() {
            debug!("Document ended inside an unterminated code block");
        }
        debug!(
            "Collected {} TOC entries from {} lines ({} rewritten)",
            self.document.entries.len(),
            self.document.lines.len(),
            self.document.rewritten
        );
        self.document
    }
}

/// Run a full pass over a sequence of lines
pub fn build_toc<I, S>(lines: I, options: &TocOptions) -> TocDocument
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = TocBuilder::new(options.clone());
    for line in lines {
        builder.push_line(line);
    }
    builder.finish()
}
