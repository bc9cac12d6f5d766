/// Marker that opens and closes a fenced code block
pub const CODE_FENCE: &str = "```";

/// Prefixes (after trimming) of list items and block quotes, whose `#` is never a heading
const NON_HEADING_PREFIXES: [&str; 3] = ["* ", "- ", "> "];

/// Build the anchor a TOC link points to.
///
/// Lowercases the title one character at a time and turns every space into
/// `-`. Punctuation is kept and runs of hyphens are not collapsed.
pub fn make_anchor(title: &str) -> String {
    title
        .chars()
        .flat_map(lower_char)
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Context-free simple lowercase mapping: no final-sigma rule, and
/// U+0130 (dotted capital I) becomes a plain `i`
fn lower_char(c: char) -> std::char::ToLowercase {
    if c == '\u{130}' {
        'i'.to_lowercase()
    } else {
        c.to_lowercase()
    }
}

/// Whether a line toggles a fenced code block. Any info string after the fence is ignored.
pub fn is_code_fence(line: &str) -> bool {
    line.starts_with(CODE_FENCE)
}

/// Whether a line is a list item or a block quote
pub fn is_list_or_quote(line: &str) -> bool {
    let trimmed = line.trim();
    NON_HEADING_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}
