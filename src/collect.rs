//! Tree-to-text formatting.
//!
//! Contract:
//! - One depth-first pass over a read-only tree; nothing is mutated or
//!   retained.
//! - Tags classified as block boundaries contribute a line break (or a blank
//!   line) at both their open and close positions; consecutive forced breaks
//!   collapse to the strongest one instead of stacking.
//! - Text fragments are whitespace-normalized before emission. Fragments on
//!   the same line are joined with at most one space, and punctuation that
//!   hugs the preceding word gets none. The spacing decision looks at the
//!   raw previous fragment, not the normalized one: a fragment that ended in
//!   whitespace in the source always earns a separator, even before
//!   punctuation.
//! - The result carries no leading/trailing whitespace and no `\r`.

use ego_tree::NodeRef;
use scraper::{Html, Node};

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Tags that open and close with a blank line.
fn forces_blank_line(name: &str) -> bool {
    is_heading(name)
        || matches!(
            name,
            "blockquote" | "dl" | "figure" | "ol" | "p" | "pre" | "title" | "ul"
        )
}

/// Tags that open and close with a single line break.
fn forces_line_break(name: &str) -> bool {
    matches!(
        name,
        "article"
            | "aside"
            | "br"
            | "dd"
            | "details"
            | "div"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "footer"
            | "form"
            | "header"
            | "hr"
            | "legend"
            | "li"
            | "main"
            | "nav"
            | "table"
            | "tr"
    )
}

fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn has_trailing_whitespace(text: &str) -> bool {
    text.chars().next_back().is_some_and(char::is_whitespace)
}

/// Punctuation that binds to the word before it, so no separator belongs in
/// between: `field` + `, and more` stays `field, and more`.
fn opens_with_clinging_punct(text: &str) -> bool {
    matches!(
        text.chars().next(),
        Some(',' | ':' | ';' | '.' | '!' | '?' | '"' | ')')
    )
}

fn ends_with_open_bracket(text: &str) -> bool {
    text.ends_with('(')
}

fn wants_space(text: &str, previous: &str) -> bool {
    if has_trailing_whitespace(previous) {
        // The raw source had visible spacing here; normalization dropped it,
        // so it must be restored even before clinging punctuation.
        return true;
    }
    !(opens_with_clinging_punct(text) || ends_with_open_bracket(previous))
}

fn space_between(text: &str, previous: &str) -> &'static str {
    if text.is_empty() {
        return " ";
    }
    if wants_space(text, previous) { " " } else { "" }
}

/// What the collector emitted most recently. Starts as `DoubleNewline` so a
/// document never opens with forced breaks. `Text` keeps the raw fragment,
/// not the normalized one, for the spacing decision that follows it.
#[derive(Debug)]
enum LastLine {
    Newline,
    DoubleNewline,
    Text(String),
}

/// Per-call traversal state: the emitted segments and the last-emission
/// marker. A text segment is the current logical line; inline fragments are
/// merged onto it. Break segments are literal `"\n"` / `"\n\n"` strings.
struct Collector {
    lines: Vec<String>,
    last: LastLine,
}

impl Collector {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            last: LastLine::DoubleNewline,
        }
    }

    fn visit(&mut self, node: NodeRef<'_, Node>) {
        match node.value() {
            Node::Element(element) => {
                let name = element.name();
                self.push_block_break(name);
                for child in node.children() {
                    self.visit(child);
                }
                self.push_block_break(name);
            }
            Node::Text(text) => self.push_text(&text.text),
            Node::Document | Node::Fragment => {
                for child in node.children() {
                    self.visit(child);
                }
            }
            _ => {}
        }
    }

    /// Emits the forced break for a block boundary, if one is due. The
    /// pre-update marker decides how much to emit: a blank line after a
    /// single break only needs one more `\n`, and after a blank line nothing
    /// is due at all.
    fn push_block_break(&mut self, tag: &str) {
        if matches!(self.last, LastLine::DoubleNewline) {
            return;
        }
        if forces_blank_line(tag) {
            let sep = if matches!(self.last, LastLine::Newline) {
                "\n"
            } else {
                "\n\n"
            };
            self.lines.push(sep.to_string());
            self.last = LastLine::DoubleNewline;
        } else if forces_line_break(tag) {
            if !matches!(self.last, LastLine::Newline) {
                self.lines.push("\n".to_string());
            }
            self.last = LastLine::Newline;
        }
    }

    /// Emits one raw text fragment. Whitespace-only fragments are dropped
    /// without touching the marker.
    fn push_text(&mut self, raw: &str) {
        let normalized = normalize_whitespace(raw);
        if normalized.is_empty() {
            return;
        }
        match &self.last {
            LastLine::Text(previous) => {
                let space = space_between(&normalized, previous);
                if let Some(line) = self.lines.last_mut() {
                    line.push_str(space);
                    line.push_str(&normalized);
                } else {
                    self.lines.push(normalized);
                }
            }
            _ => self.lines.push(normalized),
        }
        self.last = LastLine::Text(raw.to_string());
    }

    fn finish(self) -> String {
        let mut out = self.lines.concat();
        if out.contains('\r') {
            out = out.replace('\r', "\n");
        }

        // Trim both ends in place instead of reallocating.
        let end = out.trim_end().len();
        out.truncate(end);
        let lead = out.len() - out.trim_start().len();
        if lead > 0 {
            out.drain(..lead);
        }
        out
    }
}

/// Collects plain text from a parsed document.
///
/// - Trims and collapses every whitespace run inside text fragments.
/// - Joins inline fragments with single spaces, except where punctuation
///   hugs the preceding word or an opening bracket hugs what follows.
/// - Inserts `\n` around single-break tags (`div`, `li`, `br`, ...) and a
///   blank line around paragraph-level tags (`p`, headings, lists, ...),
///   at both the open and close boundary.
/// - Trims leading/trailing whitespace from the final output.
///
/// Text still present under non-content tags is emitted as-is; stripping
/// scripts, styles, and friends is the sanitizer's job.
pub fn collect_text(doc: &Html) -> String {
    let mut collector = Collector::new();
    collector.visit(doc.tree.root());
    collector.finish()
}
