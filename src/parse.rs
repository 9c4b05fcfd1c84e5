//! Tolerant parsing front end.
//!
//! html5ever repairs any byte sequence into a document tree, so there is no
//! failure path here: empty, truncated, or nonsense input still yields a
//! document with an `html` root. This wrapper owns input hygiene; NUL bytes
//! are dropped before parsing so they cannot surface as U+FFFD replacement
//! characters in extracted text.

use memchr::memchr;
use scraper::Html;

/// Parses an HTML document, repairing malformed markup along the way.
pub fn parse_document(html: &str) -> Html {
    let trimmed = html.trim();
    let doc = if memchr(0, trimmed.as_bytes()).is_some() {
        Html::parse_document(&trimmed.replace('\0', ""))
    } else {
        Html::parse_document(trimmed)
    };
    if !doc.errors.is_empty() {
        log::trace!(
            target: "htmltext.parse",
            "recovered from {} parse errors",
            doc.errors.len()
        );
    }
    doc
}
