//! Plain-text extraction from HTML.
//!
//! Turns an HTML document, however malformed, into readable plain text:
//! non-content markup (scripts, styles, comments, forms, frames, embedded
//! objects) is stripped, then the remaining tree is linearized with
//! block-aware line breaks and inline-aware spacing, roughly the way a
//! browser would flow it.
//!
//! ```
//! let text = htmltext::extract("<body><h1>Title</h1><p>Some   <em>body</em> text.</p></body>");
//! assert_eq!(text, "Title\n\nSome body text.");
//! ```
//!
//! The pipeline is parse ([`parse_document`]) -> sanitize ([`clean`]) ->
//! format ([`collect_text`]); each stage is usable on its own.

pub mod collect;
pub mod parse;
pub mod sanitize;

pub use crate::collect::collect_text;
pub use crate::parse::parse_document;
pub use crate::sanitize::{CleanError, clean};

/// Extracts plain text from an HTML string.
///
/// Empty and whitespace-only input short-circuits to `""` without parsing.
/// Every other input produces some text (possibly empty): parsing repairs
/// what it can, and if the sanitizer refuses the tree the unclean tree is
/// formatted instead.
pub fn extract(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let mut doc = parse::parse_document(html);
    if let Err(err) = sanitize::clean(&mut doc) {
        log::warn!(
            target: "htmltext",
            "sanitizer refused the tree, extracting from the unclean document: {err}"
        );
    }
    collect::collect_text(&doc)
}
