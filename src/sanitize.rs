//! Non-content markup removal.
//!
//! Contract:
//! - Detaches comments, processing instructions, and non-content element
//!   subtrees (scripts, styles, resource links, meta, form controls, frames,
//!   embedded objects) from a parsed tree, in place.
//! - Page structure survives: `head`, `title`, block containers, anchors,
//!   `fieldset`/`legend`, and every attribute stay where they are.
//! - Only the topmost matching node is recorded; its descendants go with it.
//! - Refuses a document with no element root and leaves it untouched, so the
//!   caller can decide to extract from the unclean tree instead.

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum CleanError {
    NoElementRoot,
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::NoElementRoot => write!(f, "document has no element root"),
        }
    }
}

impl std::error::Error for CleanError {}

/// Elements whose whole subtree is non-content: executable or presentational
/// payloads, resource references, form controls, and embedded/frame content.
fn is_stripped_element(name: &str) -> bool {
    matches!(
        name,
        "script"
            | "style"
            | "link"
            | "meta"
            | "form"
            | "button"
            | "input"
            | "select"
            | "option"
            | "optgroup"
            | "textarea"
            | "frame"
            | "frameset"
            | "iframe"
            | "noframes"
            | "applet"
            | "embed"
            | "object"
            | "param"
    )
}

fn mark_removable(node: NodeRef<'_, Node>, doomed: &mut Vec<NodeId>) {
    for child in node.children() {
        match child.value() {
            Node::Comment(_) | Node::ProcessingInstruction(_) => doomed.push(child.id()),
            Node::Element(element) if is_stripped_element(element.name()) => {
                doomed.push(child.id());
            }
            _ => mark_removable(child, doomed),
        }
    }
}

/// Strips non-content nodes from the document, in place.
///
/// Doomed nodes are collected before any mutation, then detached by id; a
/// node that disappeared with an earlier subtree is skipped.
pub fn clean(doc: &mut Html) -> Result<(), CleanError> {
    if !doc.tree.root().children().any(|node| node.value().is_element()) {
        return Err(CleanError::NoElementRoot);
    }

    let mut doomed = Vec::new();
    mark_removable(doc.tree.root(), &mut doomed);
    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
    Ok(())
}
