//! Flat projection: every bookmark leaf in document order.
//!
//! Backs the search view — folders are omitted entirely, and downstream
//! filtering works on the flat sequence.

use crate::types::node::{BookmarkNode, FlatBookmark, NodeKind};

/// Projects the tree rooted at `root` into its bookmark leaves, pre-order.
///
/// A bookmark with an empty title falls back to its url as the display
/// title. Pure and idempotent — two calls on the same tree return identical
/// sequences.
pub fn flatten(root: &BookmarkNode) -> Vec<FlatBookmark> {
    let mut result = Vec::new();
    collect(root, &mut result);
    result
}

fn collect(node: &BookmarkNode, result: &mut Vec<FlatBookmark>) {
    match &node.kind {
        NodeKind::Bookmark { url } => {
            let title = if node.title.is_empty() {
                url.clone()
            } else {
                node.title.clone()
            };
            result.push(FlatBookmark {
                title,
                url: url.clone(),
            });
        }
        NodeKind::Folder { children } => {
            for child in children {
                collect(child, result);
            }
        }
    }
}

/// Case-insensitive substring filter over a flattened sequence, matching on
/// title or url. Order of the input is preserved. This is the search box
/// behavior; `flatten` itself never filters.
pub fn filter<'a>(entries: &'a [FlatBookmark], query: &str) -> Vec<&'a FlatBookmark> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&query)
                || entry.url.to_lowercase().contains(&query)
        })
        .collect()
}
