//! Export serialization: live tree to portable document.
//!
//! Projects a materialized tree into an [`ExportDocument`] and renders it as
//! pretty-printed JSON. Read-only — nothing here touches the store.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::ExportError;
use crate::types::export::{ExportDocument, ExportNode, EXPORT_VERSION};
use crate::types::node::{BookmarkNode, NodeKind};

/// Returns the current UNIX timestamp in milliseconds.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Serializes the tree rooted at `root` into an export document.
///
/// The input root itself is never emitted — its children become the
/// document's top-level sequence. This is how the reserved root stays out of
/// exports, and it holds for any other subtree root passed in. Sibling order
/// is preserved throughout; leaves always get an empty `children` array.
pub fn serialize(root: &BookmarkNode) -> ExportDocument {
    ExportDocument {
        version: EXPORT_VERSION,
        timestamp: now_ms(),
        bookmarks: export_nodes(root.children()),
    }
}

/// Pre-order projection of a sibling sequence into export entries.
fn export_nodes(nodes: &[BookmarkNode]) -> Vec<ExportNode> {
    nodes
        .iter()
        .map(|node| match &node.kind {
            NodeKind::Bookmark { url } => ExportNode {
                title: node.title.clone(),
                url: Some(url.clone()),
                date_added: node.date_added,
                children: Vec::new(),
            },
            NodeKind::Folder { children } => ExportNode {
                title: node.title.clone(),
                url: None,
                date_added: node.date_added,
                children: export_nodes(children),
            },
        })
        .collect()
}

/// Renders a document as pretty-printed JSON (two-space indentation).
pub fn to_json(doc: &ExportDocument) -> Result<String, ExportError> {
    serde_json::to_string_pretty(doc).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Writes a document as JSON to the given path. No retry on failure.
pub fn export_to_file<P: AsRef<Path>>(doc: &ExportDocument, path: P) -> Result<(), ExportError> {
    let json = to_json(doc)?;
    fs::write(path, json).map_err(|e| ExportError::Io(e.to_string()))
}
