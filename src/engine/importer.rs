//! Import reconstruction: portable document back into store mutations.
//!
//! Re-creates an exported tree under a target parent through sequential
//! `create_node` calls, parent before children, so that sibling order in the
//! store matches document order.

use std::fs;
use std::path::Path;

use crate::store::{BookmarkStoreTrait, ROOT_ID};
use crate::types::errors::{FormatError, ImportError};
use crate::types::export::{ExportDocument, ExportNode, EXPORT_VERSION};

/// Parses a JSON string into an export document.
///
/// Shape validation only — a missing `version`, `timestamp`, `bookmarks`, or
/// node `title` fails here. The version value itself is checked by
/// [`import_document`].
pub fn parse_document(json: &str) -> Result<ExportDocument, FormatError> {
    serde_json::from_str(json).map_err(|e| FormatError::Malformed(e.to_string()))
}

/// Reads and parses an export document from a file.
pub fn read_document_from_file<P: AsRef<Path>>(path: P) -> Result<ExportDocument, ImportError> {
    let json = fs::read_to_string(path).map_err(|e| ImportError::Io(e.to_string()))?;
    Ok(parse_document(&json)?)
}

/// Imports a whole document under `parent_id` (the reserved root when `None`).
///
/// The format version is checked before anything else; an unrecognized
/// version aborts the import with no store call made.
pub fn import_document<S: BookmarkStoreTrait>(
    store: &mut S,
    doc: &ExportDocument,
    parent_id: Option<&str>,
) -> Result<(), ImportError> {
    if doc.version != EXPORT_VERSION {
        return Err(FormatError::UnsupportedVersion(doc.version).into());
    }
    import_into(store, &doc.bookmarks, parent_id)
}

/// Re-creates `nodes` in document order under `parent_id` (the reserved root
/// when `None`).
///
/// A url-bearing entry becomes a single bookmark; any `children` it carries
/// are ignored. A folder is created first, then its children are imported
/// under the freshly assigned ID, strictly sequentially. `dateAdded` is not
/// restored — the store stamps its own creation time, so the format is lossy
/// on that field by design.
///
/// The first store failure aborts the remaining import. Nodes created by
/// earlier calls are not rolled back; re-running the import is the recovery
/// path.
pub fn import_into<S: BookmarkStoreTrait>(
    store: &mut S,
    nodes: &[ExportNode],
    parent_id: Option<&str>,
) -> Result<(), ImportError> {
    let parent = parent_id.unwrap_or(ROOT_ID);
    for node in nodes {
        match &node.url {
            Some(url) => {
                store.create_node(parent, &node.title, Some(url))?;
            }
            None => {
                let folder = store.create_node(parent, &node.title, None)?;
                import_into(store, &node.children, Some(&folder.id))?;
            }
        }
    }
    Ok(())
}
