use serde::{Deserialize, Serialize};

/// Current version of the portable export format. Documents carrying any
/// other version are rejected by the importer before a single store call.
pub const EXPORT_VERSION: u32 = 1;

/// Portable, self-describing export of a bookmark tree.
///
/// Wire shape:
/// `{ "version": 1, "timestamp": <epoch-ms>, "bookmarks": [ ... ] }`
///
/// The reserved root is never an entry of its own; its children form the
/// top-level `bookmarks` sequence. Store identifiers are session-local and
/// deliberately absent from the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: u32,
    /// Export time in epoch milliseconds.
    pub timestamp: i64,
    pub bookmarks: Vec<ExportNode>,
}

/// One node of an export document. A node with a `url` is a bookmark, a node
/// without one is a folder; the `url` field is authoritative either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Creation time carried through export for reference only; import does
    /// not restore it.
    #[serde(rename = "dateAdded", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<i64>,
    /// Always serialized, `[]` for leaves, so the format stays stable.
    #[serde(default)]
    pub children: Vec<ExportNode>,
}

impl ExportNode {
    /// Creates a folder entry.
    pub fn folder(title: impl Into<String>, children: Vec<ExportNode>) -> Self {
        Self {
            title: title.into(),
            url: None,
            date_added: None,
            children,
        }
    }

    /// Creates a bookmark entry with an empty children sequence.
    pub fn bookmark(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            date_added: None,
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }
}
