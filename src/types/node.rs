use serde::Serialize;

/// A fully classified bookmark tree node as returned by the store.
///
/// Whether a node is a folder or a bookmark is decided once, when the node is
/// read: a node carrying a url is a bookmark (leaf) regardless of anything
/// else, a node without one is a folder even when it has no children. That
/// decision is encoded in [`NodeKind`] so later traversals never re-derive it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkNode {
    /// Store-assigned identifier. The reserved root keeps a fixed sentinel id.
    pub id: String,
    /// Display title; may be empty.
    pub title: String,
    /// Creation time in epoch milliseconds. `None` on nodes that have not
    /// been committed to a store yet.
    pub date_added: Option<i64>,
    pub kind: NodeKind,
}

/// Folder/bookmark discriminator. Bookmarks carry no children at all —
/// any children on a url-bearing source node are not semantically meaningful.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Folder { children: Vec<BookmarkNode> },
    Bookmark { url: String },
}

impl BookmarkNode {
    /// Creates a folder node with the given children, in order.
    pub fn new_folder(
        id: impl Into<String>,
        title: impl Into<String>,
        children: Vec<BookmarkNode>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date_added: None,
            kind: NodeKind::Folder { children },
        }
    }

    /// Creates a bookmark leaf node.
    pub fn new_bookmark(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date_added: None,
            kind: NodeKind::Bookmark { url: url.into() },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// The bookmark's url, or `None` for folders.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Bookmark { url } => Some(url),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Ordered children; empty for bookmarks.
    pub fn children(&self) -> &[BookmarkNode] {
        match &self.kind {
            NodeKind::Folder { children } => children,
            NodeKind::Bookmark { .. } => &[],
        }
    }
}

/// One entry of the flattened search projection: a single bookmark leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatBookmark {
    pub title: String,
    pub url: String,
}
