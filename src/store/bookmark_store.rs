//! SQLite-backed bookmark store for Treemark.
//!
//! Implements `BookmarkStoreTrait` — node creation, materialized tree reads,
//! and single-node removal, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::StoreError;
use crate::types::node::{BookmarkNode, NodeKind};

/// Identifier of the reserved root folder. Seeded by the schema migrations,
/// never removed, never an entry of an export document.
pub const ROOT_ID: &str = "root________";

/// Returns true when the given ID names the reserved root.
///
/// The engine's importer (default parent) and remover (skip rule) both go
/// through this predicate instead of comparing identifiers inline.
pub fn is_reserved_root(id: &str) -> bool {
    id == ROOT_ID
}

/// Trait defining the store operations the tree engine drives.
///
/// Every call is individually atomic; multi-node operations built on top of
/// this trait (import, recursive removal) are not.
pub trait BookmarkStoreTrait {
    /// Returns the reserved root with all descendants materialized.
    fn fetch_tree(&self) -> Result<BookmarkNode, StoreError>;
    /// Returns the node with the given ID and all its descendants.
    fn fetch_subtree(&self, id: &str) -> Result<BookmarkNode, StoreError>;
    /// Creates a node under `parent_id`, appended after its siblings.
    /// A `url` makes it a bookmark, `None` makes it a folder.
    /// Returns the created node with its fresh store-assigned ID.
    fn create_node(
        &mut self,
        parent_id: &str,
        title: &str,
        url: Option<&str>,
    ) -> Result<BookmarkNode, StoreError>;
    /// Removes a single node. Fails on the reserved root and on folders
    /// that still have children.
    fn remove_node(&mut self, id: &str) -> Result<(), StoreError>;
    /// Returns a single node without its children (a folder comes back with
    /// an empty child sequence).
    fn get_node(&self, id: &str) -> Result<BookmarkNode, StoreError>;
}

/// Bookmark store backed by a SQLite connection.
pub struct BookmarkStore<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkStore<'a> {
    /// Creates a new `BookmarkStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Computes the next position value under the given parent.
    fn next_position(&self, parent_id: &str) -> Result<i32, StoreError> {
        self.conn
            .query_row(
                "SELECT COALESCE(MAX(position), -1) + 1 FROM nodes WHERE parent_id = ?1",
                params![parent_id],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }

    /// Reads a node's url column, or `None` when no such row exists.
    /// Distinguishes "missing node" from "node without a url" (a folder).
    fn url_of(&self, id: &str) -> Result<Option<Option<String>>, StoreError> {
        self.conn
            .query_row("SELECT url FROM nodes WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }

    /// Reads a single node row into a shallow `BookmarkNode`. The url column
    /// is authoritative for classification; a folder starts with no children.
    fn row_to_node(row: &rusqlite::Row) -> rusqlite::Result<BookmarkNode> {
        let id: String = row.get(0)?;
        let title: String = row.get(1)?;
        let url: Option<String> = row.get(2)?;
        let date_added: i64 = row.get(3)?;
        let kind = match url {
            Some(url) => NodeKind::Bookmark { url },
            None => NodeKind::Folder {
                children: Vec::new(),
            },
        };
        Ok(BookmarkNode {
            id,
            title,
            date_added: Some(date_added),
            kind,
        })
    }

    /// Loads the ordered children of a folder, descending into sub-folders.
    fn load_children(&self, parent_id: &str) -> Result<Vec<BookmarkNode>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, url, date_added FROM nodes \
                 WHERE parent_id = ?1 ORDER BY position",
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(params![parent_id], Self::row_to_node)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut children = Vec::new();
        for row in rows {
            let mut node = row.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            if node.is_folder() {
                node.kind = NodeKind::Folder {
                    children: self.load_children(&node.id)?,
                };
            }
            children.push(node);
        }
        Ok(children)
    }
}

impl<'a> BookmarkStoreTrait for BookmarkStore<'a> {
    fn fetch_tree(&self) -> Result<BookmarkNode, StoreError> {
        self.fetch_subtree(ROOT_ID)
    }

    fn fetch_subtree(&self, id: &str) -> Result<BookmarkNode, StoreError> {
        let mut node = self.get_node(id)?;
        if node.is_folder() {
            node.kind = NodeKind::Folder {
                children: self.load_children(id)?,
            };
        }
        Ok(node)
    }

    fn create_node(
        &mut self,
        parent_id: &str,
        title: &str,
        url: Option<&str>,
    ) -> Result<BookmarkNode, StoreError> {
        // Parent must exist and be a folder
        match self.url_of(parent_id)? {
            None => return Err(StoreError::ParentNotFound(parent_id.to_string())),
            Some(Some(_)) => return Err(StoreError::NotAFolder(parent_id.to_string())),
            Some(None) => {}
        }

        let id = Uuid::new_v4().to_string();
        let now = Self::now_ms();
        let position = self.next_position(parent_id)?;

        self.conn
            .execute(
                "INSERT INTO nodes (id, parent_id, title, url, position, date_added) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, parent_id, title, url, position, now],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let kind = match url {
            Some(url) => NodeKind::Bookmark {
                url: url.to_string(),
            },
            None => NodeKind::Folder {
                children: Vec::new(),
            },
        };
        Ok(BookmarkNode {
            id,
            title: title.to_string(),
            date_added: Some(now),
            kind,
        })
    }

    fn remove_node(&mut self, id: &str) -> Result<(), StoreError> {
        if is_reserved_root(id) {
            return Err(StoreError::ReservedRoot);
        }

        match self.url_of(id)? {
            None => return Err(StoreError::NotFound(id.to_string())),
            Some(None) => {
                // Folder removal is defined only on empty folders
                let child_count: i64 = self
                    .conn
                    .query_row(
                        "SELECT COUNT(*) FROM nodes WHERE parent_id = ?1",
                        params![id],
                        |row| row.get(0),
                    )
                    .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
                if child_count > 0 {
                    return Err(StoreError::NonEmptyFolder(id.to_string()));
                }
            }
            Some(Some(_)) => {}
        }

        let affected = self
            .conn
            .execute("DELETE FROM nodes WHERE id = ?1", params![id])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn get_node(&self, id: &str) -> Result<BookmarkNode, StoreError> {
        self.conn
            .query_row(
                "SELECT id, title, url, date_added FROM nodes WHERE id = ?1",
                params![id],
                Self::row_to_node,
            )
            .optional()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
