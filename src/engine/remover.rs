//! Recursive removal: delete a subtree, children before parents.

use crate::store::{is_reserved_root, BookmarkStoreTrait};
use crate::types::errors::StoreError;
use crate::types::node::{BookmarkNode, NodeKind};

/// Removes a materialized subtree from the store, post-order.
///
/// Every child subtree is removed before the node itself, because the store
/// rejects removal of a folder that still has children. When the walk reaches
/// the reserved root (deleting the whole tree), the root's own remove step is
/// skipped while its children are still cleared.
///
/// The first store failure aborts the walk; nodes already removed stay
/// removed. Removal of a subtree is not atomic.
pub fn remove_recursively<S: BookmarkStoreTrait>(
    store: &mut S,
    subtree: &BookmarkNode,
) -> Result<(), StoreError> {
    if let NodeKind::Folder { children } = &subtree.kind {
        for child in children {
            remove_recursively(store, child)?;
        }
    }
    if !is_reserved_root(&subtree.id) {
        store.remove_node(&subtree.id)?;
    }
    Ok(())
}
