// Treemark bookmark store
// The store is the persistence collaborator the engine drives: create, read,
// and remove operations keyed by opaque node identifiers.

pub mod bookmark_store;

pub use bookmark_store::{is_reserved_root, BookmarkStore, BookmarkStoreTrait, ROOT_ID};
