//! Unit tests for export serialization: document projection, wire shape,
//! and order preservation.

use treemark::engine::serializer::{serialize, to_json};
use treemark::store::ROOT_ID;
use treemark::types::export::{ExportNode, EXPORT_VERSION};
use treemark::types::node::BookmarkNode;

/// Helper: the worked example tree —
/// root -> [FolderA -> [X, Y], Z].
fn example_tree() -> BookmarkNode {
    BookmarkNode::new_folder(
        ROOT_ID,
        "",
        vec![
            BookmarkNode::new_folder(
                "f-a",
                "FolderA",
                vec![
                    BookmarkNode::new_bookmark("b-x", "X", "http://x"),
                    BookmarkNode::new_bookmark("b-y", "Y", "http://y"),
                ],
            ),
            BookmarkNode::new_bookmark("b-z", "Z", "http://z"),
        ],
    )
}

/// The root itself is never emitted; its children become the document's
/// top-level sequence, in order.
#[test]
fn serialize_excludes_root_and_keeps_order() {
    let doc = serialize(&example_tree());

    assert_eq!(doc.version, EXPORT_VERSION);
    assert_eq!(doc.bookmarks.len(), 2);
    assert_eq!(doc.bookmarks[0].title, "FolderA");
    assert!(doc.bookmarks[0].is_folder());
    assert_eq!(doc.bookmarks[1].title, "Z");
    assert_eq!(doc.bookmarks[1].url.as_deref(), Some("http://z"));

    let folder_a = &doc.bookmarks[0];
    assert_eq!(folder_a.children.len(), 2);
    assert_eq!(folder_a.children[0].title, "X");
    assert_eq!(folder_a.children[1].title, "Y");
}

/// Identifiers are store-local and never appear in the document.
#[test]
fn serialize_drops_identifiers() {
    let doc = serialize(&example_tree());
    let json = to_json(&doc).unwrap();
    assert!(!json.contains("b-x"));
    assert!(!json.contains("\"id\""));
}

/// Leaves always serialize with an empty children array, and folders carry
/// no url key at all.
#[test]
fn wire_shape_of_leaves_and_folders() {
    let doc = serialize(&example_tree());
    let value: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();

    assert_eq!(value["version"], 1);
    assert!(value["timestamp"].is_i64());

    let folder_a = &value["bookmarks"][0];
    assert!(folder_a.get("url").is_none());
    assert!(folder_a["children"].is_array());

    let leaf_z = &value["bookmarks"][1];
    assert_eq!(leaf_z["url"], "http://z");
    assert_eq!(leaf_z["children"], serde_json::json!([]));
}

/// dateAdded is carried through export when the store supplied one.
#[test]
fn serialize_carries_date_added() {
    let mut tree = example_tree();
    if let treemark::types::node::NodeKind::Folder { children } = &mut tree.kind {
        children[1].date_added = Some(1_700_000_000_000);
    }

    let doc = serialize(&tree);
    assert_eq!(doc.bookmarks[1].date_added, Some(1_700_000_000_000));
    // The folder got none, so the key is absent on the wire
    let value: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();
    assert!(value["bookmarks"][0].get("dateAdded").is_none());
    assert_eq!(value["bookmarks"][1]["dateAdded"], 1_700_000_000_000i64);
}

/// Serializing a subtree rooted at a leaf yields an empty document body.
#[test]
fn serialize_leaf_root_yields_empty_sequence() {
    let leaf = BookmarkNode::new_bookmark("b-1", "Lone", "http://lone");
    let doc = serialize(&leaf);
    assert!(doc.bookmarks.is_empty());
}

/// Serialization is deterministic apart from the timestamp.
#[test]
fn serialize_is_deterministic_modulo_timestamp() {
    let tree = example_tree();
    let a = serialize(&tree);
    let b = serialize(&tree);
    assert_eq!(a.bookmarks, b.bookmarks);
    assert_eq!(a.version, b.version);
}

/// Round-trip through the JSON text form preserves the document.
#[test]
fn to_json_parses_back() {
    let doc = serialize(&example_tree());
    let parsed = treemark::engine::importer::parse_document(&to_json(&doc).unwrap()).unwrap();
    assert_eq!(parsed, doc);
}

/// export_to_file writes the same JSON that to_json renders.
#[test]
fn export_to_file_writes_document() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bookmarks.json");

    let doc = serialize(&example_tree());
    treemark::engine::serializer::export_to_file(&doc, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_json(&doc).unwrap());
}

/// A folder entry built by hand serializes identically to one projected from
/// a tree, so both construction paths share the wire shape.
#[test]
fn export_node_helpers_match_projection() {
    let by_hand = ExportNode::folder(
        "FolderA",
        vec![
            ExportNode::bookmark("X", "http://x"),
            ExportNode::bookmark("Y", "http://y"),
        ],
    );
    let projected = serialize(&example_tree()).bookmarks[0].clone();
    assert_eq!(by_hand, projected);
}
