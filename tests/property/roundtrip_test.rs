//! Property-based tests for the export/import round trip.
//!
//! For any tree of folders and bookmarks, importing it into a fresh store
//! and serializing the store's tree again yields the original document
//! modulo `dateAdded`, which the format is deliberately lossy on.

use proptest::prelude::*;

use treemark::database::Database;
use treemark::engine::importer::import_into;
use treemark::engine::serializer::serialize;
use treemark::store::{BookmarkStore, BookmarkStoreTrait};
use treemark::types::export::ExportNode;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,12}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

/// Strategy for titles, including the empty string.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,16}"
}

/// Strategy for an export node: bookmark leaves, folders up to depth 3 with
/// up to 4 children each.
fn arb_export_node() -> impl Strategy<Value = ExportNode> {
    let leaf = (arb_title(), arb_url()).prop_map(|(title, url)| ExportNode::bookmark(title, url));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_title(), prop::collection::vec(inner, 0..4))
            .prop_map(|(title, children)| ExportNode::folder(title, children))
    })
}

/// Strategy for a document body: a top-level forest.
fn arb_forest() -> impl Strategy<Value = Vec<ExportNode>> {
    prop::collection::vec(arb_export_node(), 0..5)
}

/// Clears dateAdded recursively so trees can be compared on
/// {title, url, children, order} only.
fn normalized(nodes: &[ExportNode]) -> Vec<ExportNode> {
    nodes
        .iter()
        .map(|node| ExportNode {
            title: node.title.clone(),
            url: node.url.clone(),
            date_added: None,
            children: if node.url.is_some() {
                Vec::new()
            } else {
                normalized(&node.children)
            },
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // For any forest, import followed by fetch and serialize reproduces the
    // forest on {title, url, children, order}.
    #[test]
    fn import_then_serialize_round_trips(forest in arb_forest()) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut store = BookmarkStore::new(db.connection());

        import_into(&mut store, &forest, None)
            .expect("import of a well-formed forest should succeed");

        let tree = store.fetch_tree().expect("fetch_tree should succeed");
        let doc = serialize(&tree);

        prop_assert_eq!(normalized(&doc.bookmarks), normalized(&forest));
    }

    // Import stamps a fresh dateAdded on every node, so a serialized
    // re-export always carries one.
    #[test]
    fn reexport_carries_store_timestamps(forest in arb_forest()) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut store = BookmarkStore::new(db.connection());

        import_into(&mut store, &forest, None).expect("import should succeed");
        let doc = serialize(&store.fetch_tree().expect("fetch_tree should succeed"));

        fn all_dated(nodes: &[ExportNode]) -> bool {
            nodes
                .iter()
                .all(|n| n.date_added.is_some() && all_dated(&n.children))
        }
        prop_assert!(all_dated(&doc.bookmarks));
    }
}
