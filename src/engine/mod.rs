// Treemark tree transformation engine
// Four independent, re-entrant operations over a bookmark tree: export
// serialization, import reconstruction, recursive removal, flat projection.
// None of them keeps state between invocations.

pub mod flattener;
pub mod importer;
pub mod remover;
pub mod serializer;

pub use flattener::{filter, flatten};
pub use importer::{import_document, import_into, parse_document, read_document_from_file};
pub use remover::remove_recursively;
pub use serializer::{export_to_file, serialize, to_json};
