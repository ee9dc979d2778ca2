use std::fmt;

// === StoreError ===

/// Errors raised by bookmark store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No node with the given ID exists.
    NotFound(String),
    /// The requested parent node does not exist.
    ParentNotFound(String),
    /// The requested parent node is a bookmark, not a folder.
    NotAFolder(String),
    /// The folder still has children and cannot be removed.
    NonEmptyFolder(String),
    /// The reserved root node cannot be removed.
    ReservedRoot,
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Node not found: {}", id),
            StoreError::ParentNotFound(id) => write!(f, "Parent node not found: {}", id),
            StoreError::NotAFolder(id) => write!(f, "Node is not a folder: {}", id),
            StoreError::NonEmptyFolder(id) => write!(f, "Folder is not empty: {}", id),
            StoreError::ReservedRoot => write!(f, "The reserved root cannot be removed"),
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === FormatError ===

/// Errors raised while validating an export document.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The document carries a version this importer does not understand.
    UnsupportedVersion(u32),
    /// The document does not parse as an export document.
    Malformed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnsupportedVersion(v) => {
                write!(f, "Unsupported export format version: {}", v)
            }
            FormatError::Malformed(msg) => write!(f, "Malformed export document: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

// === ImportError ===

/// Errors raised during import: reading the document, validating its format,
/// or driving the store. Format errors always precede the first store call;
/// a store error leaves earlier creations in place.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportError {
    /// Reading the document from external storage failed.
    Io(String),
    Format(FormatError),
    Store(StoreError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Io(msg) => write!(f, "Import I/O error: {}", msg),
            ImportError::Format(err) => write!(f, "Import failed: {}", err),
            ImportError::Store(err) => write!(f, "Import failed: {}", err),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<FormatError> for ImportError {
    fn from(err: FormatError) -> Self {
        ImportError::Format(err)
    }
}

impl From<StoreError> for ImportError {
    fn from(err: StoreError) -> Self {
        ImportError::Store(err)
    }
}

// === ExportError ===

/// Errors raised while rendering or writing an export document.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Writing the document to external storage failed.
    Io(String),
    /// Serializing the document to JSON failed.
    Serialize(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "Export I/O error: {}", msg),
            ExportError::Serialize(msg) => write!(f, "Export serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}
