pub mod delimited;
pub mod file_source;
pub mod format;
pub mod json;

pub use file_source::FileRecordSource;
pub use format::RecordFormat;

/// Document-store identifier column, never part of a record's payload.
pub(crate) const DOCUMENT_ID_FIELD: &str = "_id";
