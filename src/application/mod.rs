//! Application layer - use case handlers.

mod convert_document;

pub use convert_document::ConvertDocumentHandler;
