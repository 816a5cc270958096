//! Domain layer - wiki document model and conversion errors.

mod document;
mod error;

pub use document::Document;
pub use error::ConvertError;
