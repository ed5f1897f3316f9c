//! PDF data model types.
//!
//! - `objects` - the tagged object value type (PdfObject, Name, PdfStream)
//! - `dict` - the name-keyed dictionary store backing dictionary objects

pub mod dict;
pub mod objects;

// Re-export main types for convenience
pub use dict::{DEFAULT_DICT_SLOTS, Dict};
pub use objects::{Name, PdfObject, PdfStream};
