//! palermo - PDF object syntax parser.
//!
//! Turns a raw byte buffer into a tree of typed PDF objects (null,
//! boolean, number, string, name, array, dictionary). File-level
//! structure - cross-reference tables, indirect objects, stream filters -
//! belongs to the document layer built on top of this crate.

pub mod error;
pub mod model;
pub mod parser;

pub use error::{PdfError, Result};
pub use model::dict::{DEFAULT_DICT_SLOTS, Dict};
pub use model::objects::{Name, PdfObject, PdfStream};
pub use parser::object::{MAX_PARSE_DEPTH, parse_object};
