//! Object syntax parsing modules.
//!
//! - `classify`: byte classification predicates
//! - `lexer`: token scanner and scalar/string/name decoders
//! - `object`: recursive-descent object parser

pub mod classify;
pub mod lexer;
pub mod object;

// Re-export main entry points for convenience
pub use lexer::Token;
pub use object::{MAX_PARSE_DEPTH, parse_object};
