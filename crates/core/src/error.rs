//! Error type shared by all decoders.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Parse failures, each carrying the byte offset at which the failure
/// was detected.
///
/// A failure in a nested element aborts the enclosing composite's parse;
/// no partial object is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    #[error("malformed number at byte {pos}")]
    MalformedNumber { pos: usize },

    #[error("unknown keyword at byte {pos}")]
    UnknownKeyword { pos: usize },

    #[error("unterminated literal string starting at byte {pos}")]
    UnterminatedLiteralString { pos: usize },

    #[error("invalid escape sequence at byte {pos}")]
    InvalidEscapeSequence { pos: usize },

    #[error("unterminated hex string starting at byte {pos}")]
    UnterminatedHexString { pos: usize },

    #[error("invalid hex digit at byte {pos}")]
    InvalidHexDigit { pos: usize },

    #[error("malformed name at byte {pos}")]
    MalformedName { pos: usize },

    #[error("unterminated array starting at byte {pos}")]
    UnterminatedArray { pos: usize },

    #[error("unterminated dictionary starting at byte {pos}")]
    UnterminatedDictionary { pos: usize },

    #[error("unexpected byte at {pos}")]
    UnexpectedByte { pos: usize },

    #[error("nesting deeper than the recursion limit at byte {pos}")]
    RecursionLimitExceeded { pos: usize },

    #[error("allocation of {requested} elements failed at byte {pos}")]
    AllocationFailure { pos: usize, requested: usize },

    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },
}

impl PdfError {
    /// Byte offset the error points into the input buffer, when positional.
    pub const fn pos(&self) -> Option<usize> {
        match self {
            Self::MalformedNumber { pos }
            | Self::UnknownKeyword { pos }
            | Self::UnterminatedLiteralString { pos }
            | Self::InvalidEscapeSequence { pos }
            | Self::UnterminatedHexString { pos }
            | Self::InvalidHexDigit { pos }
            | Self::MalformedName { pos }
            | Self::UnterminatedArray { pos }
            | Self::UnterminatedDictionary { pos }
            | Self::UnexpectedByte { pos }
            | Self::RecursionLimitExceeded { pos }
            | Self::AllocationFailure { pos, .. } => Some(*pos),
            Self::TypeError { .. } => None,
        }
    }
}
