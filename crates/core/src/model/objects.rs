//! PDF object types.
//!
//! The tagged value type produced by parsing, the name type that keys
//! dictionaries, and the stream placeholder reserved for the document
//! layer.

use crate::error::{PdfError, Result};
use crate::model::dict::Dict;
use bytes::Bytes;

/// PDF object - the fundamental value type in PDF.
///
/// Objects form a strict ownership tree: arrays and dictionaries own
/// their children exclusively, and the parser only builds them bottom-up
/// from fully parsed children.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    /// Null object
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Real (floating point) value
    Real(f64),
    /// String (byte array)
    String(Vec<u8>),
    /// Name object (e.g., /Type, /Font)
    Name(Name),
    /// Array of objects
    Array(Vec<Self>),
    /// Dictionary (name -> object mapping)
    Dict(Dict),
    /// Stream (dictionary + binary data). Reserved for the document
    /// layer; never produced by the object parser.
    Stream(Box<PdfStream>),
}

impl PdfObject {
    /// Check if this is a null object
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get as boolean
    pub const fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(PdfError::TypeError {
                expected: "bool",
                got: self.type_name(),
            }),
        }
    }

    /// Get as integer
    pub const fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(PdfError::TypeError {
                expected: "int",
                got: self.type_name(),
            }),
        }
    }

    /// Get as real (float)
    pub const fn as_real(&self) -> Result<f64> {
        match self {
            Self::Real(n) => Ok(*n),
            _ => Err(PdfError::TypeError {
                expected: "real",
                got: self.type_name(),
            }),
        }
    }

    /// Get numeric value (int or real coerced to f64)
    pub const fn as_num(&self) -> Result<f64> {
        match self {
            Self::Int(n) => Ok(*n as f64),
            Self::Real(n) => Ok(*n),
            _ => Err(PdfError::TypeError {
                expected: "number",
                got: self.type_name(),
            }),
        }
    }

    /// Get as byte string
    pub fn as_string(&self) -> Result<&[u8]> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "string",
                got: self.type_name(),
            }),
        }
    }

    /// Get as name
    pub const fn as_name(&self) -> Result<&Name> {
        match self {
            Self::Name(n) => Ok(n),
            _ => Err(PdfError::TypeError {
                expected: "name",
                got: self.type_name(),
            }),
        }
    }

    /// Get as array
    pub const fn as_array(&self) -> Result<&Vec<Self>> {
        match self {
            Self::Array(arr) => Ok(arr),
            _ => Err(PdfError::TypeError {
                expected: "array",
                got: self.type_name(),
            }),
        }
    }

    /// Get as dictionary
    pub const fn as_dict(&self) -> Result<&Dict> {
        match self {
            Self::Dict(d) => Ok(d),
            _ => Err(PdfError::TypeError {
                expected: "dict",
                got: self.type_name(),
            }),
        }
    }

    /// Get as stream
    pub fn as_stream(&self) -> Result<&PdfStream> {
        match self {
            Self::Stream(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "stream",
                got: self.type_name(),
            }),
        }
    }

    /// Get type name for error messages
    const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::String(_) => "string",
            Self::Name(_) => "name",
            Self::Array(_) => "array",
            Self::Dict(_) => "dict",
            Self::Stream(_) => "stream",
        }
    }
}

/// A PDF name (e.g. /Type), as decoded bytes plus a cached djb2 hash.
///
/// The hash is a fast-reject for equality: two names are equal iff their
/// hashes match, lengths match, and bytes match in order. Hash equality
/// alone is never trusted since collisions are possible.
#[derive(Debug, Clone)]
pub struct Name {
    bytes: Vec<u8>,
    hash: u64,
}

impl Name {
    /// Create a name from already-decoded bytes, computing the hash once.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let hash = djb2(&bytes);
        Self { bytes, hash }
    }

    /// Decoded name bytes, without the leading slash.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Cached djb2 hash over the decoded bytes.
    pub const fn hash(&self) -> u64 {
        self.hash
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.bytes.len() == other.bytes.len()
            && self.bytes == other.bytes
    }
}

impl Eq for Name {}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", String::from_utf8_lossy(&self.bytes))
    }
}

/// The djb2 string hash: `h = h * 33 + byte`, seeded at 5381.
pub fn djb2(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 5381;
    for &b in bytes {
        hash = hash.wrapping_mul(33).wrapping_add(u64::from(b));
    }
    hash
}

/// PDF stream - dictionary attributes + raw binary data.
///
/// Filter decoding and decryption belong to the document layer, which is
/// also the only producer of this type; the object parser never emits it.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    /// Stream dictionary attributes
    pub attrs: Dict,
    /// Raw (possibly encoded) data
    rawdata: Bytes,
}

impl PdfStream {
    /// Create a new stream.
    pub fn new(attrs: Dict, rawdata: impl Into<Bytes>) -> Self {
        Self {
            attrs,
            rawdata: rawdata.into(),
        }
    }

    /// Get raw (undecoded) data.
    pub fn get_rawdata(&self) -> &[u8] {
        self.rawdata.as_ref()
    }

    /// Get raw data as shared bytes.
    pub fn rawdata_bytes(&self) -> Bytes {
        self.rawdata.clone()
    }
}
