//! Recursive-descent object parser.
//!
//! Composes the classifier, scanner, and decoders into the full tagged
//! object tree. The single entry point is [`parse_object`]; every level
//! of nesting threads an explicit cursor and depth, and failures carry
//! the byte offset where they were detected.

use crate::error::{PdfError, Result};
use crate::model::dict::Dict;
use crate::model::objects::PdfObject;
use crate::parser::classify::{is_double_char, skip_blanks};
use crate::parser::lexer::{
    hex_span, literal_span, name_span, parse_hex_string, parse_keyword, parse_literal_string,
    parse_name, parse_number, scan_token,
};
use tracing::trace;

/// Maximum nesting depth for arrays and dictionaries. Deeper input is
/// rejected with `RecursionLimitExceeded` instead of overflowing the
/// call stack.
pub const MAX_PARSE_DEPTH: usize = 64;

/// Parse one object starting at `pos` (leading whitespace and comments
/// are skipped first). Returns the object and the position one past its
/// final byte.
///
/// The buffer must contain the complete object, closing delimiters
/// included; assembling complete buffers out of chunked reads is the
/// loader's job.
pub fn parse_object(buf: &[u8], pos: usize) -> Result<(PdfObject, usize)> {
    parse_object_at(buf, pos, 0)
}

fn parse_object_at(buf: &[u8], pos: usize, depth: usize) -> Result<(PdfObject, usize)> {
    if depth > MAX_PARSE_DEPTH {
        return Err(PdfError::RecursionLimitExceeded { pos });
    }
    let pos = skip_blanks(buf, pos);
    let Some(&b) = buf.get(pos) else {
        return Err(PdfError::UnexpectedByte { pos });
    };
    match b {
        b'(' => parse_literal_string(buf, pos),
        b'<' => {
            let (double, _) = is_double_char(buf, pos);
            if double {
                parse_dict_at(buf, pos, depth)
            } else {
                parse_hex_string(buf, pos)
            }
        }
        b'/' => {
            let (name, next) = parse_name(buf, pos)?;
            Ok((PdfObject::Name(name), next))
        }
        b'[' => parse_array_at(buf, pos, depth),
        // Closing delimiters and braces cannot begin an object; a bare
        // '%' never reaches dispatch since comments are skipped above.
        b')' | b'>' | b']' | b'{' | b'}' | b'%' => Err(PdfError::UnexpectedByte { pos }),
        b'+' | b'-' | b'.' | b'0'..=b'9' => {
            let token = scan_token(buf, pos);
            let obj = parse_number(buf, token)?;
            Ok((obj, token.end))
        }
        _ => {
            let token = scan_token(buf, pos);
            match parse_keyword(buf, token) {
                Some(obj) => Ok((obj, token.end)),
                None => Err(PdfError::UnknownKeyword { pos }),
            }
        }
    }
}

/// Parse an array `[ ... ]`. Two passes: count elements with
/// [`skip_object`], then materialize exactly that many into one
/// allocation. Both passes consume elements through the same span
/// helpers, so the counts cannot drift apart.
fn parse_array_at(buf: &[u8], open: usize, depth: usize) -> Result<(PdfObject, usize)> {
    let mut count = 0usize;
    let mut cursor = open + 1;
    loop {
        cursor = skip_blanks(buf, cursor);
        match buf.get(cursor) {
            Some(&b']') => break,
            Some(_) => {
                cursor = skip_object(buf, cursor, depth + 1)?;
                count += 1;
            }
            None => return Err(PdfError::UnterminatedArray { pos: open }),
        }
    }
    trace!(count, start = open, "array");

    let mut items: Vec<PdfObject> = Vec::new();
    items
        .try_reserve_exact(count)
        .map_err(|_| PdfError::AllocationFailure {
            pos: open,
            requested: count,
        })?;
    let mut pos = open + 1;
    for _ in 0..count {
        let (obj, next) = parse_object_at(buf, pos, depth + 1)?;
        items.push(obj);
        pos = next;
    }
    let pos = skip_blanks(buf, pos);
    match buf.get(pos) {
        Some(&b']') => Ok((PdfObject::Array(items), pos + 1)),
        _ => Err(PdfError::UnterminatedArray { pos: open }),
    }
}

/// Parse a dictionary `<< ... >>`: alternating name keys and object
/// values until the closing `>>`, which is consumed. Duplicate keys
/// overwrite in place in the store.
fn parse_dict_at(buf: &[u8], open: usize, depth: usize) -> Result<(PdfObject, usize)> {
    let mut dict = Dict::new();
    let mut pos = open + 2;
    loop {
        pos = skip_blanks(buf, pos);
        if buf[pos..].starts_with(b">>") {
            trace!(entries = dict.len(), start = open, "dictionary");
            return Ok((PdfObject::Dict(dict), pos + 2));
        }
        if pos >= buf.len() {
            return Err(PdfError::UnterminatedDictionary { pos: open });
        }
        let (key, next) = parse_name(buf, pos)?;
        let (value, next) = parse_object_at(buf, next, depth + 1)?;
        dict.insert(key, value);
        pos = next;
    }
}

/// Advance the cursor past exactly one object without building it.
///
/// Reuses the lexer's span helpers (`literal_span`, `hex_span`,
/// `name_span`, `scan_token`), which is what keeps the array count pass
/// in lockstep with the materializing pass. Token contents are not
/// validated here; the materializing pass reports malformed scalars.
fn skip_object(buf: &[u8], pos: usize, depth: usize) -> Result<usize> {
    if depth > MAX_PARSE_DEPTH {
        return Err(PdfError::RecursionLimitExceeded { pos });
    }
    let pos = skip_blanks(buf, pos);
    let Some(&b) = buf.get(pos) else {
        return Err(PdfError::UnexpectedByte { pos });
    };
    match b {
        b'(' => Ok(literal_span(buf, pos)? + 1),
        b'<' => {
            let (double, _) = is_double_char(buf, pos);
            if !double {
                return Ok(hex_span(buf, pos)? + 1);
            }
            let mut cursor = pos + 2;
            loop {
                cursor = skip_blanks(buf, cursor);
                if buf[cursor..].starts_with(b">>") {
                    return Ok(cursor + 2);
                }
                if cursor >= buf.len() {
                    return Err(PdfError::UnterminatedDictionary { pos });
                }
                if buf.get(cursor) != Some(&b'/') {
                    return Err(PdfError::MalformedName { pos: cursor });
                }
                cursor = name_span(buf, cursor + 1);
                cursor = skip_object(buf, cursor, depth + 1)?;
            }
        }
        b'/' => Ok(name_span(buf, pos + 1)),
        b'[' => {
            let mut cursor = pos + 1;
            loop {
                cursor = skip_blanks(buf, cursor);
                match buf.get(cursor) {
                    Some(&b']') => return Ok(cursor + 1),
                    Some(_) => cursor = skip_object(buf, cursor, depth + 1)?,
                    None => return Err(PdfError::UnterminatedArray { pos }),
                }
            }
        }
        b')' | b'>' | b']' | b'{' | b'}' | b'%' => Err(PdfError::UnexpectedByte { pos }),
        _ => Ok(scan_token(buf, pos).end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> Result<(PdfObject, usize)> {
        parse_object(input, 0)
    }

    #[test]
    fn test_skip_matches_parse_extent() {
        let cases: &[&[u8]] = &[
            b"42 ",
            b"(lit\\)eral)",
            b"<414 2>",
            b"/Na#6de",
            b"[1 [2 3] (x)]",
            b"<</K [1 2]/V<</N null>>>>",
        ];
        for case in cases {
            let (_, parsed_end) = parse(case).unwrap();
            let skipped_end = skip_object(case, 0, 0).unwrap();
            assert_eq!(parsed_end, skipped_end, "case {:?}", case);
        }
    }

    #[test]
    fn test_unparseable_leading_bytes() {
        assert!(matches!(
            parse(b"]"),
            Err(PdfError::UnexpectedByte { pos: 0 })
        ));
        assert!(matches!(
            parse(b"   "),
            Err(PdfError::UnexpectedByte { pos: 3 })
        ));
        assert!(matches!(
            parse(b"}"),
            Err(PdfError::UnexpectedByte { pos: 0 })
        ));
    }
}
