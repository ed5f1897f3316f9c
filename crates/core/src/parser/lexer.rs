//! Token scanning and scalar/string/name decoding.
//!
//! Everything here operates on `(&[u8], usize)` and returns the decoded
//! value together with the cursor position one past the consumed input.
//! String decoders are two-pass: a span pass measures the raw extent so
//! the decode pass can fill a single exactly-sized allocation. The span
//! helpers are also what the object parser's structural skipper uses, so
//! counting and materializing can never disagree on element boundaries.

use crate::error::{PdfError, Result};
use crate::model::objects::{Name, PdfObject};
use crate::parser::classify::{is_delimiter_byte, is_regular_byte, is_whitespace_byte};

/// A lexical unit: a half-open byte span `[start, end)` into the buffer,
/// identified before semantic interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token's bytes within `buf`.
    pub fn bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..self.end]
    }
}

/// Chop the maximal run of regular bytes starting at `start`. Whitespace,
/// delimiters, and `%` (a delimiter) all terminate the run. The caller
/// dispatches here only when positioned on a regular byte, so the span is
/// never empty in practice.
pub fn scan_token(buf: &[u8], start: usize) -> Token {
    let mut pos = start;
    while pos < buf.len() && is_regular_byte(buf[pos]) {
        pos += 1;
    }
    Token { start, end: pos }
}

/// Decode a number token: optional sign, digits, optional `.`, digits.
///
/// Integer and fractional parts are accumulated manually (the fraction by
/// successive division by ten) so no intermediate string is built. There
/// is no exponent notation and no overflow detection.
pub fn parse_number(buf: &[u8], token: Token) -> Result<PdfObject> {
    let bytes = token.bytes(buf);
    let mut i = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'+') => i = 1,
        Some(b'-') => {
            negative = true;
            i = 1;
        }
        _ => {}
    }

    let mut int_part: i64 = 0;
    let mut has_int = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        // No overflow detection; oversized digit runs wrap.
        int_part = int_part
            .wrapping_mul(10)
            .wrapping_add(i64::from(bytes[i] - b'0'));
        has_int = true;
        i += 1;
    }

    let mut has_dot = false;
    let mut frac = 0.0f64;
    let mut scale = 1.0f64;
    let mut has_frac = false;
    if i < bytes.len() && bytes[i] == b'.' {
        has_dot = true;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            scale /= 10.0;
            frac += scale * f64::from(bytes[i] - b'0');
            has_frac = true;
            i += 1;
        }
    }

    // Anything left over is a non-digit; a bare sign/dot has no digits.
    if i != bytes.len() || (!has_int && !has_frac) {
        return Err(PdfError::MalformedNumber {
            pos: token.start + i,
        });
    }

    if has_dot {
        let mut value = int_part as f64 + frac;
        if negative {
            value = -value;
        }
        Ok(PdfObject::Real(value))
    } else {
        Ok(PdfObject::Int(if negative {
            int_part.wrapping_neg()
        } else {
            int_part
        }))
    }
}

/// Recognize the `true`/`false`/`null` keywords. Length must match
/// exactly: a prefix such as `tru` is not a keyword.
pub fn parse_keyword(buf: &[u8], token: Token) -> Option<PdfObject> {
    match token.bytes(buf) {
        b"true" => Some(PdfObject::Bool(true)),
        b"false" => Some(PdfObject::Bool(false)),
        b"null" => Some(PdfObject::Null),
        _ => None,
    }
}

/// Measure a literal string: with `buf[open] == b'('`, return the
/// position of the parenthesis that closes it. A backslash always pairs
/// with the following byte, so escaped parens never affect the depth.
pub(crate) fn literal_span(buf: &[u8], open: usize) -> Result<usize> {
    let mut pos = open + 1;
    let mut depth = 1usize;
    while pos < buf.len() {
        match buf[pos] {
            b'\\' => {
                if pos + 1 >= buf.len() {
                    // Trailing backslash at buffer end.
                    return Err(PdfError::UnterminatedLiteralString { pos: open });
                }
                pos += 2;
            }
            b'(' => {
                depth += 1;
                pos += 1;
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos);
                }
                pos += 1;
            }
            _ => pos += 1,
        }
    }
    Err(PdfError::UnterminatedLiteralString { pos: open })
}

/// Decode a literal string `( ... )` starting at the opening parenthesis.
///
/// Escapes: `\n \r \t \b \f \( \) \\`; backslash before an end-of-line is
/// a line splice contributing no output; backslash before 1-3 octal
/// digits (greedy) decodes to `value mod 256`; backslash before anything
/// else is dropped and the following byte is processed normally.
pub fn parse_literal_string(buf: &[u8], pos: usize) -> Result<(PdfObject, usize)> {
    let close = literal_span(buf, pos)?;
    let raw = &buf[pos + 1..close];

    // Decoded output never exceeds the raw span, so one allocation holds it.
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }
        i += 1;
        if i >= raw.len() {
            // literal_span pairs every backslash; reachable only if the
            // span was computed over a different buffer.
            return Err(PdfError::InvalidEscapeSequence { pos: pos + 1 + i });
        }
        match raw[i] {
            b'n' => {
                out.push(b'\n');
                i += 1;
            }
            b'r' => {
                out.push(b'\r');
                i += 1;
            }
            b't' => {
                out.push(b'\t');
                i += 1;
            }
            b'b' => {
                out.push(0x08);
                i += 1;
            }
            b'f' => {
                out.push(0x0c);
                i += 1;
            }
            b'(' => {
                out.push(b'(');
                i += 1;
            }
            b')' => {
                out.push(b')');
                i += 1;
            }
            b'\\' => {
                out.push(b'\\');
                i += 1;
            }
            b'\n' => {
                // Line splice: backslash and LF both dropped.
                i += 1;
            }
            b'\r' if i + 1 < raw.len() && raw[i + 1] == b'\n' => {
                // Line splice over CR LF.
                i += 2;
            }
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 3 && i < raw.len() && (b'0'..=b'7').contains(&raw[i]) {
                    value = value * 8 + u32::from(raw[i] - b'0');
                    i += 1;
                    digits += 1;
                }
                out.push((value & 0xff) as u8);
            }
            _ => {
                // The backslash is dropped; the byte itself (a lone CR
                // included) is reprocessed as ordinary content.
            }
        }
    }

    Ok((PdfObject::String(out), close + 1))
}

/// Measure a hex string: with `buf[open] == b'<'`, return the position of
/// the closing `>`. Whitespace is permitted anywhere inside; any other
/// non-hex byte is an error at its own offset.
pub(crate) fn hex_span(buf: &[u8], open: usize) -> Result<usize> {
    let mut pos = open + 1;
    while pos < buf.len() {
        let b = buf[pos];
        if b == b'>' {
            return Ok(pos);
        }
        if b.is_ascii_hexdigit() || is_whitespace_byte(b) {
            pos += 1;
            continue;
        }
        return Err(PdfError::InvalidHexDigit { pos });
    }
    Err(PdfError::UnterminatedHexString { pos: open })
}

/// Decode a hex string `< ... >` starting at the opening `<`. Pairs pack
/// high nibble first; an odd final digit becomes the high nibble of a
/// last byte with a zero low nibble.
pub fn parse_hex_string(buf: &[u8], pos: usize) -> Result<(PdfObject, usize)> {
    let close = hex_span(buf, pos)?;
    let raw = &buf[pos + 1..close];

    let mut out = Vec::with_capacity(raw.len() / 2 + 1);
    let mut high: Option<u8> = None;
    for &b in raw {
        let Some(nibble) = hex_value(b) else {
            continue; // whitespace, validated by the span pass
        };
        match high {
            Some(h) => {
                out.push((h << 4) | nibble);
                high = None;
            }
            None => high = Some(nibble),
        }
    }
    if let Some(h) = high {
        out.push(h << 4);
    }

    Ok((PdfObject::String(out), close + 1))
}

/// Measure a name's raw extent starting just after the `/`. A `#` not
/// followed by two hex digits terminates the name before the `#`.
pub(crate) fn name_span(buf: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < buf.len() {
        let b = buf[pos];
        if is_whitespace_byte(b) || is_delimiter_byte(b) {
            break;
        }
        if b == b'#' {
            if pos + 2 < buf.len()
                && buf[pos + 1].is_ascii_hexdigit()
                && buf[pos + 2].is_ascii_hexdigit()
            {
                pos += 3;
                continue;
            }
            break;
        }
        pos += 1;
    }
    pos
}

/// Decode a name `/...` starting at the slash: substitute each `#xx`
/// escape with its byte, copy everything else literally, and hash the
/// decoded bytes. An empty name (`/` alone) is legal.
pub fn parse_name(buf: &[u8], pos: usize) -> Result<(Name, usize)> {
    if buf.get(pos) != Some(&b'/') {
        return Err(PdfError::MalformedName { pos });
    }
    let end = name_span(buf, pos + 1);
    let raw = &buf[pos + 1..end];

    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        if b == b'#' && i + 2 < raw.len() {
            if let (Some(hi), Some(lo)) = (hex_value(raw[i + 1]), hex_value(raw[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(b);
        i += 1;
    }

    Ok((Name::new(out), end))
}

pub(crate) fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_token_stops_at_delimiter() {
        let t = scan_token(b"obj<<", 0);
        assert_eq!((t.start, t.end), (0, 3));
        assert_eq!(t.bytes(b"obj<<"), b"obj");
        let t = scan_token(b"12.5 ", 0);
        assert_eq!(t.end, 4);
    }

    #[test]
    fn test_number_int_and_real() {
        let check = |s: &[u8]| parse_number(s, scan_token(s, 0));
        assert_eq!(check(b"0"), Ok(PdfObject::Int(0)));
        assert_eq!(check(b"+17"), Ok(PdfObject::Int(17)));
        assert_eq!(check(b"-98"), Ok(PdfObject::Int(-98)));
        assert_eq!(check(b"-12.340"), Ok(PdfObject::Real(-12.34)));
        assert_eq!(check(b".5"), Ok(PdfObject::Real(0.5)));
        assert_eq!(check(b"34.5"), Ok(PdfObject::Real(34.5)));
        assert_eq!(check(b"5."), Ok(PdfObject::Real(5.0)));
    }

    #[test]
    fn test_number_rejects_garbage() {
        let check = |s: &[u8]| parse_number(s, scan_token(s, 0));
        assert!(matches!(
            check(b"12a"),
            Err(PdfError::MalformedNumber { pos: 2 })
        ));
        assert!(check(b"+").is_err());
        assert!(check(b"-.").is_err());
        assert!(check(b"1.2.3").is_err());
    }

    #[test]
    fn test_keyword_exact_length_only() {
        let check = |s: &[u8]| parse_keyword(s, scan_token(s, 0));
        assert_eq!(check(b"true"), Some(PdfObject::Bool(true)));
        assert_eq!(check(b"false"), Some(PdfObject::Bool(false)));
        assert_eq!(check(b"null"), Some(PdfObject::Null));
        assert_eq!(check(b"tru"), None);
        assert_eq!(check(b"truex"), None);
        assert_eq!(check(b"fals"), None);
    }

    #[test]
    fn test_literal_span_balanced() {
        assert_eq!(literal_span(b"(abc)", 0), Ok(4));
        assert_eq!(literal_span(b"(a(b)c)", 0), Ok(6));
        assert_eq!(literal_span(br"(a\)b)", 0), Ok(5));
        assert!(matches!(
            literal_span(b"(open", 0),
            Err(PdfError::UnterminatedLiteralString { pos: 0 })
        ));
        // Trailing backslash must not read past the buffer.
        assert!(literal_span(br"(ab\", 0).is_err());
    }

    #[test]
    fn test_name_span_hash_rules() {
        assert_eq!(name_span(b"Name ", 0), 4);
        assert_eq!(name_span(b"A#42B/", 0), 5);
        // Malformed escape ends the name before the '#'.
        assert_eq!(name_span(b"A#4", 0), 1);
        assert_eq!(name_span(b"A#G1", 0), 1);
    }
}
