//! Byte classification predicates.
//!
//! Stateless, allocation-free functions over an immutable buffer view.
//! Each returns whether the byte(s) at `pos` belong to the class and the
//! position of the next byte to examine; on a miss the position is
//! returned unchanged.

/// Whitespace bytes per the PDF spec: NUL, tab, LF, form feed, CR, space.
pub const fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b'\x00' | b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

/// Delimiter bytes. Curly braces are included for Type 4 (PostScript
/// calculator) function bodies.
pub const fn is_delimiter_byte(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// A regular byte is anything that is neither whitespace nor a delimiter.
/// Token runs are maximal sequences of regular bytes.
pub const fn is_regular_byte(b: u8) -> bool {
    !is_whitespace_byte(b) && !is_delimiter_byte(b)
}

/// Advance past a maximal run of whitespace (end-of-line sequences are
/// whitespace for this purpose, since CR and LF are both in the set).
pub fn is_whitespace(buf: &[u8], pos: usize) -> (bool, usize) {
    let mut cur = pos;
    while cur < buf.len() && is_whitespace_byte(buf[cur]) {
        cur += 1;
    }
    (cur != pos, cur)
}

/// Consume exactly one delimiter byte. Delimiters are never coalesced
/// here; each call advances at most one byte.
pub fn is_delimiter(buf: &[u8], pos: usize) -> (bool, usize) {
    match buf.get(pos) {
        Some(&b) if is_delimiter_byte(b) => (true, pos + 1),
        _ => (false, pos),
    }
}

/// Consume an end-of-line sequence: LF alone or CR LF. A lone CR is not
/// end-of-line.
pub fn is_end_of_line(buf: &[u8], pos: usize) -> (bool, usize) {
    match buf.get(pos) {
        Some(&b'\n') => (true, pos + 1),
        Some(&b'\r') if buf.get(pos + 1) == Some(&b'\n') => (true, pos + 2),
        _ => (false, pos),
    }
}

/// Consume a comment: `%` up to (not including) the terminating
/// end-of-line, or to the end of the buffer.
pub fn is_comment(buf: &[u8], pos: usize) -> (bool, usize) {
    if buf.get(pos) != Some(&b'%') {
        return (false, pos);
    }
    let mut cur = pos + 1;
    while cur < buf.len() {
        let (eol, _) = is_end_of_line(buf, cur);
        if eol {
            break;
        }
        cur += 1;
    }
    (true, cur)
}

/// Check for a doubled byte such as `<<` or `>>`, consuming both.
pub fn is_double_char(buf: &[u8], pos: usize) -> (bool, usize) {
    match (buf.get(pos), buf.get(pos + 1)) {
        (Some(a), Some(b)) if a == b => (true, pos + 2),
        _ => (false, pos),
    }
}

/// Advance past any mix of whitespace and comments. Comments end right
/// before their end-of-line, which the next whitespace pass consumes.
pub fn skip_blanks(buf: &[u8], mut pos: usize) -> usize {
    loop {
        let (ws, next) = is_whitespace(buf, pos);
        if ws {
            pos = next;
            continue;
        }
        let (comment, next) = is_comment(buf, pos);
        if comment {
            pos = next;
            continue;
        }
        return pos;
    }
}
