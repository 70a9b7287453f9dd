//! Recognizers for Go literal and comment forms.
//!
//! These are what make the brace scanner literal-aware: each recognizer
//! consumes one complete literal or comment so that delimiter characters
//! inside it never reach the depth counter. Escape handling follows the Go
//! spec forms: `\ooo`, `\xhh`, `\uhhhh`, `\Uhhhhhhhh`, and the named
//! single-character escapes.

use crate::cursor::Cursor;

/// `// ...` through the end of the line. The newline itself is not part of
/// the comment and is left unconsumed.
pub fn line_comment<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = input.rest();
    if !rest.starts_with("//") {
        return None;
    }
    let len = rest.find('\n').unwrap_or(rest.len());
    advance(input, len)
}

/// `/* ... */` including the close marker. An unterminated block comment is
/// not a match; its bytes fall through to ordinary character handling.
pub fn block_comment<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = input.rest();
    if !rest.starts_with("/*") {
        return None;
    }
    let close = rest[2..].find("*/")?;
    advance(input, 2 + close + 2)
}

/// A Go string literal: interpreted (`"..."` with escapes, single line) or
/// raw (`` `...` ``, no escapes, may span lines).
pub fn string_lit<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    interpreted_string(input).or_else(|| raw_string(input))
}

/// A rune literal with the same escape grammar as interpreted strings.
pub fn rune_lit<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = input.rest();
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'\'') {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => return advance(input, i + 1),
            b'\\' => i += escape_len(&bytes[i..]).unwrap_or(1),
            _ => i += 1,
        }
    }
    None
}

fn interpreted_string<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = input.rest();
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return advance(input, i + 1),
            // An unescaped newline means this was never a string literal.
            b'\n' => return None,
            b'\\' => i += escape_len(&bytes[i..]).unwrap_or(1),
            _ => i += 1,
        }
    }
    None
}

fn raw_string<'a>(input: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = input.rest();
    if !rest.starts_with('`') {
        return None;
    }
    let close = rest[1..].find('`')?;
    advance(input, 1 + close + 1)
}

/// Byte length of the escape sequence starting at `bytes[0] == b'\\'`, or
/// `None` if the bytes after the backslash do not form a valid escape (the
/// backslash is then consumed on its own, matching how the Go scanner
/// recovers).
fn escape_len(bytes: &[u8]) -> Option<usize> {
    debug_assert_eq!(bytes.first(), Some(&b'\\'));
    match bytes.get(1)? {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'\'' | b'"' => Some(2),
        b'x' => hex_run(bytes, 2, 2),
        b'u' => hex_run(bytes, 2, 4),
        b'U' => hex_run(bytes, 2, 8),
        b'0'..=b'7' => {
            let ok = bytes.len() >= 4 && bytes[1..4].iter().all(|b| (b'0'..=b'7').contains(b));
            ok.then_some(4)
        }
        _ => None,
    }
}

fn hex_run(bytes: &[u8], start: usize, n: usize) -> Option<usize> {
    let ok = bytes.len() >= start + n
        && bytes[start..start + n].iter().all(u8::is_ascii_hexdigit);
    ok.then_some(start + n)
}

fn advance<'a>(input: &mut Cursor<'a>, len: usize) -> Option<&'a str> {
    let start = input.index();
    input.seek(start + len);
    Some(input.slice(start, start + len))
}
