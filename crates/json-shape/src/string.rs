//! String codec: quoted, escape-aware on both sides.
//!
//! Read decodes the eight single-character escapes plus `\uXXXX`, composing
//! the four hex digits into a code point in 0x0000–0xFFFF and re-encoding it
//! as 1–3 UTF-8 bytes. Surrogate pairs are not combined; a lone surrogate
//! fails UTF-8 validation of the decoded bytes. Write escapes `"`, `\` and
//! every control character so the emitted text is always valid JSON.

use json_shape_cursor::{Cursor, ScanError};

use crate::codec::JsonCodec;
use crate::error::JsonError;

impl JsonCodec for String {
    fn write_to(&self, out: &mut String) {
        write_escaped(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        read_string(cur)
    }
}

pub(crate) fn write_escaped(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

pub(crate) fn read_string<'a>(cur: Cursor<'a>) -> Result<(String, Cursor<'a>), JsonError> {
    let mut cur = cur.trim_expect(b'"')?;
    let mut bytes: Vec<u8> = Vec::new();
    loop {
        match cur.peek() {
            None => return Err(ScanError::UnexpectedEof(cur.pos()).into()),
            Some(b'"') => {
                cur = cur.advance(1);
                break;
            }
            Some(b) if b < 0x20 => {
                return Err(ScanError::ControlCharacter(cur.pos()).into());
            }
            Some(b'\\') => {
                let esc = cur.pos();
                cur = cur.advance(1);
                let e = cur.peek().ok_or(ScanError::UnexpectedEof(cur.pos()))?;
                cur = cur.advance(1);
                match e {
                    b'"' => bytes.push(b'"'),
                    b'\\' => bytes.push(b'\\'),
                    b'/' => bytes.push(b'/'),
                    b'b' => bytes.push(0x08),
                    b'f' => bytes.push(0x0C),
                    b'n' => bytes.push(b'\n'),
                    b'r' => bytes.push(b'\r'),
                    b't' => bytes.push(b'\t'),
                    b'u' => {
                        let mut code_point: u32 = 0;
                        for _ in 0..4 {
                            let h = cur.peek().ok_or(ScanError::UnexpectedEof(cur.pos()))?;
                            let digit = (h as char)
                                .to_digit(16)
                                .ok_or(ScanError::InvalidEscape(esc))?;
                            code_point = (code_point << 4) | digit;
                            cur = cur.advance(1);
                        }
                        push_utf8(code_point, &mut bytes);
                    }
                    _ => return Err(ScanError::InvalidEscape(esc).into()),
                }
            }
            Some(b) => {
                bytes.push(b);
                cur = cur.advance(1);
            }
        }
    }
    let s = String::from_utf8(bytes).map_err(|_| JsonError::InvalidUtf8)?;
    Ok((s, cur))
}

// Code points from `\uXXXX` never exceed 0xFFFF, so three bytes suffice.
fn push_utf8(code_point: u32, out: &mut Vec<u8>) {
    if code_point < 0x80 {
        out.push(code_point as u8);
    } else if code_point < 0x800 {
        out.push(0xC0 | (code_point >> 6) as u8);
        out.push(0x80 | (code_point & 0x3F) as u8);
    } else {
        out.push(0xE0 | (code_point >> 12) as u8);
        out.push(0x80 | ((code_point >> 6) & 0x3F) as u8);
        out.push(0x80 | (code_point & 0x3F) as u8);
    }
}
