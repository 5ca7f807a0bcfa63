//! Grammar scanner: advances a cursor past one JSON value without
//! interpreting it.
//!
//! This is the fallback path used when an object key is not recognized by a
//! record codec; the skipped value's textual extent is all that matters, no
//! decoded value is produced. Each function takes the cursor by value and
//! returns a cursor positioned exactly past the value it consumed.

use crate::{Cursor, ScanError};

/// Skips one JSON value of any kind, dispatching on the first
/// non-whitespace character.
pub fn skip_value(cur: Cursor) -> Result<Cursor, ScanError> {
    let cur = cur.trim();
    match cur.peek() {
        Some(b'{') => skip_object(cur),
        Some(b'[') => skip_array(cur),
        Some(b'"') => skip_string(cur),
        Some(_) => skip_other(cur),
        None => Err(ScanError::UnexpectedEof(cur.pos())),
    }
}

/// Skips a `{"key":value,…}` object.
pub fn skip_object(cur: Cursor) -> Result<Cursor, ScanError> {
    let cur = cur.trim_expect(b'{')?.trim();
    let (mut cur, empty) = cur.try_consume(b'}');
    if empty {
        return Ok(cur);
    }
    loop {
        cur = skip_string(cur)?;
        cur = cur.trim_expect(b':')?;
        cur = skip_value(cur)?;
        cur = cur.trim();
        let (next, more) = cur.try_consume(b',');
        cur = next;
        if !more {
            break;
        }
    }
    cur.trim_expect(b'}')
}

/// Skips a `[value,…]` array.
pub fn skip_array(cur: Cursor) -> Result<Cursor, ScanError> {
    let cur = cur.trim_expect(b'[')?.trim();
    let (mut cur, empty) = cur.try_consume(b']');
    if empty {
        return Ok(cur);
    }
    loop {
        cur = skip_value(cur)?;
        cur = cur.trim();
        let (next, more) = cur.try_consume(b',');
        cur = next;
        if !more {
            break;
        }
    }
    cur.trim_expect(b']')
}

/// Skips a quoted string, validating its escape sequences but decoding
/// nothing. Raw control characters (0x00–0x1F) are illegal.
pub fn skip_string(cur: Cursor) -> Result<Cursor, ScanError> {
    let mut cur = cur.trim_expect(b'"')?;
    loop {
        match cur.peek() {
            None => return Err(ScanError::UnexpectedEof(cur.pos())),
            Some(b'"') => return Ok(cur.advance(1)),
            Some(b) if b < 0x20 => return Err(ScanError::ControlCharacter(cur.pos())),
            Some(b'\\') => {
                let esc = cur.pos();
                cur = cur.advance(1);
                match cur.peek() {
                    None => return Err(ScanError::UnexpectedEof(cur.pos())),
                    Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {
                        cur = cur.advance(1);
                    }
                    Some(b'u') => {
                        cur = cur.advance(1);
                        for _ in 0..4 {
                            let (next, hex) = cur.try_consume_if(|b| b.is_ascii_hexdigit());
                            if !hex {
                                return Err(if next.is_empty() {
                                    ScanError::UnexpectedEof(next.pos())
                                } else {
                                    ScanError::InvalidEscape(esc)
                                });
                            }
                            cur = next;
                        }
                    }
                    Some(_) => return Err(ScanError::InvalidEscape(esc)),
                }
            }
            Some(_) => cur = cur.advance(1),
        }
    }
}

/// Skips a `true`/`false`/`null` literal or, failing those, a number.
pub fn skip_other(cur: Cursor) -> Result<Cursor, ScanError> {
    let cur = cur.trim();
    for literal in [&b"true"[..], &b"false"[..], &b"null"[..]] {
        if let Some(cur) = cur.strip_prefix(literal) {
            return Ok(cur);
        }
    }
    skip_number(cur)
}

/// Skips a JSON number: optional `-`, then a single `0` or a nonzero digit
/// followed by digits, optional fraction, optional exponent.
pub fn skip_number(cur: Cursor) -> Result<Cursor, ScanError> {
    let start = cur.pos();
    let (cur, _) = cur.try_consume(b'-');
    let (cur, zero) = cur.try_consume(b'0');
    let mut cur = cur;
    if !zero {
        let (next, nonzero) = cur.try_consume_if(|b| (b'1'..=b'9').contains(&b));
        if !nonzero {
            return Err(ScanError::InvalidNumber(start));
        }
        cur = digit_run(next).0;
    }
    let (next, frac) = cur.try_consume(b'.');
    cur = next;
    if frac {
        let (next, count) = digit_run(cur);
        if count == 0 {
            return Err(ScanError::InvalidNumber(next.pos()));
        }
        cur = next;
    }
    let (next, exp) = cur.try_consume_if(|b| b == b'e' || b == b'E');
    cur = next;
    if exp {
        let (next, _) = cur.try_consume_if(|b| b == b'+' || b == b'-');
        let (next, count) = digit_run(next);
        if count == 0 {
            return Err(ScanError::InvalidNumber(next.pos()));
        }
        cur = next;
    }
    Ok(cur)
}

fn digit_run(mut cur: Cursor) -> (Cursor, usize) {
    let mut count = 0;
    loop {
        let (next, digit) = cur.try_consume_if(|b| b.is_ascii_digit());
        cur = next;
        if !digit {
            return (cur, count);
        }
        count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumed(input: &str) -> usize {
        skip_value(Cursor::new(input)).unwrap().pos()
    }

    #[test]
    fn skip_value_consumes_exactly_one_value() {
        let cases: &[(&str, usize)] = &[
            ("\ttrue", 5),
            ("\nfalse ", 6),
            ("null, null", 4),
            ("\"simple string\" ", 15),
            (r#""string \t with \n escape characters\n\r", [3, 2]"#, 41),
            // 꼉 is three bytes, so the closing quote sits at byte 24.
            (r#""string with 꼉 unicode", 99999.32"#, 25),
            ("42", 2),
            ("17.3", 4),
            ("-1", 2),
            ("13.8e10", 7),
            ("-7432E-4", 8),
            ("1e1", 3),
            ("1E0", 3),
            ("0", 1),
            ("[]", 2),
            ("[\"hello range\"]", 15),
            ("[ 13e-10, 42.2 , \"not empty \" ] ", 31),
            ("{  }", 4),
            (r#"{ "alpha": 2.3, "beta": 50.0 }"#, 30),
        ];
        for (input, pos) in cases {
            assert_eq!(consumed(input), *pos, "input: {input:?}");
        }
    }

    #[test]
    fn skip_value_leaves_trailing_bytes() {
        let cur = skip_value(Cursor::new("[1,2,{\"x\":3}]trailing")).unwrap();
        assert_eq!(cur.rest(), b"trailing");
    }

    #[test]
    fn nested_containers_recurse() {
        let input = r#"{"a":[{"b":{}},[[]],"c"],"d":null} "#;
        let cur = skip_value(Cursor::new(input)).unwrap();
        assert_eq!(cur.rest(), b" ");
    }

    #[test]
    fn string_escapes_are_validated() {
        assert!(skip_string(Cursor::new(r#""ok \" \\ \/ \b \f \n \r \t ÿ""#)).is_ok());
        assert_eq!(
            skip_string(Cursor::new(r#""bad \x""#)),
            Err(ScanError::InvalidEscape(5))
        );
        assert_eq!(
            skip_string(Cursor::new(r#""bad \u12g4""#)),
            Err(ScanError::InvalidEscape(5))
        );
        assert_eq!(
            skip_string(Cursor::new("\"raw \x01 control\"")),
            Err(ScanError::ControlCharacter(5))
        );
        assert_eq!(
            skip_string(Cursor::new("\"unterminated")),
            Err(ScanError::UnexpectedEof(13))
        );
    }

    #[test]
    fn number_grammar_is_enforced() {
        assert!(skip_number(Cursor::new("0")).is_ok());
        assert!(skip_number(Cursor::new("-0")).is_ok());
        assert!(skip_number(Cursor::new("10.25e+3")).is_ok());
        assert_eq!(
            skip_number(Cursor::new("abc")),
            Err(ScanError::InvalidNumber(0))
        );
        assert_eq!(skip_number(Cursor::new("-")), Err(ScanError::InvalidNumber(0)));
        assert_eq!(
            skip_number(Cursor::new("1.e5")),
            Err(ScanError::InvalidNumber(2))
        );
        assert_eq!(
            skip_number(Cursor::new("1e")),
            Err(ScanError::InvalidNumber(2))
        );
    }

    #[test]
    fn unterminated_containers_fail() {
        assert!(skip_value(Cursor::new("[1,2")).is_err());
        assert!(skip_value(Cursor::new("{\"a\":1")).is_err());
        assert!(skip_value(Cursor::new("")).is_err());
    }
}
