//! Text cursor and JSON grammar scanner.
//!
//! [`Cursor`] is a non-owning `(buffer, position)` view over a text buffer.
//! Parsing never mutates shared state: every operation consumes a cursor by
//! value and returns the advanced cursor, so a decode step can be retried or
//! abandoned by simply keeping the old copy.

mod error;
pub mod scan;

pub use error::ScanError;

/// An immutable view over the remaining unparsed text of a buffer.
///
/// The cursor is `Copy`; operations return a new cursor past the consumed
/// characters instead of mutating in place.
///
/// # Example
///
/// ```
/// use json_shape_cursor::Cursor;
///
/// let cur = Cursor::new("  [1]");
/// let cur = cur.trim_expect(b'[').unwrap();
/// assert_eq!(cur.pos(), 3);
/// assert_eq!(cur.rest(), b"1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            buf: text.as_bytes(),
            pos: 0,
        }
    }

    /// Byte offset from the start of the underlying buffer.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Remaining unparsed bytes.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// True when the whole buffer has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The current byte, if any. Does not advance.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Advances past `n` bytes, saturating at the end of the buffer.
    pub fn advance(self, n: usize) -> Self {
        Self {
            pos: (self.pos + n).min(self.buf.len()),
            ..self
        }
    }

    /// Removes leading JSON whitespace (space, `\t`, `\n`, `\r`).
    pub fn trim(self) -> Self {
        let mut pos = self.pos;
        while let Some(b) = self.buf.get(pos) {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
                _ => break,
            }
        }
        Self { pos, ..self }
    }

    /// Requires the current byte to be `c` and advances past it.
    pub fn expect(self, c: u8) -> Result<Self, ScanError> {
        match self.peek() {
            Some(b) if b == c => Ok(self.advance(1)),
            Some(_) => Err(ScanError::Expected {
                expected: c as char,
                pos: self.pos,
            }),
            None => Err(ScanError::UnexpectedEof(self.pos)),
        }
    }

    /// `trim` followed by `expect`.
    pub fn trim_expect(self, c: u8) -> Result<Self, ScanError> {
        self.trim().expect(c)
    }

    /// Advances past `c` if it is the current byte. Returns the (possibly
    /// unchanged) cursor and whether the byte was consumed.
    pub fn try_consume(self, c: u8) -> (Self, bool) {
        if self.peek() == Some(c) {
            (self.advance(1), true)
        } else {
            (self, false)
        }
    }

    /// Advances past the current byte if `pred` accepts it.
    pub fn try_consume_if(self, pred: impl Fn(u8) -> bool) -> (Self, bool) {
        match self.peek() {
            Some(b) if pred(b) => (self.advance(1), true),
            _ => (self, false),
        }
    }

    /// Advances past `prefix` if the remaining text starts with it.
    pub fn strip_prefix(self, prefix: &[u8]) -> Option<Self> {
        if self.rest().starts_with(prefix) {
            Some(self.advance(prefix.len()))
        } else {
            None
        }
    }

    /// The bytes between this cursor and `end`, which must be a cursor over
    /// the same buffer at an equal or later position.
    pub fn slice_to(&self, end: &Cursor<'a>) -> &'a [u8] {
        &self.buf[self.pos..end.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_removes_leading_whitespace_only() {
        assert_eq!(Cursor::new("hello world").trim().pos(), 0);
        assert_eq!(Cursor::new(" \r hello world ").trim().pos(), 3);
        assert_eq!(Cursor::new("\n \t hello world").trim().pos(), 4);
        assert_eq!(Cursor::new("   ").trim().rest(), b"");
    }

    #[test]
    fn expect_consumes_one_byte() {
        assert_eq!(Cursor::new("abc").expect(b'a').unwrap().rest(), b"bc");
        assert_eq!(Cursor::new("cba").expect(b'c').unwrap().rest(), b"ba");
        assert_eq!(
            Cursor::new("cba").expect(b'a'),
            Err(ScanError::Expected {
                expected: 'a',
                pos: 0
            })
        );
        assert_eq!(Cursor::new("").expect(b' '), Err(ScanError::UnexpectedEof(0)));
    }

    #[test]
    fn trim_expect_skips_whitespace_first() {
        assert_eq!(
            Cursor::new("\t\thello trim!").trim_expect(b'h').unwrap().pos(),
            3
        );
        assert_eq!(Cursor::new("\t\n [] ").trim_expect(b'[').unwrap().pos(), 4);
        assert_eq!(Cursor::new("?").trim_expect(b'?').unwrap().pos(), 1);
        assert!(Cursor::new("\t\n [] ").trim_expect(b']').is_err());
    }

    #[test]
    fn try_consume_is_a_no_op_on_mismatch() {
        let (cur, ok) = Cursor::new("G").try_consume(b'G');
        assert!(ok);
        assert_eq!(cur.pos(), 1);

        let (cur, ok) = Cursor::new("G").try_consume(b'g');
        assert!(!ok);
        assert_eq!(cur.pos(), 0);

        let (_, ok) = Cursor::new("  -0.5e-10").try_consume(b'-');
        assert!(!ok);

        let (_, ok) = Cursor::new("").try_consume(b' ');
        assert!(!ok);
    }

    #[test]
    fn try_consume_if_checks_the_predicate() {
        let (cur, ok) = Cursor::new("abcdef").try_consume_if(|b| b.is_ascii_alphabetic());
        assert!(ok);
        assert_eq!(cur.pos(), 1);

        let (_, ok) = Cursor::new("abcdef").try_consume_if(|b| b.is_ascii_digit());
        assert!(!ok);

        let (_, ok) = Cursor::new("").try_consume_if(|_| true);
        assert!(!ok);
    }

    #[test]
    fn strip_prefix_matches_whole_literals() {
        assert_eq!(
            Cursor::new("null, null").strip_prefix(b"null").unwrap().pos(),
            4
        );
        assert!(Cursor::new("nul").strip_prefix(b"null").is_none());
    }

    #[test]
    fn slice_to_returns_the_consumed_span() {
        let start = Cursor::new("12345abc").trim();
        let end = start.advance(5);
        assert_eq!(start.slice_to(&end), b"12345");
    }
}
