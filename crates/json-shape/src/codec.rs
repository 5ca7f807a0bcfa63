//! The `JsonCodec` trait: one write/read pair per type category, composed
//! recursively and resolved entirely at compile time.

use json_shape_cursor::Cursor;

use crate::error::JsonError;

/// A type that knows its own JSON projection.
///
/// `write_to` appends the value's JSON text to the sink and never fails;
/// `read_to` decodes one value starting at `cur` (leading whitespace
/// allowed) and returns it together with a cursor positioned exactly past
/// the consumed text. Implementations own every character they consume, so
/// nested codecs compose by threading the returned cursor.
pub trait JsonCodec: Sized {
    /// Serializes `self`, appending to `out`.
    fn write_to(&self, out: &mut String);

    /// Decodes one value, returning it and the cursor past its extent.
    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError>;
}
