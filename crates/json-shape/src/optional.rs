//! Optional codec: a present value serializes as itself, absence as `null`.

use json_shape_cursor::Cursor;

use crate::codec::JsonCodec;
use crate::error::JsonError;

impl<T: JsonCodec> JsonCodec for Option<T> {
    fn write_to(&self, out: &mut String) {
        match self {
            Some(value) => value.write_to(out),
            None => out.push_str("null"),
        }
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        let cur = cur.trim();
        if let Some(cur) = cur.strip_prefix(b"null") {
            return Ok((None, cur));
        }
        let (inner, cur) = T::read_to(cur)?;
        Ok((Some(inner), cur))
    }
}
