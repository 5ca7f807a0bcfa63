//! Associative map codec: `{"k1":v1,…}` with string keys.
//!
//! Write follows the container's own iteration order (sorted for
//! `BTreeMap`, unspecified for `HashMap`). On read a duplicate key is not
//! an error; the last occurrence wins, as plain map insertion dictates.

use std::collections::{BTreeMap, HashMap};

use json_shape_cursor::Cursor;

use crate::codec::JsonCodec;
use crate::error::JsonError;
use crate::string;

pub(crate) fn write_map<'v, V, I>(entries: I, out: &mut String)
where
    V: JsonCodec + 'v,
    I: IntoIterator<Item = (&'v String, &'v V)>,
{
    out.push('{');
    let mut first = true;
    for (key, value) in entries {
        if !first {
            out.push(',');
        }
        string::write_escaped(key, out);
        out.push(':');
        value.write_to(out);
        first = false;
    }
    out.push('}');
}

pub(crate) fn read_map<'a, V, M>(cur: Cursor<'a>) -> Result<(M, Cursor<'a>), JsonError>
where
    V: JsonCodec,
    M: Default + Extend<(String, V)>,
{
    let cur = cur.trim_expect(b'{')?.trim();
    let mut map = M::default();
    let (mut cur, empty) = cur.try_consume(b'}');
    if empty {
        return Ok((map, cur));
    }
    loop {
        let (key, rest) = string::read_string(cur)?;
        let rest = rest.trim_expect(b':')?;
        let (value, rest) = V::read_to(rest)?;
        map.extend(std::iter::once((key, value)));
        cur = rest.trim();
        let (next, more) = cur.try_consume(b',');
        cur = next;
        if !more {
            break;
        }
    }
    let cur = cur.trim_expect(b'}')?;
    Ok((map, cur))
}

impl<V: JsonCodec> JsonCodec for BTreeMap<String, V> {
    fn write_to(&self, out: &mut String) {
        write_map(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        read_map(cur)
    }
}

impl<V: JsonCodec> JsonCodec for HashMap<String, V> {
    fn write_to(&self, out: &mut String) {
        write_map(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        read_map(cur)
    }
}
