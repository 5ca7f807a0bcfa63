//! Sequence codec: `[v1,v2,…]` for growable homogeneous containers.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use json_shape_cursor::Cursor;

use crate::codec::JsonCodec;
use crate::error::JsonError;

pub(crate) fn write_seq<'v, T, I>(elements: I, out: &mut String)
where
    T: JsonCodec + 'v,
    I: IntoIterator<Item = &'v T>,
{
    out.push('[');
    let mut first = true;
    for element in elements {
        if !first {
            out.push(',');
        }
        element.write_to(out);
        first = false;
    }
    out.push(']');
}

pub(crate) fn read_seq<'a, T, C>(cur: Cursor<'a>) -> Result<(C, Cursor<'a>), JsonError>
where
    T: JsonCodec,
    C: Default + Extend<T>,
{
    let cur = cur.trim_expect(b'[')?.trim();
    let mut container = C::default();
    let (mut cur, empty) = cur.try_consume(b']');
    if empty {
        return Ok((container, cur));
    }
    loop {
        let (element, rest) = T::read_to(cur)?;
        container.extend(std::iter::once(element));
        cur = rest.trim();
        let (next, more) = cur.try_consume(b',');
        cur = next;
        if !more {
            break;
        }
    }
    let cur = cur.expect(b']')?;
    Ok((container, cur))
}

impl<T: JsonCodec> JsonCodec for Vec<T> {
    fn write_to(&self, out: &mut String) {
        write_seq(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        read_seq(cur)
    }
}

impl<T: JsonCodec + Ord> JsonCodec for BTreeSet<T> {
    fn write_to(&self, out: &mut String) {
        write_seq(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        read_seq(cur)
    }
}

impl<T: JsonCodec + Hash + Eq> JsonCodec for HashSet<T> {
    fn write_to(&self, out: &mut String) {
        write_seq(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        read_seq(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{deserialize, serialize};

    #[test]
    fn empty_sequences() {
        assert_eq!(serialize(&Vec::<i32>::new()), "[]");
        assert!(deserialize::<Vec<i32>>("[]").unwrap().is_empty());
        assert!(deserialize::<Vec<i32>>("[ ]").unwrap().is_empty());
    }

    #[test]
    fn element_order_is_preserved() {
        assert_eq!(deserialize::<Vec<i32>>("[1,2,3]").unwrap(), vec![1, 2, 3]);
        assert_eq!(serialize(&vec![1, 2, 3]), "[1,2,3]");
        assert_eq!(
            deserialize::<Vec<i32>>(" [ 3 , 2 , 1 ] ").unwrap(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn sets_rebuild_by_insertion() {
        let set: BTreeSet<String> =
            deserialize("[\"this is a string\",\"this is another string\"]").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("this is a string"));

        let dup: BTreeSet<i32> = deserialize("[1,1,2]").unwrap();
        assert_eq!(dup.len(), 2);
    }

    #[test]
    fn nested_sequences_compose() {
        let nested: Vec<Vec<i32>> = deserialize("[[1,2],[3,4]]").unwrap();
        assert_eq!(nested, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(serialize(&nested), "[[1,2],[3,4]]");
    }

    #[test]
    fn malformed_sequences_are_fatal() {
        assert!(deserialize::<Vec<i32>>("[1,2").is_err());
        assert!(deserialize::<Vec<i32>>("[1 2]").is_err());
        assert!(deserialize::<Vec<i32>>("1,2]").is_err());
    }
}
