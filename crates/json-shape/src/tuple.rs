//! Fixed-arity codecs: tuples, the unit tuple, and `[T; N]` arrays.
//!
//! Arity is part of the type, so the wrong element count surfaces as a
//! missing `,` or `]` at the offending position.

use json_shape_cursor::Cursor;

use crate::codec::JsonCodec;
use crate::error::JsonError;

impl JsonCodec for () {
    fn write_to(&self, out: &mut String) {
        out.push_str("[]");
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        let cur = cur.trim_expect(b'[')?.trim_expect(b']')?;
        Ok(((), cur))
    }
}

macro_rules! tuple_codec {
    ($first:ident $(, $rest:ident)*) => {
        #[allow(non_snake_case)]
        impl<$first: JsonCodec $(, $rest: JsonCodec)*> JsonCodec
            for ($first, $($rest,)*)
        {
            fn write_to(&self, out: &mut String) {
                let ($first, $($rest,)*) = self;
                out.push('[');
                $first.write_to(out);
                $(
                    out.push(',');
                    $rest.write_to(out);
                )*
                out.push(']');
            }

            fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
                let cur = cur.trim_expect(b'[')?;
                let ($first, cur) = <$first>::read_to(cur)?;
                $(
                    let cur = cur.trim_expect(b',')?;
                    let ($rest, cur) = <$rest>::read_to(cur)?;
                )*
                let cur = cur.trim_expect(b']')?;
                Ok((($first, $($rest,)*), cur))
            }
        }
    };
}

tuple_codec!(A);
tuple_codec!(A, B);
tuple_codec!(A, B, C);
tuple_codec!(A, B, C, D);
tuple_codec!(A, B, C, D, E);
tuple_codec!(A, B, C, D, E, F);
tuple_codec!(A, B, C, D, E, F, G);
tuple_codec!(A, B, C, D, E, F, G, H);

impl<T: JsonCodec, const N: usize> JsonCodec for [T; N] {
    fn write_to(&self, out: &mut String) {
        crate::sequence::write_seq(self, out);
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        let start = cur.trim();
        let mut cur = start.expect(b'[')?;
        let mut elements = Vec::with_capacity(N);
        for i in 0..N {
            if i > 0 {
                cur = cur.trim_expect(b',')?;
            }
            let (element, rest) = T::read_to(cur)?;
            elements.push(element);
            cur = rest;
        }
        let cur = cur.trim_expect(b']')?;
        let array: [T; N] = elements
            .try_into()
            .map_err(|_| JsonError::Invalid(start.pos()))?;
        Ok((array, cur))
    }
}
