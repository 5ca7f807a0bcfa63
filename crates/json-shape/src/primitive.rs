//! Primitive codecs: boolean, integer, floating point.

use json_shape_cursor::{scan, Cursor};

use crate::codec::JsonCodec;
use crate::error::JsonError;

impl JsonCodec for bool {
    fn write_to(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
        let cur = cur.trim();
        if let Some(cur) = cur.strip_prefix(b"true") {
            Ok((true, cur))
        } else if let Some(cur) = cur.strip_prefix(b"false") {
            Ok((false, cur))
        } else {
            Err(JsonError::Invalid(cur.pos()))
        }
    }
}

macro_rules! integer_codec {
    ($($t:ty),* $(,)?) => {$(
        impl JsonCodec for $t {
            fn write_to(&self, out: &mut String) {
                out.push_str(&self.to_string());
            }

            fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
                let cur = cur.trim();
                let start = cur.pos();
                #[allow(unused_comparisons)]
                let signed = <$t>::MIN < 0;
                let (mut cur, negative) = if signed {
                    cur.try_consume(b'-')
                } else {
                    (cur, false)
                };
                // Accumulate in negative space so MIN parses without
                // overflowing on the final digit.
                let mut value: $t = 0;
                let mut digits = 0usize;
                while let Some(b) = cur.peek().filter(|b| b.is_ascii_digit()) {
                    let digit = (b - b'0') as $t;
                    value = value
                        .checked_mul(10)
                        .and_then(|v| {
                            if signed {
                                v.checked_sub(digit)
                            } else {
                                v.checked_add(digit)
                            }
                        })
                        .ok_or(JsonError::IntegerOverflow(start))?;
                    cur = cur.advance(1);
                    digits += 1;
                }
                if digits == 0 {
                    return Err(JsonError::Invalid(cur.pos()));
                }
                if signed && !negative {
                    value = value
                        .checked_neg()
                        .ok_or(JsonError::IntegerOverflow(start))?;
                }
                Ok((value, cur))
            }
        }
    )*};
}

integer_codec!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Write policy: shortest round-trip decimal form. NaN renders as `null`,
// infinities clamp to a largest-magnitude literal, and integral values below
// 1e15 render without a fractional part.
macro_rules! float_codec {
    ($t:ty, $inf:literal, $neg_inf:literal) => {
        impl JsonCodec for $t {
            fn write_to(&self, out: &mut String) {
                let f = *self;
                if f.is_nan() {
                    out.push_str("null");
                } else if f.is_infinite() {
                    out.push_str(if f > 0.0 { $inf } else { $neg_inf });
                } else if f.fract() == 0.0 && f.abs() < 1e15 {
                    out.push_str(&format!("{}", f as i64));
                } else {
                    out.push_str(&format!("{}", f));
                }
            }

            fn read_to<'a>(cur: Cursor<'a>) -> Result<(Self, Cursor<'a>), JsonError> {
                let cur = cur.trim();
                let end = scan::skip_number(cur)?;
                let text = std::str::from_utf8(cur.slice_to(&end))
                    .map_err(|_| JsonError::InvalidUtf8)?;
                let value: $t = text
                    .parse()
                    .map_err(|_| JsonError::Invalid(cur.pos()))?;
                Ok((value, end))
            }
        }
    };
}

float_codec!(f32, "3.4e38", "-3.4e38");
float_codec!(f64, "1e308", "-1e308");
