//! Enumeration codec: a quoted identifier, resolved through a per-type
//! static table of `(name, discriminant)` pairs built by [`json_enum!`].
//!
//! When the declared discriminants form a contiguous ascending run the name
//! lookup on write is a direct index offset by the minimum; otherwise it
//! falls back to a linear scan of the table. A discriminant with no matching
//! enumerator writes as `""`, never an error; an unknown name on read is
//! fatal.

use json_shape_cursor::Cursor;

use crate::error::JsonError;

/// Registration surface for fieldless enums, normally implemented by
/// [`json_enum!`](crate::json_enum).
pub trait JsonEnum: Sized {
    /// `(name, discriminant)` pairs in declaration order.
    const VARIANTS: &'static [(&'static str, i64)];

    /// Whether `VARIANTS` discriminants form an unbroken ascending run.
    const CONTIGUOUS: bool = is_contiguous(Self::VARIANTS);

    /// The value's underlying discriminant.
    fn discriminant(&self) -> i64;

    /// The enumerator with the given discriminant, if declared.
    fn from_discriminant(value: i64) -> Option<Self>;
}

/// Contiguity check, evaluated at compile time per enum type.
pub const fn is_contiguous(table: &[(&'static str, i64)]) -> bool {
    if table.is_empty() {
        return false;
    }
    let mut i = 1;
    while i < table.len() {
        if table[i].1 != table[i - 1].1 + 1 {
            return false;
        }
        i += 1;
    }
    true
}

/// Resolves a discriminant to its declared name, or `""` when no
/// enumerator matches.
pub fn name_of<E: JsonEnum>(value: i64) -> &'static str {
    let table = E::VARIANTS;
    if E::CONTIGUOUS {
        let min = table[0].1;
        match value.checked_sub(min) {
            Some(index) if index >= 0 && (index as usize) < table.len() => {
                table[index as usize].0
            }
            _ => "",
        }
    } else {
        table
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }
}

/// Resolves a declared name to its discriminant.
pub fn value_of<E: JsonEnum>(name: &str) -> Option<i64> {
    E::VARIANTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
}

/// Appends the quoted name of `value` to `out`.
pub fn write_enum<E: JsonEnum>(value: &E, out: &mut String) {
    out.push('"');
    out.push_str(name_of::<E>(value.discriminant()));
    out.push('"');
}

/// Reads a quoted identifier and resolves it through the table.
pub fn read_enum<'a, E: JsonEnum>(cur: Cursor<'a>) -> Result<(E, Cursor<'a>), JsonError> {
    let cur = cur.trim_expect(b'"')?;
    let start = cur;
    let mut end = cur;
    loop {
        let (next, ident) =
            end.try_consume_if(|b| b.is_ascii_alphanumeric() || b == b'_');
        end = next;
        if !ident {
            break;
        }
    }
    let name = std::str::from_utf8(start.slice_to(&end))
        .map_err(|_| JsonError::InvalidUtf8)?;
    let cur = end.expect(b'"')?;
    value_of::<E>(name)
        .and_then(E::from_discriminant)
        .map(|value| (value, cur))
        .ok_or_else(|| JsonError::UnknownEnumerator {
            name: name.to_string(),
            pos: start.pos(),
        })
}

/// Defines a fieldless enum and registers its JSON codec.
///
/// The enum serializes as its enumerator's name in quotes. Explicit
/// discriminants are allowed; names and values are recorded in declaration
/// order.
///
/// ```
/// use json_shape::{deserialize, json_enum, serialize};
///
/// json_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Weekday { Monday, Tuesday, Wednesday }
/// }
///
/// assert_eq!(serialize(&Weekday::Tuesday), "\"Tuesday\"");
/// assert_eq!(deserialize::<Weekday>("\"Monday\"").unwrap(), Weekday::Monday);
/// ```
#[macro_export]
macro_rules! json_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident $(= $disc:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $variant $(= $disc)?, )*
        }

        impl $crate::JsonEnum for $name {
            const VARIANTS: &'static [(&'static str, i64)] = &[
                $( (stringify!($variant), $name::$variant as i64), )*
            ];

            fn discriminant(&self) -> i64 {
                match self {
                    $( $name::$variant => $name::$variant as i64, )*
                }
            }

            fn from_discriminant(value: i64) -> ::std::option::Option<Self> {
                match value {
                    $( v if v == $name::$variant as i64 =>
                        ::std::option::Option::Some($name::$variant), )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl $crate::JsonCodec for $name {
            fn write_to(&self, out: &mut ::std::string::String) {
                $crate::enumeration::write_enum(self, out);
            }

            fn read_to<'a>(
                cur: $crate::Cursor<'a>,
            ) -> ::std::result::Result<(Self, $crate::Cursor<'a>), $crate::JsonError> {
                $crate::enumeration::read_enum(cur)
            }
        }
    };
}
