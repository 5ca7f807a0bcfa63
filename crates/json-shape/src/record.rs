//! Record codec registration.
//!
//! Rust has no field reflection, so record types enter the codec through
//! [`json_record!`], which defines the struct and derives its codec in one
//! place. The generated read loop is the compile-time analogue of a
//! name→decoder lookup table: each declared field becomes a match arm bound
//! to that field's slot, unknown keys fall through to the grammar scanner's
//! `skip_value`, and per-field `Option` slots track initialization so a
//! missing required field is reported after the closing `}`.

/// Defines a struct and registers its JSON codec.
///
/// Fields serialize in declaration order as `"name":value`. On read, keys
/// may arrive in any order, unknown keys are skipped, and a duplicate key
/// overwrites the earlier value. A field marked with a trailing `= default`
/// falls back to `Default::default()` when its key is absent; any other
/// absent field is a fatal [`MissingField`](crate::JsonError::MissingField)
/// error.
///
/// ```
/// use json_shape::{deserialize, json_record, serialize};
///
/// json_record! {
///     #[derive(Debug, PartialEq)]
///     pub struct Person {
///         pub name: String,
///         pub age: i32,
///         pub nickname: Option<String> = default,
///     }
/// }
///
/// let person: Person = deserialize(r#"{"age":30,"name":"ada"}"#).unwrap();
/// assert_eq!(person.name, "ada");
/// assert_eq!(person.nickname, None);
/// assert_eq!(
///     serialize(&person),
///     r#"{"name":"ada","age":30,"nickname":null}"#
/// );
/// ```
#[macro_export]
macro_rules! json_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty $(= $marker:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty, )*
        }

        impl $crate::JsonCodec for $name {
            fn write_to(&self, out: &mut ::std::string::String) {
                out.push('{');
                let mut first = true;
                $(
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    out.push('"');
                    out.push_str(stringify!($field));
                    out.push_str("\":");
                    $crate::JsonCodec::write_to(&self.$field, out);
                )*
                let _ = first;
                out.push('}');
            }

            fn read_to<'a>(
                cur: $crate::Cursor<'a>,
            ) -> ::std::result::Result<(Self, $crate::Cursor<'a>), $crate::JsonError> {
                $(
                    let mut $field: ::std::option::Option<$fty> =
                        ::std::option::Option::None;
                )*
                let cur = cur.trim_expect(b'{')?.trim();
                let (mut cur, empty) = cur.try_consume(b'}');
                if !empty {
                    loop {
                        let (key, rest) =
                            <::std::string::String as $crate::JsonCodec>::read_to(cur)?;
                        let mut rest = rest.trim_expect(b':')?;
                        match key.as_str() {
                            $(
                                stringify!($field) => {
                                    let (value, after) =
                                        <$fty as $crate::JsonCodec>::read_to(rest)?;
                                    $field = ::std::option::Option::Some(value);
                                    rest = after;
                                }
                            )*
                            _ => {
                                rest = $crate::skip_value(rest)?;
                            }
                        }
                        cur = rest.trim();
                        let (next, more) = cur.try_consume(b',');
                        cur = next;
                        if !more {
                            break;
                        }
                    }
                    cur = cur.trim_expect(b'}')?;
                }
                ::std::result::Result::Ok((
                    Self {
                        $(
                            $field: match $field {
                                ::std::option::Option::Some(value) => value,
                                ::std::option::Option::None =>
                                    $crate::json_record!(@missing $field $(, $marker)?),
                            },
                        )*
                    },
                    cur,
                ))
            }
        }
    };

    (@missing $field:ident, default) => {
        ::std::default::Default::default()
    };
    (@missing $field:ident) => {
        return ::std::result::Result::Err($crate::JsonError::MissingField(
            stringify!($field),
        ))
    };
}
