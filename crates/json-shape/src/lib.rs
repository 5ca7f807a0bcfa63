//! Type-directed structural JSON codec.
//!
//! Converts native compound values — records, tuples, sequences, maps,
//! optionals, enumerations, and primitives — to and from JSON text. The
//! mapping is driven purely by the static shape of the type: one codec per
//! category, composed recursively through the [`JsonCodec`] trait, so a
//! vector of structs containing maps of tuples just works. There is no
//! document model; JSON values exist only as text being consumed or
//! produced.
//!
//! Record and enum types register through the [`json_record!`] and
//! [`json_enum!`] macros, which stand in for field reflection: they define
//! the type and derive its codec from the declared shape, checked at
//! compile time.
//!
//! # Example
//!
//! ```
//! use json_shape::{deserialize, json_enum, json_record, serialize};
//!
//! json_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Gender { Male, Female }
//! }
//!
//! json_record! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Person {
//!         pub name: String,
//!         pub age: i32,
//!         pub gender: Gender,
//!     }
//! }
//!
//! let text = serialize(&Person {
//!     name: "techatrix".to_string(),
//!     age: -1,
//!     gender: Gender::Male,
//! });
//! assert_eq!(text, r#"{"name":"techatrix","age":-1,"gender":"Male"}"#);
//!
//! let person: Person = deserialize(&text).unwrap();
//! assert_eq!(person.age, -1);
//! ```
//!
//! Decoding is tolerant of unknown object keys (they are skipped via the
//! grammar scanner) and of key order; it is strict about everything else:
//! malformed grammar, numeric overflow, unknown enumerator names, and
//! missing required fields all abort with a [`JsonError`].

mod codec;
mod error;
mod map;
mod optional;
mod primitive;
mod record;
mod sequence;
mod string;
mod tuple;

pub mod enumeration;

pub use codec::JsonCodec;
pub use enumeration::JsonEnum;
pub use error::JsonError;
pub use json_shape_cursor::scan::skip_value;
pub use json_shape_cursor::{Cursor, ScanError};

/// Serializes a value to JSON text.
pub fn serialize<T: JsonCodec>(value: &T) -> String {
    let mut out = String::new();
    value.write_to(&mut out);
    out
}

/// Deserializes a value from JSON text.
///
/// Leading whitespace and trailing text after the value are ignored; use
/// [`JsonCodec::read_to`] to observe how much input was consumed.
pub fn deserialize<T: JsonCodec>(text: &str) -> Result<T, JsonError> {
    let (value, _) = T::read_to(Cursor::new(text))?;
    Ok(value)
}
