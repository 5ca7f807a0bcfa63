//! Property tests: arbitrary values round-trip through the codec, and the
//! scanner's extent contract holds for arbitrary serialized values.

use std::collections::BTreeMap;

use json_shape::{deserialize, serialize, skip_value, Cursor, JsonCodec};
use proptest::prelude::*;

fn roundtrips<T: JsonCodec + PartialEq + std::fmt::Debug>(value: &T) {
    let text = serialize(value);
    let decoded: T = deserialize(&text).unwrap();
    assert_eq!(&decoded, value, "text: {text}");
}

proptest! {
    #[test]
    fn signed_integers(value in any::<i64>()) {
        roundtrips(&value);
    }

    #[test]
    fn unsigned_integers(value in any::<u64>()) {
        roundtrips(&value);
    }

    #[test]
    fn finite_floats(value in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO) {
        roundtrips(&value);
    }

    #[test]
    fn arbitrary_strings(value in any::<String>()) {
        roundtrips(&value);
    }

    #[test]
    fn integer_sequences(value in proptest::collection::vec(any::<i32>(), 0..32)) {
        roundtrips(&value);
    }

    #[test]
    fn string_keyed_maps(value in proptest::collection::btree_map(any::<String>(), any::<i32>(), 0..16)) {
        roundtrips(&value);
    }

    #[test]
    fn optionals(value in proptest::option::of(any::<i32>())) {
        roundtrips(&value);
    }

    #[test]
    fn skip_value_stops_exactly_at_trailing_bytes(
        value in proptest::collection::vec(any::<i16>(), 0..8),
        trailer in "[ -~]{0,12}",
    ) {
        let mut text = serialize(&value);
        let value_len = text.len();
        text.push_str(&trailer);
        let cur = skip_value(Cursor::new(&text)).unwrap();
        prop_assert_eq!(cur.pos(), value_len);
    }

    #[test]
    fn nested_map_of_tuples(value in proptest::collection::btree_map(
        "[a-z]{1,8}",
        (any::<i32>(), proptest::collection::vec(any::<u8>(), 0..4)),
        0..8,
    )) {
        let value: BTreeMap<String, (i32, Vec<u8>)> = value;
        roundtrips(&value);
    }
}
