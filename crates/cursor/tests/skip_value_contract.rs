//! Contract: `skip_value` consumes exactly the textual extent of one JSON
//! value, leaving the cursor at the first trailing byte.

use json_shape_cursor::scan::skip_value;
use json_shape_cursor::Cursor;

fn remainder<'a>(input: &'a str) -> &'a [u8] {
    skip_value(Cursor::new(input)).unwrap().rest()
}

#[test]
fn every_category_stops_at_the_trailing_bytes() {
    let values = [
        "true",
        "false",
        "null",
        "0",
        "-12.5e-3",
        "\"text with \\\"quotes\\\" and \\u0041\"",
        "[]",
        "[1, [2, [3]]]",
        "{}",
        "{\"k\": {\"nested\": [true, null]}}",
    ];
    let trailers = ["", " ", ",next", "]} garbage", "\t\r\n"];

    for value in values {
        for trailer in trailers {
            let input = format!("{value}{trailer}");
            assert_eq!(
                remainder(&input),
                trailer.as_bytes(),
                "value: {value:?}, trailer: {trailer:?}"
            );
        }
    }
}

#[test]
fn leading_whitespace_belongs_to_the_value() {
    assert_eq!(remainder("  \t\n 42,"), b",");
}

#[test]
fn object_keys_and_values_are_both_skipped() {
    let input = "{\"unknown\": [1, {\"deep\": \"\\\\\"}], \"other\": 2}tail";
    assert_eq!(remainder(input), b"tail");
}
