//! Codec error type.

use json_shape_cursor::ScanError;
use thiserror::Error;

/// Error type for JSON encoding/decoding operations.
///
/// Three families, all equally fatal: grammar violations (wrapped
/// [`ScanError`]), value violations (overflow, unknown enumerator), and
/// record-completeness violations (missing required field). A failed decode
/// aborts at the first fault; there is no recovery or partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("invalid value at offset {0}")]
    Invalid(usize),
    #[error("invalid UTF-8 in string literal")]
    InvalidUtf8,
    #[error("integer out of range at offset {0}")]
    IntegerOverflow(usize),
    #[error("unknown enumerator `{name}` at offset {pos}")]
    UnknownEnumerator { name: String, pos: usize },
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}
