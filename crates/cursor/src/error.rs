//! Grammar scanner error type.

use thiserror::Error;

/// Error type for JSON grammar scanning. Every variant carries the byte
/// offset into the scanned text at which the fault was detected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEof(usize),
    #[error("expected `{expected}` at offset {pos}")]
    Expected { expected: char, pos: usize },
    #[error("illegal control character in string at offset {0}")]
    ControlCharacter(usize),
    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),
    #[error("invalid number at offset {0}")]
    InvalidNumber(usize),
}
