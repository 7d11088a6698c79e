//! Error values for text operations.

use std::error::Error;
use std::fmt;

/// Contract violation reported by a [`Text`](crate::Text) operation.
///
/// Only genuine misuse lands here. A search that finds nothing is a
/// legitimate outcome and surfaces as `None` or an empty collection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// Single-position access outside the value.
    IndexOutOfRange { index: usize, len: usize },
    /// Range that does not fit inside the value.
    RangeOutOfRange {
        start: usize,
        count: usize,
        len: usize,
    },
    /// A substring search was handed an empty search value.
    EmptySearch,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for text of length {}", index, len)
            }
            TextError::RangeOutOfRange { start, count, len } => {
                write!(
                    f,
                    "Range start {} count {} out of range for text of length {}",
                    start, count, len
                )
            }
            TextError::EmptySearch => write!(f, "Search value must not be empty"),
        }
    }
}

impl Error for TextError {}
