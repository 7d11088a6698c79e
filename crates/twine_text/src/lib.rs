//! Immutable text value type over a fixed-length character buffer.
//!
//! - `Text` - value-semantic character sequence; operations return new values
//! - `TextError` - contract violations (bad indexes and ranges, empty search
//!   values); "not found" is reported through `Option`, never through errors

mod error;
mod text;

pub use error::TextError;
pub use text::Text;
