//! Free-function text algorithms over plain character slices.
//!
//! A second, self-contained take on text processing: nothing here calls into
//! the text value type or the array utilities, and several operations
//! deliberately behave differently from their counterparts there. Whitespace
//! in this module is the space character only, splitting keeps empty
//! segments, and padding takes a copy count rather than a target width.
//!
//! - `edit` - reverse, replace, split, substring, padding
//! - `search` - prefix/suffix tests, occurrence scans, counting
//! - `trim` - space trimming and blankness

mod edit;
mod search;
mod trim;

pub use edit::{pad_left, pad_right, replace, reverse, split, substring, substring_from};
pub use search::{all_index, contains, count, ends_with, last_index, starts_with};
pub use trim::{is_blank, trim, trim_end, trim_start};
