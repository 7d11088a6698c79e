//! Space trimming. Whitespace in this module is the space character only;
//! tabs and newlines count as content.

use crate::edit::reverse;

/// Drops leading spaces. Once the first non-space character is seen, every
/// later character is kept, spaces included.
pub fn trim_start(text: &[char]) -> Vec<char> {
    let mut kept = Vec::with_capacity(text.len());
    let mut seen_content = false;
    for &c in text {
        if !seen_content && c == ' ' {
            continue;
        }
        seen_content = true;
        kept.push(c);
    }
    kept
}

/// Drops trailing spaces by reversing, trimming the front, and reversing
/// back.
pub fn trim_end(text: &[char]) -> Vec<char> {
    reverse(&trim_start(&reverse(text)))
}

/// Drops spaces from both ends.
pub fn trim(text: &[char]) -> Vec<char> {
    trim_start(&trim_end(text))
}

/// Whether the text is empty or entirely spaces.
pub fn is_blank(text: &[char]) -> bool {
    text.iter().all(|&c| c == ' ')
}
