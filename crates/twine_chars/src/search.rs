//! Occurrence scans and affix tests.

use crate::edit::{substring, substring_from};

/// Whether `text` begins with `probe`, decided by carving off the leading
/// substring and comparing it whole. The empty probe is a prefix of
/// everything.
pub fn starts_with(text: &[char], probe: &[char]) -> bool {
    match substring(text, 0, probe.len()) {
        Some(head) => head == probe,
        None => false,
    }
}

/// Whether `text` ends with `probe`, decided by carving off the trailing
/// substring and comparing it whole.
pub fn ends_with(text: &[char], probe: &[char]) -> bool {
    if probe.len() > text.len() {
        return false;
    }
    match substring_from(text, text.len() - probe.len()) {
        Some(tail) => tail == probe,
        None => false,
    }
}

/// Every position holding `value`, in ascending order.
pub fn all_index(text: &[char], value: char) -> Vec<usize> {
    let mut found = Vec::new();
    for (position, &c) in text.iter().enumerate() {
        if c == value {
            found.push(position);
        }
    }
    found
}

/// Last position holding `value`, or `None` when absent.
pub fn last_index(text: &[char], value: char) -> Option<usize> {
    all_index(text, value).last().copied()
}

/// Whether `probe` occurs anywhere in `text`, comparing a window at every
/// starting position. The empty probe is contained in everything.
pub fn contains(text: &[char], probe: &[char]) -> bool {
    if probe.is_empty() {
        return true;
    }
    if probe.len() > text.len() {
        return false;
    }
    for start in 0..=text.len() - probe.len() {
        if &text[start..start + probe.len()] == probe {
            return true;
        }
    }
    false
}

/// Number of occurrences of `value`.
pub fn count(text: &[char], value: char) -> usize {
    text.iter().filter(|&&c| c == value).count()
}
