//! Immutable character-buffer text value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use twine_array as array;

use crate::TextError;

/// An immutable sequence of characters with value semantics.
///
/// The buffer is fixed at construction and never written through; every
/// "modifying" operation builds a new value. Clones share the buffer via
/// `Rc`, so copying a `Text` is cheap.
#[derive(Clone)]
pub struct Text {
    chars: Rc<[char]>,
}

impl Text {
    pub fn new() -> Self {
        Self::from_buffer(array::make(0))
    }

    /// Copies `chars` into a fresh buffer.
    pub fn from_chars(chars: &[char]) -> Self {
        let mut buffer = array::make(chars.len());
        array::copy_into(chars, &mut buffer, 0);
        Self::from_buffer(buffer)
    }

    pub fn from_str(s: &str) -> Self {
        let collected: Vec<char> = s.chars().collect();
        Self::from_chars(&collected)
    }

    fn from_buffer(buffer: Box<[char]>) -> Self {
        Self {
            chars: Rc::from(buffer),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`; valid positions are `[0, len)`.
    pub fn char_at(&self, index: usize) -> Result<char, TextError> {
        if index >= self.len() {
            return Err(TextError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.chars[index])
    }

    /// New value holding `self` followed by `other`.
    pub fn concat(&self, other: &Text) -> Text {
        let mut buffer = array::make(self.len() + other.len());
        array::copy_into(self.as_chars(), &mut buffer, 0);
        array::copy_into(other.as_chars(), &mut buffer, self.len());
        Self::from_buffer(buffer)
    }

    /// Polynomial content hash: seeded with 17, each character folds in as
    /// `hash * 31 + ordinal` (wrapping). Equal content gives equal hashes.
    pub fn content_hash(&self) -> u64 {
        let mut hash: u64 = 17;
        for &c in self.chars.iter() {
            hash = hash.wrapping_mul(31).wrapping_add(c as u64);
        }
        hash
    }

    /// Copy of `count` characters starting at `start`.
    ///
    /// Requires `start < len` and `start + count <= len`; in particular the
    /// empty value has no valid substring.
    pub fn substring(&self, start: usize, count: usize) -> Result<Text, TextError> {
        self.check_range(start, count)?;
        Ok(Self::from_chars(&self.chars[start..start + count]))
    }

    fn check_range(&self, start: usize, count: usize) -> Result<(), TextError> {
        let len = self.len();
        if start >= len || count > len - start {
            return Err(TextError::RangeOutOfRange { start, count, len });
        }
        Ok(())
    }

    /// First position of `value`, or `None` when absent.
    pub fn index_of_char(&self, value: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == value)
    }

    /// Last position of `value`, or `None` when absent.
    pub fn last_index_of_char(&self, value: char) -> Option<usize> {
        self.chars.iter().rposition(|&c| c == value)
    }

    /// First position where `value` occurs as a substring.
    ///
    /// An empty `value` is a contract violation; a `value` longer than
    /// `self` is simply not found.
    pub fn index_of(&self, value: &Text) -> Result<Option<usize>, TextError> {
        if value.is_empty() {
            return Err(TextError::EmptySearch);
        }
        let probe = value.as_chars();
        if probe.len() > self.len() {
            return Ok(None);
        }
        for start in 0..=self.len() - probe.len() {
            if self.chars[start..start + probe.len()] == *probe {
                return Ok(Some(start));
            }
        }
        Ok(None)
    }

    /// Per-character uppercase mapping; the length never changes.
    pub fn to_upper(&self) -> Text {
        self.map_chars(upper_char)
    }

    /// Per-character lowercase mapping; the length never changes.
    pub fn to_lower(&self) -> Text {
        self.map_chars(lower_char)
    }

    /// New value with every `old` replaced by `new`.
    pub fn replace_char(&self, old: char, new: char) -> Text {
        self.map_chars(|c| if c == old { new } else { c })
    }

    fn map_chars(&self, map: impl Fn(char) -> char) -> Text {
        let mut buffer = array::make(self.len());
        for (position, &c) in self.chars.iter().enumerate() {
            buffer[position] = map(c);
        }
        Self::from_buffer(buffer)
    }

    /// Strips leading and trailing whitespace. An all-whitespace value trims
    /// to the empty text, never an error.
    pub fn trim(&self) -> Text {
        let start = self.first_content();
        let end = self.last_content_end().max(start);
        Self::from_chars(&self.chars[start..end])
    }

    pub fn trim_start(&self) -> Text {
        Self::from_chars(&self.chars[self.first_content()..])
    }

    pub fn trim_end(&self) -> Text {
        Self::from_chars(&self.chars[..self.last_content_end()])
    }

    fn first_content(&self) -> usize {
        self.chars
            .iter()
            .position(|c| !c.is_whitespace())
            .unwrap_or(self.len())
    }

    fn last_content_end(&self) -> usize {
        self.chars
            .iter()
            .rposition(|c| !c.is_whitespace())
            .map_or(0, |position| position + 1)
    }

    /// Whether `value` occurs in `self`.
    pub fn contains_char(&self, value: char) -> bool {
        self.index_of_char(value).is_some()
    }

    /// Whether `self` begins with `value`. The empty value is a prefix of
    /// everything; a `value` longer than `self` is never a prefix.
    pub fn starts_with(&self, value: &Text) -> bool {
        let probe = value.as_chars();
        probe.len() <= self.len() && self.chars[..probe.len()] == *probe
    }

    /// Whether `self` ends with `value`.
    pub fn ends_with(&self, value: &Text) -> bool {
        let probe = value.as_chars();
        probe.len() <= self.len() && self.chars[self.len() - probe.len()..] == *probe
    }

    /// Splices `value` in front of position `index`; `index == len` appends.
    pub fn insert(&self, index: usize, value: &Text) -> Result<Text, TextError> {
        if index > self.len() {
            return Err(TextError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut buffer = array::make(self.len() + value.len());
        array::copy_into(&self.chars[..index], &mut buffer, 0);
        array::copy_into(value.as_chars(), &mut buffer, index);
        array::copy_into(&self.chars[index..], &mut buffer, index + value.len());
        Ok(Self::from_buffer(buffer))
    }

    /// Keeps `[0, index)` and drops the rest; requires `index < len`.
    pub fn remove_from(&self, index: usize) -> Result<Text, TextError> {
        if index >= self.len() {
            return Err(TextError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(Self::from_chars(&self.chars[..index]))
    }

    /// Excises `count` characters starting at `start`; same bounds contract
    /// as [`substring`](Self::substring).
    pub fn remove(&self, start: usize, count: usize) -> Result<Text, TextError> {
        self.check_range(start, count)?;
        let mut buffer = array::make(self.len() - count);
        array::copy_into(&self.chars[..start], &mut buffer, 0);
        array::copy_into(&self.chars[start + count..], &mut buffer, start);
        Ok(Self::from_buffer(buffer))
    }

    /// Splits on any of `separators`, keeping only non-empty runs.
    ///
    /// Consecutive separators and separators at either boundary contribute
    /// nothing, so the result never holds an empty value.
    pub fn split(&self, separators: &[char]) -> Vec<Text> {
        let mut segments = Vec::new();
        let mut run_start = 0;
        for (position, c) in self.chars.iter().enumerate() {
            if array::contains(separators, c) {
                if position > run_start {
                    segments.push(Self::from_chars(&self.chars[run_start..position]));
                }
                run_start = position + 1;
            }
        }
        if self.len() > run_start {
            segments.push(Self::from_chars(&self.chars[run_start..]));
        }
        segments
    }

    /// Pads to `width` with `pad` on the left; unchanged when
    /// `width <= len`.
    pub fn pad_left(&self, width: usize, pad: char) -> Text {
        if width <= self.len() {
            return self.clone();
        }
        let fill = width - self.len();
        let mut buffer = array::make(width);
        for slot in buffer.iter_mut().take(fill) {
            *slot = pad;
        }
        array::copy_into(self.as_chars(), &mut buffer, fill);
        Self::from_buffer(buffer)
    }

    /// Whether the value is empty or entirely whitespace.
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|c| c.is_whitespace())
    }

    /// New value with every whitespace character dropped.
    pub fn remove_whitespace(&self) -> Text {
        let kept: Vec<char> = self
            .chars
            .iter()
            .copied()
            .filter(|c| !c.is_whitespace())
            .collect();
        Self::from_chars(&kept)
    }
}

// Case mapping stays per-character: expansions that would change the length
// keep the original character instead.
fn upper_char(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(up), None) => up,
        _ => c,
    }
}

fn lower_char(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(low), None) => low,
        _ => c,
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.chars, &other.chars) || self.chars == other.chars
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.chars.iter().collect();
        write!(f, "{:?}", rendered)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.chars.iter().collect();
        f.write_str(&rendered)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::from_str(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_str(&value)
    }
}
