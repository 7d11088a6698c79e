//! Sequence-building operations.

/// New sequence holding the characters in reverse order, built by walking
/// the source from its last character backward.
pub fn reverse(text: &[char]) -> Vec<char> {
    let mut reversed = Vec::with_capacity(text.len());
    for &c in text.iter().rev() {
        reversed.push(c);
    }
    reversed
}

/// Greedy left-to-right replacement of `old` by `new`.
///
/// On a match the scan advances past the whole match, so replacements never
/// overlap. An empty `old` matches nothing and leaves the text unchanged.
pub fn replace(text: &[char], old: &[char], new: &[char]) -> Vec<char> {
    if old.is_empty() {
        return text.to_vec();
    }
    let mut replaced = Vec::with_capacity(text.len());
    let mut position = 0;
    while position < text.len() {
        if text.get(position..position + old.len()) == Some(old) {
            replaced.extend_from_slice(new);
            position += old.len();
        } else {
            replaced.push(text[position]);
            position += 1;
        }
    }
    replaced
}

/// Splits at every occurrence of `separator`, keeping empty segments.
///
/// Each separator ends the current segment and the final segment is emitted
/// unconditionally, so the result always holds exactly `occurrences + 1`
/// segments: `"a,b,"` gives `["a", "b", ""]` and the empty text gives
/// `[""]`.
pub fn split(text: &[char], separator: char) -> Vec<Vec<char>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for &c in text {
        if c == separator {
            segments.push(current);
            current = Vec::new();
        } else {
            current.push(c);
        }
    }
    segments.push(current);
    segments
}

/// Copy of `count` characters starting at `start`, or `None` when the range
/// leaves the text. A zero `count` at any position up to the length yields
/// an empty sequence.
pub fn substring(text: &[char], start: usize, count: usize) -> Option<Vec<char>> {
    let tail = text.get(start..)?;
    let window = tail.get(..count)?;
    Some(window.to_vec())
}

/// Copy from `start` to the end, or `None` when `start` is past the end.
pub fn substring_from(text: &[char], start: usize) -> Option<Vec<char>> {
    text.get(start..).map(|tail| tail.to_vec())
}

/// Prepends exactly `count` copies of `pad`.
pub fn pad_left(text: &[char], count: usize, pad: char) -> Vec<char> {
    let mut padded = Vec::with_capacity(text.len() + count);
    for _ in 0..count {
        padded.push(pad);
    }
    padded.extend_from_slice(text);
    padded
}

/// Appends exactly `count` copies of `pad`.
pub fn pad_right(text: &[char], count: usize, pad: char) -> Vec<char> {
    let mut padded = Vec::with_capacity(text.len() + count);
    padded.extend_from_slice(text);
    for _ in 0..count {
        padded.push(pad);
    }
    padded
}
