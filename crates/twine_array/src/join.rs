//! String rendering of slices.

use std::fmt::Display;

/// Concatenates the display forms of all elements, with `separator` strictly
/// between consecutive elements. An empty array renders as the empty string.
pub fn join<T: Display, S: Display>(array: &[T], separator: S) -> String {
    let separator = separator.to_string();
    let mut rendered = String::new();
    for (position, item) in array.iter().enumerate() {
        if position > 0 {
            rendered.push_str(&separator);
        }
        rendered.push_str(&item.to_string());
    }
    rendered
}
