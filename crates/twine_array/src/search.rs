//! Index scans over slices.

use crate::{count, resize};

/// Every position holding `value`, in ascending order.
///
/// The result is grown one element at a time through [`resize`], so each
/// match reallocates. The scan itself is a single left-to-right pass.
pub fn all_indices<T: PartialEq>(array: &[T], value: &T) -> Box<[usize]> {
    let mut found: Box<[usize]> = Box::new([]);
    for (position, item) in array.iter().enumerate() {
        if item == value {
            let grown = count(&found) + 1;
            resize(&mut found, grown);
            found[grown - 1] = position;
        }
    }
    found
}

/// First position holding `value`, or `None` when absent.
pub fn first_index<T: PartialEq>(array: &[T], value: &T) -> Option<usize> {
    all_indices(array, value).first().copied()
}

/// Last position holding `value`, or `None` when absent.
pub fn last_index<T: PartialEq>(array: &[T], value: &T) -> Option<usize> {
    all_indices(array, value).last().copied()
}

/// Whether any element equals `value`.
pub fn contains<T: PartialEq>(array: &[T], value: &T) -> bool {
    first_index(array, value).is_some()
}
