//! Allocation and reshaping of boxed slices.

/// Number of elements the array holds.
///
/// Slices carry their length with them, so this never probes the array to
/// discover its size.
pub fn count<T>(array: &[T]) -> usize {
    array.len()
}

/// Allocates a fresh array of `len` default-valued elements.
pub fn make<T: Default>(len: usize) -> Box<[T]> {
    (0..len).map(|_| T::default()).collect()
}

/// Copies `src` into `dst` starting at offset `at`.
///
/// Panics when `dst` cannot hold `src` at that offset. Callers are expected
/// to have sized the destination before copying.
pub fn copy_into<T: Clone>(src: &[T], dst: &mut [T], at: usize) {
    dst[at..at + src.len()].clone_from_slice(src);
}

/// Rebinds `array` to a fresh array of `new_len` elements.
///
/// The leading `min(old, new)` elements move over; a grown tail is filled
/// with `T::default()`. The old allocation is dropped.
pub fn resize<T: Default>(array: &mut Box<[T]>, new_len: usize) {
    let old = std::mem::take(array);
    let keep = old.len().min(new_len);
    let mut next = Vec::with_capacity(new_len);
    next.extend(old.into_vec().into_iter().take(keep));
    next.resize_with(new_len, T::default);
    *array = next.into_boxed_slice();
}

/// Rebinds `array` to a fresh array holding the same elements in reverse
/// order.
pub fn reverse<T>(array: &mut Box<[T]>) {
    let old = std::mem::take(array);
    let mut next = Vec::with_capacity(old.len());
    for item in old.into_vec().into_iter().rev() {
        next.push(item);
    }
    *array = next.into_boxed_slice();
}
