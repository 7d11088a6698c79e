//! Generic array primitives over fixed-length boxed slices.
//!
//! Arrays here are `Box<[T]>`: fixed capacity, no spare growth room.
//! Operations that change an array's shape never mutate in place; they build
//! a fresh allocation and rebind the caller's binding to it.
//!
//! - `buffer` - allocation, copying, resizing, reversal
//! - `search` - index scans with `Option` sentinels
//! - `join` - string rendering with a separator

mod buffer;
mod join;
mod search;

pub use buffer::{copy_into, count, make, resize, reverse};
pub use join::join;
pub use search::{all_indices, contains, first_index, last_index};
