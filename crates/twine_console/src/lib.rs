//! Console facade over a reader/writer pair.
//!
//! The library crates never touch the process streams themselves; anything
//! interactive goes through a `Console`, which can just as well wrap
//! in-memory buffers in tests.

mod console;

pub use console::Console;
