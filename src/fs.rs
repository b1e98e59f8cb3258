//! Fallible filesystem primitives.
//!
//! Every operation is synchronous, stateless, and blocking on the underlying
//! OS call: no caching, no locking, no cancellation. Concurrent callers race
//! at the OS level with OS-defined outcomes. Reads and directory listings
//! materialize their full result in memory before returning.

mod dir;
mod exists;
mod read;
mod write;

pub use dir::{is_directory, list_directory, parent_directory};
pub use exists::{is_readable, is_writable, path_exists};
pub use read::read_file;
pub use write::write_text_file;
