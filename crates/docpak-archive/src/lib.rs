//! In-memory zip assembly for bulk document export.
//!
//! # Architecture
//!
//! - `entry.rs` - The `(name, bytes)` pairs destined for an archive
//! - `assemble.rs` - Zip writing and name-collision resolution
//!
//! The assembler never touches persistent storage; it produces a single
//! byte buffer and leaves persistence to the caller.

pub use assemble::{ARCHIVE_NAME, assemble, disambiguate};
pub use entry::ArchiveEntry;
pub use error::{Error, Result};

mod assemble;
mod entry;
mod error;
