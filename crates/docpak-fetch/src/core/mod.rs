//! Pure transformations used by the retrieval pipeline.

mod filename;
mod retry;

pub use filename::derive_filename;
pub use retry::retry_delay;
