//! Immutable data types for retrieval operations.
//!
//! Configuration and outcome types passed between functions without
//! mutation.

pub mod options;
pub mod outcome;

pub use options::{BatchOptions, FetchOptions};
pub use outcome::{FetchJob, Outcome};
