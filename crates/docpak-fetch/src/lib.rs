//! Bounded-concurrency document retrieval with per-item outcome capture.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - `data` - Immutable configuration and outcome types
//! - `core` - Pure transformations (backoff, filename derivation)
//! - `effects` - I/O operations with trait abstraction
//!
//! # Key Properties
//!
//! - **Bounded fan-out**: at most `max_concurrent` fetches in flight
//! - **Partial failure**: one bad item never sinks its siblings; every
//!   input job yields exactly one [`Outcome`]
//! - **Explicit retry**: no retries unless configured; exponential backoff
//! - **Cancellation**: the whole batch can be abandoned mid-flight, and
//!   completed payloads are discarded with it

mod core;
mod data;
mod effects;
mod error;

pub use self::core::{derive_filename, retry_delay};
pub use data::{BatchOptions, FetchJob, FetchOptions, Outcome};
pub use effects::{BatchFetcher, CancelSignal, Canceller, HttpClient, cancel_pair};
pub use error::{FetchError, Result};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;
