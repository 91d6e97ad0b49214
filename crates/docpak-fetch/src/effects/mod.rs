//! I/O operations and effectful computations for document retrieval.
//!
//! Everything that touches the network lives here, behind the
//! [`HttpClient`] trait so tests can run against an in-process mock.

mod batch;
mod cancel;
mod http;

pub use batch::BatchFetcher;
pub use cancel::{CancelSignal, Canceller, cancel_pair};
pub use http::HttpClient;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
