//! # pangram
//!
//! Client library for the Pangram Labs text classification API: detect
//! AI-generated text, check for plagiarism, and analyse long documents window
//! by window.
//!
//! ## Overview
//!
//! Every operation is one HTTP POST with a JSON body. The client validates the
//! HTTP status, any error reported inside a successful response, and the
//! presence of the fields each operation promises, then decodes the body into
//! a typed result. Nothing is retried, cached or shared between calls.
//!
//! - **Async**: [`PangramClient`]
//! - **Blocking**: [`blocking::PangramClient`] (cargo feature `blocking`, on by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pangram::PangramClient;
//!
//! #[tokio::main]
//! async fn main() -> pangram::Result<()> {
//!     // Reads PANGRAM_API_KEY
//!     let client = PangramClient::new()?;
//!
//!     let result = client.classify("The quick brown fox jumps over the lazy dog.").await?;
//!     println!("{:?} ({:?})", result.prediction, result.score());
//!
//!     let batch = client.classify_batch(&["first text", "second text"]).await?;
//!     assert_eq!(batch.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Async client, blocking client and builder |
//! | [`config`] | Endpoints, timeout, batch limit, credential resolution |
//! | [`types`] | Result types and request options |
//! | [`transport`] | Response validation shared by both forms |
//! | [`error_code`] | Canonical error classification |

pub mod client;
pub mod config;
pub mod error_code;
pub mod transport;
pub mod types;

#[cfg(feature = "blocking")]
pub use client::blocking;
pub use client::{PangramClient, PangramClientBuilder};
pub use config::{ClientConfig, Endpoint, Endpoints};
pub use types::{
    ClassificationResult, ClassifyOptions, PlagiarismResult, PlagiarizedSource, Window,
    WindowedResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
