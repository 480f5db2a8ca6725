//! Integration tests with mock HTTP server

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod construction;
pub mod mock_server;
pub mod plagiarism;
