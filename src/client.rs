//! Classification client in its two callable forms.
//!
//! Request building and response validation live in `operation`; `core`
//! (async) and `blocking` only move bytes.

pub mod builder;
pub mod core;
mod operation;
mod validation;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use builder::PangramClientBuilder;
pub use core::PangramClient;
pub use operation::DEPRECATION_REMOVAL_DATE;
