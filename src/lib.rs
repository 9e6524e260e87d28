//! choreboard - a personal chore tracker
//!
//! This library provides the core functionality shared by the two choreboard
//! binaries: the SQLite-backed chore store, the HTTP-agnostic API layer, the
//! tiny_http server adapter that also serves the embedded web UI, and the
//! desktop shell's process supervision and readiness probing.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod paths;
pub mod server;
pub mod shell;
pub mod storage;

pub use error::{Error, Result};
