//! HTTP server adapter
//!
//! Translates between tiny_http and the HTTP-agnostic API layer, and serves
//! the embedded web UI from the same origin.

mod tiny_http;

pub use tiny_http::{listen_url, serve};
