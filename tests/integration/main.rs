//! Integration tests for choreboard
//!
//! These tests spawn the real `choreboard-server` binary and exercise the
//! HTTP surface and the shell's process supervision end to end.


#[path = "lifecycle_test.rs"]
mod lifecycle_test;

#[path = "server_test.rs"]
mod server_test;
