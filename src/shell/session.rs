//! Application session
//!
//! One `ShellSession` is constructed at startup and handed to whichever
//! handlers need it, instead of keeping module-level globals for "the
//! child process" and "the window". It owns the server process, so
//! dropping the session (or calling `shutdown` from any exit path)
//! terminates the child exactly once.

use std::time::Duration;

use crate::server::listen_url;
use crate::shell::{ServerProcess, readiness};

/// The shell's view of one application run
#[derive(Debug)]
pub struct ShellSession {
    server: ServerProcess,
    root_url: String,
}

impl ShellSession {
    /// Wrap a freshly spawned server process
    #[must_use]
    pub fn new(server: ServerProcess, port: u16) -> Self {
        Self {
            server,
            root_url: listen_url(port),
        }
    }

    /// The URL the window should load
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Block until the server answers its health endpoint, or the timeout
    /// elapses (the fallback path: open the window regardless)
    #[must_use]
    pub fn wait_for_ready(&self, timeout: Duration) -> bool {
        readiness::wait_for_ready(&self.root_url, timeout)
    }

    /// Returns `true` if the server child exited on its own
    pub fn server_exited(&mut self) -> bool {
        self.server.has_exited()
    }

    /// Terminate the server process (idempotent across exit paths)
    pub fn shutdown(&mut self) {
        self.server.shutdown();
    }
}
