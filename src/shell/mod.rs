//! Desktop shell support
//!
//! The shell binary owns the server process's lifetime: it spawns
//! `choreboard-server` as a supervised child, probes its health endpoint
//! until it is ready, shows its UI in a native window and terminates the
//! child exactly once on exit.

mod process;
mod readiness;
mod session;

pub use process::{ServerProcess, find_server_binary};
pub use readiness::{probe, wait_for_ready};
pub use session::ShellSession;
