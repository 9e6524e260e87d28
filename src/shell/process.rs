//! Supervised server process
//!
//! Manages the `choreboard-server` child: spawn with the right arguments
//! and environment, and tear down exactly once no matter how many exit
//! paths fire. Shutdown takes the child handle out of its `Option`, so a
//! second call (window close followed by app quit, or the `Drop` impl)
//! is a no-op.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use crate::error::{Error, Result};

/// Environment variable the shell sets on the child to mark production mode
pub const ENV_MARKER: &str = "CHOREBOARD_ENV";

/// Environment variable overriding the server binary location
pub const SERVER_BIN_ENV: &str = "CHOREBOARD_SERVER_BIN";

/// A running (or already terminated) server child process
#[derive(Debug)]
pub struct ServerProcess {
    child: Option<Child>,
}

impl ServerProcess {
    /// Spawn the server binary with the given port and database path
    ///
    /// # Errors
    ///
    /// Returns `Error::Startup` if the process cannot be started; the
    /// shell treats that as fatal.
    pub fn spawn(program: &Path, port: u16, database: &Path) -> Result<Self> {
        let child = Command::new(program)
            .arg("--port")
            .arg(port.to_string())
            .arg("--db")
            .arg(database)
            .env(ENV_MARKER, "production")
            .spawn()
            .map_err(|e| {
                Error::Startup(format!("failed to spawn {}: {e}", program.display()))
            })?;

        log::info!("server process spawned (pid {})", child.id());
        Ok(Self { child: Some(child) })
    }

    /// Returns `true` if the child has not been shut down yet
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.child.is_some()
    }

    /// The child's process id, if still running
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Returns `true` if the child exited on its own
    pub fn has_exited(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(Some(_))),
            None => true,
        }
    }

    /// Terminate the child. Idempotent: safe to call from every exit path.
    pub fn shutdown(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
            log::info!("server process terminated");
        }
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Locate the server binary: explicit flag, then environment override,
/// then a sibling of the shell executable.
pub fn find_server_binary(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(SERVER_BIN_ENV) {
        return Ok(PathBuf::from(path));
    }

    let exe = std::env::current_exe()
        .map_err(|e| Error::Startup(format!("cannot locate own executable: {e}")))?;
    let sibling = exe
        .parent()
        .map(|dir| dir.join(server_binary_name()))
        .ok_or_else(|| Error::Startup("shell executable has no parent directory".into()))?;

    if sibling.exists() {
        Ok(sibling)
    } else {
        Err(Error::Startup(format!(
            "server binary not found at {}",
            sibling.display()
        )))
    }
}

/// Platform-specific server binary filename
fn server_binary_name() -> &'static str {
    if cfg!(windows) {
        "choreboard-server.exe"
    } else {
        "choreboard-server"
    }
}
