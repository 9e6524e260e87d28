//! Tests for process supervision and readiness probing
//!
//! The shell's contract: the spawned server never outlives its supervisor,
//! shutdown is idempotent across exit paths, and the readiness wait is
//! time-bounded so startup can fall back instead of hanging.

use std::time::{Duration, Instant};

use choreboard::Error;
use choreboard::server::listen_url;
use choreboard::shell::{ServerProcess, probe, wait_for_ready};

use super::common::{TestServer, free_port};

#[test]
fn test_shutdown_terminates_server() {
    let mut server = TestServer::start();
    assert!(probe(&server.base_url), "server should answer before shutdown");
    assert!(server.process.id().is_some());

    server.process.shutdown();
    assert!(!server.process.is_running());
    assert!(server.process.id().is_none());
    assert!(server.process.has_exited());

    // Give the OS a moment to release the socket, then confirm nothing
    // is listening any more.
    std::thread::sleep(Duration::from_millis(200));
    assert!(!probe(&server.base_url), "no process should remain after shutdown");
}

#[test]
fn test_shutdown_is_idempotent() {
    let mut server = TestServer::start();

    // Multiple exit paths may all fire; every call past the first is a no-op.
    server.process.shutdown();
    server.process.shutdown();
    server.process.shutdown();
    assert!(!server.process.is_running());
}

#[test]
fn test_drop_terminates_server() {
    let base_url;
    {
        let server = TestServer::start();
        base_url = server.base_url.clone();
        assert!(probe(&base_url));
        // Dropped here without an explicit shutdown call
    }

    std::thread::sleep(Duration::from_millis(200));
    assert!(!probe(&base_url), "drop must terminate the child");
}

#[test]
fn test_spawn_failure_is_startup_error() {
    let err = ServerProcess::spawn(
        std::path::Path::new("/nonexistent/choreboard-server"),
        5173,
        std::path::Path::new("/tmp/never-used.db"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Startup(_)));
}

#[test]
fn test_readiness_times_out_against_dead_port() {
    // Nothing listens on this port; the wait must report failure only
    // after its deadline, which is the window-opens-anyway fallback path.
    let url = listen_url(free_port());
    let timeout = Duration::from_millis(600);

    let started = Instant::now();
    let ready = wait_for_ready(&url, timeout);
    let elapsed = started.elapsed();

    assert!(!ready);
    assert!(elapsed >= Duration::from_millis(300), "should keep retrying until near the deadline");
    assert!(elapsed < Duration::from_secs(10), "must not wait far past the deadline");
}

#[test]
fn test_readiness_confirms_running_server() {
    let server = TestServer::start();
    assert!(wait_for_ready(&server.base_url, Duration::from_secs(5)));
}
