//! Server readiness probing
//!
//! The shell decides the server is ready by polling its health endpoint
//! rather than string-matching the child's log output: the probe observes
//! the same thing the window is about to depend on (a socket accepting
//! requests), and a hard deadline bounds the wait so the shell never
//! blocks forever.

use std::thread;
use std::time::{Duration, Instant};

/// Initial delay between probes
const INITIAL_BACKOFF: Duration = Duration::from_millis(50);

/// Backoff cap
const MAX_BACKOFF: Duration = Duration::from_millis(500);

/// Per-request timeout, kept short so one hung probe cannot stall the wait
const PROBE_TIMEOUT: Duration = Duration::from_millis(900);

/// Poll the health endpoint until it answers 200 or the deadline passes
///
/// Returns `true` once the server responded; `false` means the timeout
/// elapsed and the caller should take the fallback path (open the window
/// anyway and schedule a reload).
#[must_use]
pub fn wait_for_ready(base_url: &str, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    let mut backoff = INITIAL_BACKOFF;

    loop {
        if probe(base_url) {
            return true;
        }
        if Instant::now() + backoff >= deadline {
            log::warn!("server not ready after {timeout:?}");
            return false;
        }
        thread::sleep(backoff);
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}

/// Single health-endpoint probe
#[must_use]
pub fn probe(base_url: &str) -> bool {
    let Ok(client) = reqwest::blocking::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
    else {
        return false;
    };

    client
        .get(format!("{base_url}/api/health"))
        .send()
        .map(|resp| resp.status().is_success())
        .unwrap_or(false)
}
